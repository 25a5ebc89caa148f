//! Profile rule types and configuration schema.
//!
//! A `ProfileConfig` is deserialized from TOML and holds a mandatory default
//! profile plus an ordered list of `ProfileRule`s. Rules are evaluated in
//! declaration order — the first matching rule wins and is merged over the
//! default. If no rule matches, the default profile is used as-is.

use serde::{Deserialize, Serialize};

use layup_contracts::{
    card::{ImplantLine, InstrumentSet},
    profile::SetupProfile,
    specialty::SpecialtyGroup,
};

/// One specialty-keyed setup rule loaded from TOML.
///
/// A rule matches when its `specialty_groups` list contains the queried group
/// AND its `name_keywords` list is empty or any keyword appears in the
/// lowercased procedure name. Scalar fields and the `Option`al list fields
/// replace the default's value when present; the `extra_*` lists and
/// `implants` are appended to the default's lists.
///
/// Example:
/// ```toml
/// [[profiles]]
/// id = "orthopaedics-lateral"
/// description = "Hip and femoral work is done lateral on a trauma table"
/// specialty_groups = ["orthopaedics"]
/// name_keywords = ["hip", "femur"]
/// positioning = "Lateral decubitus"
/// positioning_equipment = ["Bean bag", "Axillary roll", "Bolsters"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRule {
    /// Stable identifier used in logs.
    pub id: String,

    /// Human-readable explanation of what this rule covers.
    pub description: String,

    /// Groups this rule applies to. A rule may span groups, e.g.
    /// cardiothoracic and vascular both use imaging-compatible tables.
    pub specialty_groups: Vec<SpecialtyGroup>,

    /// Lowercase fragments matched against the procedure name. Empty means
    /// the rule matches every procedure in its groups.
    #[serde(default)]
    pub name_keywords: Vec<String>,

    // ── Overrides (replace the default when present) ─────────────────────────
    pub positioning: Option<String>,
    pub anaesthetic_type: Option<String>,
    pub operating_table: Option<String>,
    pub positioning_equipment: Option<Vec<String>>,
    pub wound_dressing: Option<Vec<String>>,
    pub counts_notes: Option<String>,

    // ── Additions (appended to the default's lists) ──────────────────────────
    #[serde(default)]
    pub extra_equipment: Vec<String>,
    #[serde(default)]
    pub extra_instrument_sets: Vec<InstrumentSet>,
    #[serde(default)]
    pub implants: Vec<ImplantLine>,
    #[serde(default)]
    pub extra_medications: Vec<String>,
    #[serde(default)]
    pub extra_special_instructions: Vec<String>,
}

impl ProfileRule {
    /// Return true if this rule matches the given group and procedure name.
    pub fn matches(&self, group: SpecialtyGroup, procedure_name: &str) -> bool {
        if !self.specialty_groups.contains(&group) {
            return false;
        }
        if self.name_keywords.is_empty() {
            return true;
        }
        let name = procedure_name.to_lowercase();
        self.name_keywords
            .iter()
            .any(|kw| name.contains(&kw.to_lowercase()))
    }

    /// Merge this rule over the default profile.
    pub fn apply(&self, mut base: SetupProfile) -> SetupProfile {
        if let Some(positioning) = &self.positioning {
            base.positioning = positioning.clone();
        }
        if let Some(anaesthetic) = &self.anaesthetic_type {
            base.anaesthetic_type = anaesthetic.clone();
        }
        if let Some(table) = &self.operating_table {
            base.operating_table = table.clone();
        }
        if let Some(equipment) = &self.positioning_equipment {
            base.positioning_equipment = equipment.clone();
        }
        if let Some(dressing) = &self.wound_dressing {
            base.wound_dressing = dressing.clone();
        }
        if let Some(counts) = &self.counts_notes {
            base.counts_notes = counts.clone();
        }

        base.equipment.extend(self.extra_equipment.iter().cloned());
        base.instrument_sets
            .extend(self.extra_instrument_sets.iter().cloned());
        base.implants.extend(self.implants.iter().cloned());
        base.medications_fluids
            .extend(self.extra_medications.iter().cloned());
        base.special_instructions
            .extend(self.extra_special_instructions.iter().cloned());

        base
    }
}

/// The top-level structure deserialized from a TOML profile document.
///
/// The `[default]` table is a complete `SetupProfile`; every `[[profiles]]`
/// rule is a delta over it. Rules are evaluated in declaration order, first
/// match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// The baseline supine/general-anaesthetic setup.
    pub default: SetupProfile,

    /// Ordered list of specialty rules. First match wins.
    #[serde(default)]
    pub profiles: Vec<ProfileRule>,
}
