//! The preference card record and its structured sections.
//!
//! A preference card is authored once, per consultant and per procedure, and
//! is never mutated at runtime. Older cards carry only the flat `items` list;
//! newer cards add the structured sections, and the two coexist on the same
//! record. All fields serialize camelCase to match the authored dataset.

use serde::{Deserialize, Serialize};

/// One stocked supply reference and count on a legacy card.
///
/// `inventory_id` is a foreign key into the trust's inventory catalog, which
/// is not part of this library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceCardItem {
    pub inventory_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Ownership model for instrument sets and implants.
///
/// - `Consignment` — supplier-owned stock held on-site.
/// - `Loan`        — supplied temporarily for a listed case.
/// - `Purchase`    — trust-owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ownership {
    Consignment,
    Loan,
    Purchase,
}

/// Theatre setup headline: patient position, anaesthetic, table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralInfo {
    pub positioning: String,
    pub anaesthetic_type: String,
    pub operating_table: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration_minutes: Option<u32>,
}

/// A named instrument tray or set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentSet {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership: Option<Ownership>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One implant or prosthesis line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplantLine {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership: Option<Ownership>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

/// A per-consultant, per-procedure theatre lay-up specification.
///
/// `id` is unique across the dataset and immutable once authored. Every
/// structured section is optional because legacy cards predate them; the
/// legacy `items` list defaults to empty on cards authored with sections
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceCard {
    /// Human-readable unique identifier, e.g. "PC-001".
    pub id: String,

    /// Owning clinician. Not unique on its own — a consultant holds one card
    /// per procedure.
    pub consultant_name: String,
    pub consultant_title: String,

    /// Free-text specialty, e.g. "Trauma Orthopaedics", "Cardiac".
    pub specialty: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_name: Option<String>,

    /// OPCS-4 codes this card applies to, in authored order. Cards observed
    /// in practice carry exactly one code, but the type allows many.
    pub procedure_opcs4_codes: Vec<String>,

    // ── Structured sections (all optional; legacy cards use `items` only) ────
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_info: Option<GeneralInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positioning_equipment: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaning_prep: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drapes_consumables: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument_sets: Option<Vec<InstrumentSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sutures_closure: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implants: Option<Vec<ImplantLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications_fluids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wound_dressing: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miscellaneous: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<Vec<String>>,

    /// Legacy flat supply list. Superseded by the structured sections but
    /// still present on most authored cards.
    #[serde(default)]
    pub items: Vec<PreferenceCardItem>,

    /// Authoring date as "YYYY-MM-DD". Synthesized cards get today's date.
    pub last_updated: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl PreferenceCard {
    /// Return true if this card applies to the given OPCS-4 code.
    pub fn covers_code(&self, opcs4_code: &str) -> bool {
        self.procedure_opcs4_codes
            .iter()
            .any(|c| c == opcs4_code)
    }

    /// Return true if this card belongs to the named consultant
    /// (case-insensitive equality).
    pub fn belongs_to(&self, consultant_name: &str) -> bool {
        self.consultant_name.eq_ignore_ascii_case(consultant_name)
    }

    /// Display string used by procedure-to-consultant listings,
    /// e.g. "Mr James Anderson".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.consultant_title, self.consultant_name)
    }
}
