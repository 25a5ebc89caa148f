//! Fallback card synthesis: deterministic template expansion.
//!
//! When no authored card exists for a (consultant, code) pair but the
//! consultant is known — from the directory or an external descriptor — a
//! plausible default card is filled from the specialty's setup profile. The
//! result is a throwaway value: it is returned to the caller and never
//! written back into the store, so repeated calls re-synthesize.
//!
//! Everything about the synthesized card except `last_updated` is derived
//! purely from the inputs, including its id, so two calls with the same
//! inputs produce interchangeable cards.

use chrono::Utc;
use tracing::debug;

use layup_contracts::{
    card::{GeneralInfo, PreferenceCard},
    directory::{Consultant, ExternalSurgeon, ProcedureInfo},
    specialty::SpecialtyGroup,
};

use crate::traits::ProfileSource;

/// Procedure name used when the OPCS-4 code is not in the catalog.
const UNKNOWN_PROCEDURE_NAME: &str = "Procedure";

/// The consultant identity a card is synthesized for, normalized from either
/// a directory hit or an external descriptor.
#[derive(Debug, Clone)]
pub struct SurgeonIdentity {
    /// Stable id fragment for the synthesized card id. Never derived from
    /// call state — directory id, external id, or a surname slug.
    pub id_slug: String,
    pub name: String,
    pub title: String,
    /// The consultant's own recorded specialty, used when the code is not in
    /// the catalog.
    pub specialty: String,
}

impl From<&Consultant> for SurgeonIdentity {
    fn from(c: &Consultant) -> Self {
        Self {
            id_slug: c.id.clone(),
            name: c.full_name(),
            title: c.title.clone(),
            specialty: c.specialty.clone(),
        }
    }
}

impl From<&ExternalSurgeon> for SurgeonIdentity {
    fn from(s: &ExternalSurgeon) -> Self {
        let id_slug = s
            .id
            .clone()
            .unwrap_or_else(|| surname_slug(&s.last_name));
        Self {
            id_slug,
            name: s.full_name(),
            title: s.title.clone(),
            specialty: s.specialty_name.clone(),
        }
    }
}

/// Lowercased alphanumeric surname fragment for id derivation.
fn surname_slug(last_name: &str) -> String {
    last_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Fill a default card for `identity` and `opcs4_code` from the specialty's
/// setup profile.
///
/// Specialty and procedure name come from the catalog row when the code is
/// known; otherwise the consultant's own specialty and the literal
/// "Procedure" are used. The card id is `PC-<id_slug>-<code>`.
pub fn synthesize_card(
    identity: &SurgeonIdentity,
    opcs4_code: &str,
    catalog_row: Option<&ProcedureInfo>,
    profiles: &dyn ProfileSource,
) -> PreferenceCard {
    let (specialty, procedure_name) = match catalog_row {
        Some(row) => (row.specialty.clone(), row.procedure_name.clone()),
        None => (identity.specialty.clone(), UNKNOWN_PROCEDURE_NAME.to_string()),
    };

    let group = SpecialtyGroup::classify(&specialty);
    let profile = profiles.profile_for(group, &procedure_name);

    debug!(
        consultant = %identity.name,
        code = %opcs4_code,
        specialty = %specialty,
        group = %group,
        "synthesizing preference card from specialty defaults"
    );

    PreferenceCard {
        id: format!("PC-{}-{}", identity.id_slug, opcs4_code),
        consultant_name: identity.name.clone(),
        consultant_title: identity.title.clone(),
        specialty: specialty.clone(),
        procedure_name: Some(procedure_name),
        procedure_opcs4_codes: vec![opcs4_code.to_string()],
        general_info: Some(GeneralInfo {
            positioning: profile.positioning,
            anaesthetic_type: profile.anaesthetic_type,
            operating_table: profile.operating_table,
            estimated_duration_minutes: None,
        }),
        positioning_equipment: Some(profile.positioning_equipment),
        cleaning_prep: Some(profile.cleaning_prep),
        drapes_consumables: Some(profile.drapes_consumables),
        instrument_sets: Some(profile.instrument_sets),
        equipment: Some(profile.equipment),
        sutures_closure: Some(profile.sutures_closure),
        implants: if profile.implants.is_empty() {
            None
        } else {
            Some(profile.implants)
        },
        medications_fluids: Some(profile.medications_fluids),
        wound_dressing: Some(profile.wound_dressing),
        miscellaneous: Some(profile.miscellaneous),
        counts_notes: Some(profile.counts_notes),
        special_instructions: Some(profile.special_instructions),
        items: Vec::new(),
        last_updated: Utc::now().format("%Y-%m-%d").to_string(),
        notes: Some(format!(
            "Generated from {} specialty defaults; no authored card exists for this consultant and procedure.",
            specialty
        )),
        instructions: None,
    }
}
