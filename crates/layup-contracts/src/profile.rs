//! The fully-resolved setup profile a synthesized card is filled from.
//!
//! A `SetupProfile` is what the profile book hands back after merging a
//! matched rule over the default document: every section is populated, so
//! synthesis is a straight template fill with no further branching.

use serde::{Deserialize, Serialize};

use crate::card::{ImplantLine, InstrumentSet};

/// A complete theatre setup template for one specialty/procedure shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupProfile {
    pub positioning: String,
    pub anaesthetic_type: String,
    pub operating_table: String,
    pub positioning_equipment: Vec<String>,
    pub cleaning_prep: Vec<String>,
    pub drapes_consumables: Vec<String>,
    pub instrument_sets: Vec<InstrumentSet>,
    pub equipment: Vec<String>,
    pub sutures_closure: Vec<String>,
    /// Empty for specialties with no standing implant line.
    pub implants: Vec<ImplantLine>,
    pub medications_fluids: Vec<String>,
    pub wound_dressing: Vec<String>,
    pub miscellaneous: Vec<String>,
    pub counts_notes: String,
    pub special_instructions: Vec<String>,
}
