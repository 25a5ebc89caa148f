//! Closed specialty grouping used by card synthesis.
//!
//! Free-text specialty names in the dataset ("Trauma Orthopaedics",
//! "Cardiac") are classified into a closed set of groups, and the synthesis
//! profile book is keyed by that set. This replaces scattered string-equality
//! branches with one declarative lookup and gives the compiler an
//! exhaustiveness check over every group.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The synthesis-relevant specialty groups.
///
/// Serialized kebab-case so the profile book can key rules by group name in
/// TOML, e.g. `specialty_groups = ["orthopaedics", "vascular"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialtyGroup {
    Orthopaedics,
    Neurosurgery,
    Plastics,
    Urology,
    Gynaecology,
    Cardiothoracic,
    Vascular,
    GeneralSurgery,
    Ent,
    Ophthalmology,
    Maxillofacial,
    Other,
}

impl SpecialtyGroup {
    /// Classify a free-text specialty name into its group.
    ///
    /// Matching is case-insensitive and substring-tolerant: "Trauma
    /// Orthopaedics" and "Elective Orthopaedics" both classify as
    /// `Orthopaedics`, "Neurology" as `Neurosurgery`, "Cardiac" and
    /// "Thoracic" as `Cardiothoracic`. Unrecognized names classify as
    /// `Other`.
    pub fn classify(specialty: &str) -> Self {
        let s = specialty.to_lowercase();

        if s.contains("ortho") {
            Self::Orthopaedics
        } else if s.contains("neuro") {
            Self::Neurosurgery
        } else if s.contains("plast") {
            Self::Plastics
        } else if s.contains("urol") {
            Self::Urology
        } else if s.contains("gyn") {
            Self::Gynaecology
        } else if s.contains("cardi") || s.contains("thoracic") {
            Self::Cardiothoracic
        } else if s.contains("vasc") {
            Self::Vascular
        } else if s.contains("maxillofacial") || s.contains("oral") {
            Self::Maxillofacial
        } else if s.contains("ophthal") {
            Self::Ophthalmology
        } else if s == "ent" || s.contains("otolaryng") || s.contains("ear, nose") {
            Self::Ent
        } else if s.contains("general")
            || s.contains("colorectal")
            || s.contains("upper gi")
            || s.contains("hepatobiliary")
        {
            Self::GeneralSurgery
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for SpecialtyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Orthopaedics => "orthopaedics",
            Self::Neurosurgery => "neurosurgery",
            Self::Plastics => "plastics",
            Self::Urology => "urology",
            Self::Gynaecology => "gynaecology",
            Self::Cardiothoracic => "cardiothoracic",
            Self::Vascular => "vascular",
            Self::GeneralSurgery => "general-surgery",
            Self::Ent => "ent",
            Self::Ophthalmology => "ophthalmology",
            Self::Maxillofacial => "maxillofacial",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
