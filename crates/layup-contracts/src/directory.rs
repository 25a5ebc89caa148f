//! Records exchanged with the two external collaborators: the consultant
//! directory and the procedure classification/tariff table.
//!
//! Both collaborators are black boxes to the query logic — only these record
//! shapes are part of the contract. See the trait seams in layup-core.

use serde::{Deserialize, Serialize};

/// One consultant in the directory roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultant {
    /// Stable directory identifier, e.g. "CON-001". Used to derive
    /// synthesized card ids.
    pub id: String,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    /// Specialty tag as recorded by the directory, e.g. "Trauma Orthopaedics".
    pub specialty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subspecialty: Option<String>,
}

impl Consultant {
    /// "James Anderson"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "Mr James Anderson"
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.title, self.first_name, self.last_name)
    }
}

/// A surgeon descriptor supplied by an upstream system when the consultant is
/// not in the local directory.
///
/// The `id` is optional; when absent, synthesized card ids fall back to a
/// lowercased surname slug so they remain stable across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSurgeon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub specialty_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_subspecialty: Option<String>,
}

impl ExternalSurgeon {
    /// "James Anderson"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One row of the procedure classification/tariff table, keyed externally by
/// OPCS-4 code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureInfo {
    pub specialty: String,
    pub procedure_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_gbp: Option<u32>,
}
