//! The OPCS-4 procedure classification and tariff table.
//!
//! Implements the `ProcedureCatalog` seam over an embedded code→row map.
//! Coverage is deliberately partial — codes outside the trust's common
//! casemix are absent, and lookups for them return `None` so callers fall
//! back to the consultant's own specialty or to the card dataset.

use std::collections::HashMap;

use tracing::debug;

use layup_contracts::{
    directory::ProcedureInfo,
    error::{LayupError, LayupResult},
};
use layup_core::traits::ProcedureCatalog;

/// The authored classification/tariff rows.
const PROCEDURE_TARIFFS: &str = include_str!("../data/procedure_tariffs.json");

/// An in-memory procedure catalog backed by the embedded tariff table.
#[derive(Debug)]
pub struct TariffCatalog {
    rows: HashMap<String, ProcedureInfo>,
}

impl TariffCatalog {
    /// Parse the embedded tariff table.
    pub fn load() -> LayupResult<Self> {
        let rows: HashMap<String, ProcedureInfo> = serde_json::from_str(PROCEDURE_TARIFFS)
            .map_err(|e| LayupError::DatasetError {
                reason: format!("failed to parse embedded tariff table: {}", e),
            })?;
        debug!(row_count = rows.len(), "procedure tariff table loaded");
        Ok(Self { rows })
    }

    /// Number of classified codes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ProcedureCatalog for TariffCatalog {
    fn lookup(&self, opcs4_code: &str) -> Option<ProcedureInfo> {
        self.rows.get(opcs4_code).cloned()
    }
}
