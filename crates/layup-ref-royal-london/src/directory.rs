//! The Royal London consultant directory.
//!
//! Implements the `ConsultantDirectory` seam over the embedded roster. The
//! roster is authoritative for specialty membership: procedure→consultant
//! listings prefer it over the card dataset.

use tracing::debug;

use layup_contracts::{
    directory::Consultant,
    error::{LayupError, LayupResult},
};
use layup_core::traits::ConsultantDirectory;

/// The authored consultant roster.
const CONSULTANTS: &str = include_str!("../data/consultants.json");

/// An in-memory consultant directory backed by the embedded roster.
#[derive(Debug)]
pub struct RoyalLondonDirectory {
    roster: Vec<Consultant>,
}

impl RoyalLondonDirectory {
    /// Parse the embedded roster.
    pub fn load() -> LayupResult<Self> {
        let roster: Vec<Consultant> =
            serde_json::from_str(CONSULTANTS).map_err(|e| LayupError::DatasetError {
                reason: format!("failed to parse embedded consultant roster: {}", e),
            })?;
        debug!(consultant_count = roster.len(), "consultant roster loaded");
        Ok(Self { roster })
    }

    /// The full roster, in directory order.
    pub fn roster(&self) -> &[Consultant] {
        &self.roster
    }
}

impl ConsultantDirectory for RoyalLondonDirectory {
    fn find_by_specialty(&self, specialty: &str) -> Vec<Consultant> {
        self.roster
            .iter()
            .filter(|c| c.specialty.eq_ignore_ascii_case(specialty))
            .cloned()
            .collect()
    }

    fn find_by_name(&self, name: &str) -> Option<Consultant> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        self.roster
            .iter()
            .find(|c| {
                let full = c.full_name().to_lowercase();
                query == c.last_name.to_lowercase()
                    || full.contains(&query)
                    || query.contains(&full)
            })
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_parses_and_is_ordered() {
        let directory = RoyalLondonDirectory::load().unwrap();
        assert!(directory.roster().len() >= 14);
        assert_eq!(directory.roster()[0].id, "CON-001");
    }

    #[test]
    fn find_by_specialty_is_case_insensitive_and_ordered() {
        let directory = RoyalLondonDirectory::load().unwrap();
        let trauma = directory.find_by_specialty("trauma orthopaedics");
        assert_eq!(trauma.len(), 2);
        assert_eq!(trauma[0].last_name, "Anderson");
        assert_eq!(trauma[1].last_name, "Okafor");
    }

    #[test]
    fn find_by_name_matches_surname_and_full_name_fragments() {
        let directory = RoyalLondonDirectory::load().unwrap();
        assert_eq!(
            directory.find_by_name("Anderson").unwrap().id,
            "CON-001"
        );
        assert_eq!(
            directory.find_by_name("james anderson").unwrap().id,
            "CON-001"
        );
        // A query that contains the full name still resolves.
        assert_eq!(
            directory.find_by_name("Mr James Anderson").unwrap().id,
            "CON-001"
        );
        assert!(directory.find_by_name("Nonexistent Person").is_none());
        assert!(directory.find_by_name("  ").is_none());
    }
}
