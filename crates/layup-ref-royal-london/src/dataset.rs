//! The embedded preference card dataset.
//!
//! All data in this crate is authored and fictional. The dataset is shipped
//! as a JSON document compiled into the binary and parsed once at
//! initialization; nothing is read from disk or the network at query time.

use layup_contracts::{
    card::PreferenceCard,
    error::{LayupError, LayupResult},
};

/// The authored Royal London preference card dataset.
const PREFERENCE_CARDS: &str = include_str!("../data/preference_cards.json");

/// Parse the embedded dataset.
///
/// Returns `LayupError::DatasetError` if the embedded document does not
/// parse — which would mean the build itself shipped broken data. Id
/// uniqueness is enforced separately by `CardStore::new`.
pub fn load_cards() -> LayupResult<Vec<PreferenceCard>> {
    serde_json::from_str(PREFERENCE_CARDS).map_err(|e| LayupError::DatasetError {
        reason: format!("failed to parse embedded preference card dataset: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_dataset_parses() {
        let cards = load_cards().unwrap();
        assert_eq!(cards.len(), 28);
    }

    #[test]
    fn card_ids_are_unique() {
        let cards = load_cards().unwrap();
        let ids: HashSet<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn dataset_covers_fourteen_specialties() {
        let cards = load_cards().unwrap();
        let specialties: HashSet<&str> = cards.iter().map(|c| c.specialty.as_str()).collect();
        assert_eq!(specialties.len(), 14);
    }

    #[test]
    fn every_card_lists_at_least_one_code_and_positive_quantities() {
        let cards = load_cards().unwrap();
        for card in &cards {
            assert!(
                !card.procedure_opcs4_codes.is_empty(),
                "card {} has no procedure codes",
                card.id
            );
            for item in &card.items {
                assert!(
                    item.quantity > 0,
                    "card {} item {} has zero quantity",
                    card.id,
                    item.inventory_id
                );
            }
        }
    }

    #[test]
    fn inventory_ids_are_unique_across_the_dataset() {
        let cards = load_cards().unwrap();
        let mut seen = HashSet::new();
        for card in &cards {
            for item in &card.items {
                assert!(
                    seen.insert(item.inventory_id.as_str()),
                    "inventory id {} appears twice",
                    item.inventory_id
                );
            }
        }
    }

    #[test]
    fn pc_001_is_the_anderson_hip_card() {
        let cards = load_cards().unwrap();
        let card = cards.iter().find(|c| c.id == "PC-001").unwrap();
        assert_eq!(card.consultant_name, "James Anderson");
        assert_eq!(card.specialty, "Trauma Orthopaedics");
        assert!(card.covers_code("W371"));
        assert_eq!(card.items[0].inventory_id, "INV-00001");
        assert_eq!(card.items[0].quantity, 1);
    }
}
