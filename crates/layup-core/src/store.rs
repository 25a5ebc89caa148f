//! The immutable in-memory card index.
//!
//! `CardStore` is built once from the authored dataset and never mutated.
//! Construction validates id uniqueness and pre-indexes cards by lowercased
//! consultant name and by (name, code) pair, so the query operations are
//! O(1) amortized instead of linear scans. Declaration order is preserved
//! everywhere it is observable: per-consultant listings come back in dataset
//! order, and the first card authored for a (name, code) pair wins.

use std::collections::HashMap;

use tracing::debug;

use layup_contracts::{
    card::PreferenceCard,
    error::{LayupError, LayupResult},
};

/// A read-only index over the authored preference card dataset.
#[derive(Debug)]
pub struct CardStore {
    cards: Vec<PreferenceCard>,
    /// lowercased consultant name → card positions, in dataset order.
    by_consultant: HashMap<String, Vec<usize>>,
    /// (lowercased consultant name, code) → first matching card position.
    by_consultant_code: HashMap<(String, String), usize>,
}

impl CardStore {
    /// Build the index from authored cards.
    ///
    /// Returns `LayupError::DatasetError` if two cards share an id. Duplicate
    /// (consultant, code) pairs are tolerated — the first declaration wins,
    /// matching the authored dataset's lookup semantics.
    pub fn new(cards: Vec<PreferenceCard>) -> LayupResult<Self> {
        {
            let mut seen_ids: HashMap<&str, usize> = HashMap::new();
            for (pos, card) in cards.iter().enumerate() {
                if let Some(first) = seen_ids.insert(card.id.as_str(), pos) {
                    return Err(LayupError::DatasetError {
                        reason: format!(
                            "duplicate card id '{}' at positions {} and {}",
                            card.id, first, pos
                        ),
                    });
                }
            }
        }

        let mut by_consultant: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_consultant_code: HashMap<(String, String), usize> = HashMap::new();

        for (pos, card) in cards.iter().enumerate() {
            let name_key = card.consultant_name.to_lowercase();
            by_consultant.entry(name_key.clone()).or_default().push(pos);

            for code in &card.procedure_opcs4_codes {
                by_consultant_code
                    .entry((name_key.clone(), code.clone()))
                    .or_insert(pos);
            }
        }

        debug!(
            card_count = cards.len(),
            consultant_count = by_consultant.len(),
            "card store indexed"
        );

        Ok(Self {
            cards,
            by_consultant,
            by_consultant_code,
        })
    }

    /// Number of authored cards. Constant for the lifetime of the store.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All authored cards, in dataset order.
    pub fn cards(&self) -> &[PreferenceCard] {
        &self.cards
    }

    /// Every card owned by the named consultant (case-insensitive), in
    /// dataset order. Empty when the consultant has no cards.
    pub fn by_consultant(&self, consultant_name: &str) -> Vec<&PreferenceCard> {
        self.by_consultant
            .get(&consultant_name.to_lowercase())
            .map(|positions| positions.iter().map(|&p| &self.cards[p]).collect())
            .unwrap_or_default()
    }

    /// The first authored card matching (consultant, code), if any.
    pub fn by_consultant_and_code(
        &self,
        consultant_name: &str,
        opcs4_code: &str,
    ) -> Option<&PreferenceCard> {
        self.by_consultant_code
            .get(&(consultant_name.to_lowercase(), opcs4_code.to_string()))
            .map(|&p| &self.cards[p])
    }

    /// All cards listing the given code, in dataset order.
    ///
    /// Used by the procedure→consultants fallback; this is the one remaining
    /// linear scan, acceptable because it only runs when the catalog and
    /// directory both come up empty.
    pub fn cards_listing_code<'a>(
        &'a self,
        opcs4_code: &'a str,
    ) -> impl Iterator<Item = &'a PreferenceCard> {
        self.cards.iter().filter(move |c| c.covers_code(opcs4_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layup_contracts::card::PreferenceCardItem;

    fn card(id: &str, name: &str, codes: &[&str]) -> PreferenceCard {
        PreferenceCard {
            id: id.to_string(),
            consultant_name: name.to_string(),
            consultant_title: "Mr".to_string(),
            specialty: "General Surgery".to_string(),
            procedure_name: None,
            procedure_opcs4_codes: codes.iter().map(|c| c.to_string()).collect(),
            general_info: None,
            positioning_equipment: None,
            cleaning_prep: None,
            drapes_consumables: None,
            instrument_sets: None,
            equipment: None,
            sutures_closure: None,
            implants: None,
            medications_fluids: None,
            wound_dressing: None,
            miscellaneous: None,
            counts_notes: None,
            special_instructions: None,
            items: vec![PreferenceCardItem {
                inventory_id: "INV-1".to_string(),
                quantity: 1,
                notes: None,
            }],
            last_updated: "2025-01-01".to_string(),
            notes: None,
            instructions: None,
        }
    }

    #[test]
    fn duplicate_ids_are_rejected_at_construction() {
        let cards = vec![card("PC-1", "A B", &["X1"]), card("PC-1", "C D", &["X2"])];
        let err = CardStore::new(cards).unwrap_err();
        assert!(err.to_string().contains("duplicate card id 'PC-1'"));
    }

    #[test]
    fn by_consultant_is_case_insensitive_and_ordered() {
        let store = CardStore::new(vec![
            card("PC-1", "Jane Doe", &["X1"]),
            card("PC-2", "John Roe", &["X2"]),
            card("PC-3", "Jane Doe", &["X3"]),
        ])
        .unwrap();

        let lower = store.by_consultant("jane doe");
        let upper = store.by_consultant("JANE DOE");
        assert_eq!(lower.len(), 2);
        assert_eq!(lower[0].id, "PC-1");
        assert_eq!(lower[1].id, "PC-3");
        assert_eq!(lower, upper);

        assert!(store.by_consultant("Nobody").is_empty());
    }

    #[test]
    fn consultant_code_lookup_prefers_first_declaration() {
        // Two cards for the same (consultant, code) pair: the first authored
        // card must win, matching dataset declaration-order semantics.
        let store = CardStore::new(vec![
            card("PC-1", "Jane Doe", &["X1"]),
            card("PC-2", "Jane Doe", &["X1"]),
        ])
        .unwrap();

        let hit = store.by_consultant_and_code("Jane Doe", "X1").unwrap();
        assert_eq!(hit.id, "PC-1");
    }

    #[test]
    fn multi_code_cards_are_indexed_under_every_code() {
        let store = CardStore::new(vec![card("PC-1", "Jane Doe", &["X1", "X2"])]).unwrap();
        assert!(store.by_consultant_and_code("jane doe", "X1").is_some());
        assert!(store.by_consultant_and_code("jane doe", "X2").is_some());
        assert!(store.by_consultant_and_code("jane doe", "X3").is_none());
    }

    #[test]
    fn cards_listing_code_scans_in_dataset_order() {
        let store = CardStore::new(vec![
            card("PC-1", "Jane Doe", &["X1"]),
            card("PC-2", "John Roe", &["X1"]),
            card("PC-3", "Jane Doe", &["X2"]),
        ])
        .unwrap();

        let ids: Vec<&str> = store
            .cards_listing_code("X1")
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["PC-1", "PC-2"]);
    }
}
