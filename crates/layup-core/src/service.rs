//! The card resolution service: the three public query operations.
//!
//! `CardService` owns the immutable store plus the three collaborator seams
//! and wires them into the resolution pipeline:
//!
//!   authored card → directory/external fallback synthesis → None
//!
//! Every operation is total over its inputs: absence is `None` or an empty
//! list, never an error. Nothing is mutated after construction, so the
//! service is freely shareable across threads.

use tracing::debug;

use layup_contracts::{card::PreferenceCard, directory::ExternalSurgeon};

use crate::{
    store::CardStore,
    synth::{synthesize_card, SurgeonIdentity},
    traits::{ConsultantDirectory, ProcedureCatalog, ProfileSource},
};

/// Read-only query surface over the preference card dataset.
pub struct CardService {
    store: CardStore,
    directory: Box<dyn ConsultantDirectory>,
    catalog: Box<dyn ProcedureCatalog>,
    profiles: Box<dyn ProfileSource>,
}

impl CardService {
    /// Wire a service from the indexed store and its collaborators.
    pub fn new(
        store: CardStore,
        directory: Box<dyn ConsultantDirectory>,
        catalog: Box<dyn ProcedureCatalog>,
        profiles: Box<dyn ProfileSource>,
    ) -> Self {
        Self {
            store,
            directory,
            catalog,
            profiles,
        }
    }

    /// The underlying authored-card index.
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Every authored card owned by the named consultant, in dataset order.
    ///
    /// Name matching is case-insensitive; an unknown consultant yields an
    /// empty list.
    pub fn cards_by_consultant(&self, consultant_name: &str) -> Vec<&PreferenceCard> {
        self.store.by_consultant(consultant_name)
    }

    /// Resolve a single card for (consultant, code), or `None`.
    ///
    /// Resolution order, first hit wins:
    ///
    /// 1. An authored card whose consultant name matches case-insensitively
    ///    and whose code list contains `opcs4_code` — returned unmodified.
    /// 2. The consultant is found in the directory by surname/full-name
    ///    fragment, **or** an `ExternalSurgeon` descriptor was supplied —
    ///    a default card is synthesized from the specialty's setup profile.
    ///    Directory identity is preferred when both are available.
    /// 3. `None`.
    ///
    /// Synthesized cards are values handed to the caller; they are never
    /// persisted into the store.
    pub fn preference_card(
        &self,
        consultant_name: &str,
        opcs4_code: &str,
        external: Option<&ExternalSurgeon>,
    ) -> Option<PreferenceCard> {
        if let Some(card) = self.store.by_consultant_and_code(consultant_name, opcs4_code) {
            debug!(
                consultant = %consultant_name,
                code = %opcs4_code,
                card_id = %card.id,
                "authored card matched"
            );
            return Some(card.clone());
        }

        let identity = match self.directory.find_by_name(consultant_name) {
            Some(consultant) => Some(SurgeonIdentity::from(&consultant)),
            None => external.map(SurgeonIdentity::from),
        };

        let Some(identity) = identity else {
            debug!(
                consultant = %consultant_name,
                code = %opcs4_code,
                "no authored card, no directory or external identity; returning none"
            );
            return None;
        };

        let catalog_row = self.catalog.lookup(opcs4_code);
        Some(synthesize_card(
            &identity,
            opcs4_code,
            catalog_row.as_ref(),
            self.profiles.as_ref(),
        ))
    }

    /// Distinct consultant display names associated with an OPCS-4 code.
    ///
    /// The directory is authoritative: if the catalog knows the code's
    /// specialty and the directory lists consultants for it, their display
    /// names are returned in directory order and the dataset is not
    /// consulted. Otherwise the dataset is scanned for cards listing the
    /// code, collecting "<title> <name>" with first-occurrence dedup.
    pub fn consultants_for_procedure(&self, opcs4_code: &str) -> Vec<String> {
        if let Some(row) = self.catalog.lookup(opcs4_code) {
            let from_directory = self.directory.find_by_specialty(&row.specialty);
            if !from_directory.is_empty() {
                debug!(
                    code = %opcs4_code,
                    specialty = %row.specialty,
                    count = from_directory.len(),
                    "consultants resolved from directory"
                );
                return from_directory.iter().map(|c| c.display_name()).collect();
            }
        }

        let mut names: Vec<String> = Vec::new();
        for card in self.store.cards_listing_code(opcs4_code) {
            let display = card.display_name();
            if !names.contains(&display) {
                names.push(display);
            }
        }
        names
    }
}
