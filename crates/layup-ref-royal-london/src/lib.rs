//! # layup-ref-royal-london
//!
//! Embedded Royal London reference data for the LAYUP preference card
//! library: the authored card dataset, the consultant roster, and the OPCS-4
//! classification/tariff table, plus a helper that wires them into a ready
//! `CardService`.
//!
//! All data is authored and fictional. No external systems are contacted —
//! this crate stands in for the trust's real directory and tariff services.

pub mod dataset;
pub mod directory;
pub mod tariffs;

use layup_contracts::error::LayupResult;
use layup_core::{CardService, CardStore};
use layup_profiles::TomlProfileBook;

pub use directory::RoyalLondonDirectory;
pub use tariffs::TariffCatalog;

/// Build a `CardService` over the embedded Royal London data and the shipped
/// setup profile book.
pub fn royal_london_service() -> LayupResult<CardService> {
    let store = CardStore::new(dataset::load_cards()?)?;
    let directory = RoyalLondonDirectory::load()?;
    let catalog = TariffCatalog::load()?;
    let profiles = TomlProfileBook::embedded()?;

    Ok(CardService::new(
        store,
        Box::new(directory),
        Box::new(catalog),
        Box::new(profiles),
    ))
}
