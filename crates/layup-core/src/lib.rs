//! # layup-core
//!
//! The query engine of the LAYUP preference card library: the immutable
//! `CardStore` index, the `CardService` resolution pipeline, fallback card
//! synthesis, and the trait seams for the consultant directory, procedure
//! catalog, and setup profile book.
//!
//! Nothing here performs I/O. Production data and profile implementations
//! live in layup-ref-royal-london and layup-profiles.

pub mod service;
pub mod store;
pub mod synth;
pub mod traits;

pub use service::CardService;
pub use store::CardStore;
