//! Trait seams for the external collaborators of the card service.
//!
//! The query logic only ever sees these three traits:
//!
//! - `ConsultantDirectory` — the trust's consultant roster
//! - `ProcedureCatalog`    — the OPCS-4 classification/tariff table
//! - `ProfileSource`       — the specialty→setup profile book
//!
//! Production implementations live in layup-ref-royal-london and
//! layup-profiles; tests substitute small in-memory mocks.

use layup_contracts::{
    directory::{Consultant, ProcedureInfo},
    profile::SetupProfile,
    specialty::SpecialtyGroup,
};

/// The consultant directory: an authoritative roster queryable by specialty
/// tag or by name fragment.
pub trait ConsultantDirectory: Send + Sync {
    /// Return every consultant whose specialty tag equals `specialty`
    /// (case-insensitive), in directory order.
    fn find_by_specialty(&self, specialty: &str) -> Vec<Consultant>;

    /// Resolve a consultant from a name fragment.
    ///
    /// Matches on case-insensitive surname equality or full-name substring
    /// containment (either direction), returning the first roster entry that
    /// matches. `None` when nothing matches.
    fn find_by_name(&self, name: &str) -> Option<Consultant>;
}

/// The procedure classification/tariff table, keyed by OPCS-4 code.
pub trait ProcedureCatalog: Send + Sync {
    /// Return the classification row for `opcs4_code`, or `None` for an
    /// unknown code.
    fn lookup(&self, opcs4_code: &str) -> Option<ProcedureInfo>;
}

/// The setup profile book used by fallback synthesis.
///
/// `profile_for` is total: implementations must fall back to a default
/// profile when no specialty-specific rule matches, so synthesis never has a
/// missing-template case.
pub trait ProfileSource: Send + Sync {
    /// Return the fully-merged setup profile for the given specialty group
    /// and procedure name.
    fn profile_for(&self, group: SpecialtyGroup, procedure_name: &str) -> SetupProfile;
}
