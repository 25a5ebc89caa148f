//! TOML-driven profile book implementation.
//!
//! `TomlProfileBook` loads a `ProfileConfig` from a TOML string or file and
//! implements the `ProfileSource` trait from layup-core.
//!
//! Evaluation algorithm:
//!
//! 1. Iterate rules in declaration order.
//! 2. The first rule whose `specialty_groups` contains the queried group and
//!    whose `name_keywords` are empty or match the procedure name wins; its
//!    deltas are merged over the default profile.
//! 3. If no rule matched, the default profile is returned unchanged.

use std::path::Path;

use tracing::debug;

use layup_contracts::{
    error::{LayupError, LayupResult},
    profile::SetupProfile,
    specialty::SpecialtyGroup,
};
use layup_core::traits::ProfileSource;

use crate::config::ProfileConfig;

/// The shipped profile document covering the baseline setup and every
/// synthesis-relevant specialty group.
const THEATRE_DEFAULTS: &str = include_str!("../profiles/theatre_defaults.toml");

/// A `ProfileSource` implementation that reads rules from a TOML document.
///
/// Construct via `embedded()` for the shipped defaults, or `from_toml_str` /
/// `from_file` to supply a trust-specific document.
#[derive(Debug)]
pub struct TomlProfileBook {
    config: ProfileConfig,
}

impl TomlProfileBook {
    /// Parse `s` as TOML and build a `TomlProfileBook`.
    ///
    /// Returns `LayupError::ProfileError` if the TOML is malformed or does
    /// not match the expected `ProfileConfig` schema.
    pub fn from_toml_str(s: &str) -> LayupResult<Self> {
        let config: ProfileConfig = toml::from_str(s).map_err(|e| LayupError::ProfileError {
            reason: format!("failed to parse profile TOML: {}", e),
        })?;
        Ok(Self { config })
    }

    /// Read the file at `path` and parse it as a TOML profile document.
    pub fn from_file(path: &Path) -> LayupResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| LayupError::ProfileError {
            reason: format!("failed to read profile file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build the book from the embedded default document.
    ///
    /// The shipped document is validated by tests, so a parse failure here
    /// means the build itself is broken; the error is still propagated rather
    /// than panicking.
    pub fn embedded() -> LayupResult<Self> {
        Self::from_toml_str(THEATRE_DEFAULTS)
    }

    /// The loaded configuration.
    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }
}

impl ProfileSource for TomlProfileBook {
    /// Resolve the setup profile for `group` and `procedure_name`.
    ///
    /// Rules are tested in declaration order; the first match is merged over
    /// the default profile. No match returns the default unchanged — the
    /// operation is total.
    fn profile_for(&self, group: SpecialtyGroup, procedure_name: &str) -> SetupProfile {
        for rule in &self.config.profiles {
            if rule.matches(group, procedure_name) {
                debug!(
                    rule_id = %rule.id,
                    group = %group,
                    procedure = %procedure_name,
                    "profile rule matched"
                );
                return rule.apply(self.config.default.clone());
            }
        }

        debug!(
            group = %group,
            procedure = %procedure_name,
            "no profile rule matched; using default profile"
        );
        self.config.default.clone()
    }
}
