//! # layup-profiles
//!
//! TOML-driven specialty→setup profile book for LAYUP card synthesis.
//!
//! The specialty branching that drives fallback synthesis is expressed as a
//! declarative rule document instead of code: a mandatory `[default]` profile
//! plus ordered `[[profiles]]` deltas keyed by specialty group and optional
//! procedure-name keywords. First match wins; no match means the default.
//!
//! Ship-time defaults are embedded; a trust can substitute its own document
//! via `TomlProfileBook::from_file`.

pub mod book;
pub mod config;

pub use book::TomlProfileBook;
