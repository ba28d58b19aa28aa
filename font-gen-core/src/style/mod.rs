//! Style tables: one fixed character substitution per "font".
//!
//! This module provides:
//! - The closed set of style identifiers (`StyleId`)
//! - Immutable substitution tables (`StyleTable`)
//! - The registry that builds every table once (`StyleRegistry`)

/// Closed enumeration of registered styles with their stable names.
pub mod id;

/// A single immutable substitution table.
pub mod table;

/// Builds and holds every style table.
///
/// Exposes a process-wide shared instance as well as explicit construction.
pub mod registry;

/// Offset-based alphabets (mathematical, enclosed, fullwidth).
///
/// Internal data used by the registry and the Cyrillic tables.
mod alphabet;

/// Cyrillic style tables built from homoglyphs and rotating diacritics.
mod cyrillic;

pub(crate) use cyrillic::is_cyrillic_letter;
