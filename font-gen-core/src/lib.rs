//! Stylized text variant generation library.
//!
//! This crate turns one input string into a fixed-size collection of
//! visually distinct renderings and serves them page by page:
//! - Unicode "font" substitution tables (mathematical alphanumerics,
//!   enclosed letters, combining-mark decorations, Cyrillic styles)
//! - Procedural transforms (combining-mark noise, leet-speak)
//! - Optional ASCII-art banners through a pluggable backend
//! - Viewer-owned pagination sessions with circular navigation
//!
//! Randomness is always supplied by the caller so generation can be
//! reproduced with a seeded RNG.

/// Character substitution tables and the registry holding them.
pub mod style;

/// Table application, procedural transforms and the variant generator.
pub mod variant;

/// Viewer sessions over a generated collection and page navigation.
pub mod session;

/// Banner (ASCII-art) rendering backends.
pub mod banner;

/// Error types shared by the public API.
pub mod error;

/// I/O utilities (font directory listing, path helpers).
///
/// Not exposed
pub(crate) mod io;
