//! Variant generation: from one input string to a fixed-size collection
//! of stylized renderings.
//!
//! - Table application and procedural transforms (`transform`)
//! - The ordered, size-exact result type (`VariantCollection`)
//! - The orchestrating generator (`VariantGenerator`)

/// Pure and randomized string transforms.
///
/// Table application is deterministic; combining-mark noise and padding
/// synthesis draw from a caller-supplied RNG.
pub mod transform;

/// Ordered collection of variants produced for one request.
pub mod collection;

/// High-level interface turning text into a `VariantCollection`.
///
/// Combines every registered style, procedural variants and optional
/// banner renderings, then pads or truncates to the requested size.
pub mod generator;
