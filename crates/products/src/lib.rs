//! Platform product id decoding.
//!
//! This crate contains the grammar for platform product identifiers,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod decoder;

pub use decoder::{SkuDescriptor, decode};
