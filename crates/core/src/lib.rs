//! Pricebook Core - Domain models, services, and traits.
//!
//! This crate contains the price resolution logic: given a brand, a product,
//! and an instant, select the single applicable price among overlapping
//! validity windows. It is storage-agnostic and defines traits that are
//! implemented by the `storage-memory` crate (or any other catalog adapter).

pub mod constants;
pub mod errors;
pub mod prices;
pub mod utils;

// Re-export common types from the prices module
pub use prices::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
