//! In-memory catalog implementation for Pricebook.
//!
//! Holds raw price rows behind a lock and maps them to domain records on
//! read, the same row/domain split a database-backed adapter would use. Ships
//! the reference seed catalog for tests and demos.

pub mod prices;

pub use prices::{reference_rows, InMemoryPriceRepository, PriceDB};
