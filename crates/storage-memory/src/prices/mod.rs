//! In-memory storage implementation for price records.

mod model;
mod repository;
mod seed;

pub use model::PriceDB;
pub use repository::InMemoryPriceRepository;
pub use seed::reference_rows;
