//! Prices module - domain models, resolution service, and traits.

mod prices_model;
mod prices_service;
mod prices_traits;

pub use prices_model::{round_display, ApplicablePrice, Money, PriceQuery, PriceRecord, ValidityPeriod};
pub use prices_service::PriceService;
pub use prices_traits::{PriceRepositoryTrait, PriceServiceTrait};
