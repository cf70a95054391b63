use super::prices_model::{ApplicablePrice, PriceQuery, PriceRecord};
use crate::errors::Result;

/// Trait defining the contract for catalog repository operations.
///
/// Implementations must return a point-in-time-coherent snapshot of the
/// records for the requested brand/product pair. All reads are synchronous:
/// the resolution path has no suspension points.
pub trait PriceRepositoryTrait: Send + Sync {
    fn get_prices_by_brand_and_product(
        &self,
        brand_id: i32,
        product_id: i32,
    ) -> Result<Vec<PriceRecord>>;
}

/// Trait defining the contract for price resolution operations.
pub trait PriceServiceTrait: Send + Sync {
    /// Finds the single applicable price for the query, or `Ok(None)` when no
    /// record covers the instant. Incomplete queries fail with a validation
    /// error.
    fn get_applicable_price(&self, query: &PriceQuery) -> Result<Option<ApplicablePrice>>;
}
