use std::sync::RwLock;

use pricebook_core::prices::{PriceRecord, PriceRepositoryTrait};
use pricebook_core::{Error, Result};

use super::model::PriceDB;

/// In-memory price catalog.
///
/// Rows live behind a `RwLock`, so reads from concurrent resolutions never
/// block each other. Each fetch returns a fresh snapshot of the matching
/// rows mapped to domain records.
pub struct InMemoryPriceRepository {
    rows: RwLock<Vec<PriceDB>>,
}

impl InMemoryPriceRepository {
    pub fn new() -> Self {
        Self::from_rows(Vec::new())
    }

    pub fn from_rows(rows: Vec<PriceDB>) -> Self {
        InMemoryPriceRepository {
            rows: RwLock::new(rows),
        }
    }

    /// Replaces the whole catalog, as an external administration process
    /// would on a rule refresh.
    pub fn replace_all(&self, rows: Vec<PriceDB>) -> Result<()> {
        let mut guard = self
            .rows
            .write()
            .map_err(|e| Error::Repository(format!("catalog lock poisoned: {}", e)))?;
        *guard = rows;
        Ok(())
    }

    pub fn add_row(&self, row: PriceDB) -> Result<()> {
        let mut guard = self
            .rows
            .write()
            .map_err(|e| Error::Repository(format!("catalog lock poisoned: {}", e)))?;
        guard.push(row);
        Ok(())
    }
}

impl Default for InMemoryPriceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceRepositoryTrait for InMemoryPriceRepository {
    fn get_prices_by_brand_and_product(
        &self,
        brand_id: i32,
        product_id: i32,
    ) -> Result<Vec<PriceRecord>> {
        let guard = self
            .rows
            .read()
            .map_err(|e| Error::Repository(format!("catalog lock poisoned: {}", e)))?;

        let records = guard
            .iter()
            .filter(|row| row.brand_id == brand_id && row.product_id == product_id)
            .cloned()
            .map(PriceRecord::try_from)
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Fetched {} price rows for brand {} product {}",
            records.len(),
            brand_id,
            product_id
        );
        Ok(records)
    }
}
