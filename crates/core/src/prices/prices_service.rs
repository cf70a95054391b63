use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::{self, DEFAULT_BUSINESS_TZ};

use super::prices_model::{ApplicablePrice, PriceQuery, PriceRecord};
use super::prices_traits::{PriceRepositoryTrait, PriceServiceTrait};

/// Resolves the single applicable price among possibly-overlapping candidate
/// records.
///
/// The service owns no records: each resolution works on the snapshot the
/// repository returns for that call, so concurrent resolutions need no
/// coordination.
pub struct PriceService {
    repository: Arc<dyn PriceRepositoryTrait>,
    timezone: Tz,
}

impl PriceService {
    pub fn new(repository: Arc<dyn PriceRepositoryTrait>) -> Self {
        Self::with_timezone(repository, DEFAULT_BUSINESS_TZ)
    }

    pub fn with_timezone(repository: Arc<dyn PriceRepositoryTrait>, timezone: Tz) -> Self {
        PriceService {
            repository,
            timezone,
        }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Selects the applicable record at `at` among `candidates`, which must
    /// already belong to a single brand/product pair.
    ///
    /// The instant is normalized to the business timezone's wall-clock time,
    /// candidates are filtered to those whose window covers it, and the
    /// highest-priority one wins. Ties at equal priority go to the most
    /// recent window start, then to the smallest id, so the outcome is
    /// deterministic for any candidate order.
    ///
    /// An empty filtered set yields `None`: a valid negative outcome, not an
    /// error.
    pub fn resolve<'a>(
        &self,
        at: DateTime<Utc>,
        candidates: &'a [PriceRecord],
    ) -> Option<&'a PriceRecord> {
        let local = time_utils::to_local(at, self.timezone);
        candidates
            .iter()
            .filter(|record| record.period.contains(local))
            .max_by(|a, b| selection_order(a, b))
    }
}

/// Total ordering used to pick the winner: priority, then window start, then
/// reversed id (so the smaller id wins the final tie).
fn selection_order(a: &PriceRecord, b: &PriceRecord) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.period.start().cmp(&b.period.start()))
        .then_with(|| b.id.cmp(&a.id))
}

impl PriceServiceTrait for PriceService {
    fn get_applicable_price(&self, query: &PriceQuery) -> Result<Option<ApplicablePrice>> {
        let brand_id = query
            .brand_id
            .ok_or_else(|| Error::Validation(ValidationError::MissingField("brandId".to_string())))?;
        let product_id = query.product_id.ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("productId".to_string()))
        })?;
        let at = query.application_date.ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("applicationDate".to_string()))
        })?;

        let candidates = self
            .repository
            .get_prices_by_brand_and_product(brand_id, product_id)?;
        log::debug!(
            "Resolving price for brand {} product {} at {} ({} candidates)",
            brand_id,
            product_id,
            at,
            candidates.len()
        );

        let winner = self.resolve(at, &candidates);
        if winner.is_none() {
            log::debug!(
                "No applicable price for brand {} product {} at {}",
                brand_id,
                product_id,
                at
            );
        }
        Ok(winner.map(ApplicablePrice::from))
    }
}
