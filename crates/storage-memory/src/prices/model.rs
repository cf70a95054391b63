//! Storage models for price records.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pricebook_core::errors::ValidationError;
use pricebook_core::prices::{Money, PriceRecord, ValidityPeriod};
use pricebook_core::Error;

/// Storage model for a price row, as a database table would hold it.
///
/// Price, currency, and dates are nullable at this level; mapping to the
/// domain model rejects rows with missing required values.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PriceDB {
    pub id: i64,
    pub brand_id: i32,
    pub product_id: i32,
    pub price_list: i32,
    pub priority: i32,
    pub price: Option<Decimal>,
    pub curr: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

// Conversion implementations
impl TryFrom<PriceDB> for PriceRecord {
    type Error = Error;

    fn try_from(db: PriceDB) -> Result<Self, Self::Error> {
        let amount = db
            .price
            .ok_or_else(|| ValidationError::MissingField("price".to_string()))?;
        let currency = db
            .curr
            .ok_or_else(|| ValidationError::MissingField("curr".to_string()))?;
        let start = db
            .start_date
            .ok_or_else(|| ValidationError::MissingField("startDate".to_string()))?;

        Ok(PriceRecord {
            id: db.id,
            brand_id: db.brand_id,
            product_id: db.product_id,
            price_list_id: db.price_list,
            priority: db.priority,
            period: ValidityPeriod::new(start, db.end_date)?,
            money: Money::new(amount, &currency)?,
        })
    }
}
