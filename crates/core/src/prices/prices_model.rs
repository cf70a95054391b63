//! Pricing domain models.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{CURRENCY_CODE_LENGTH, DISPLAY_DECIMAL_PRECISION};
use crate::errors::{Error, Result, ValidationError};

/// Monetary amount with its ISO 4217 alpha-3 currency code.
///
/// Immutable once constructed; compared structurally. The currency is
/// accepted in any case and stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: &str) -> Result<Self> {
        if currency.len() != CURRENCY_CODE_LENGTH
            || !currency.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(Error::Validation(ValidationError::InvalidCurrency(
                currency.to_string(),
            )));
        }
        Ok(Money {
            amount,
            currency: currency.to_ascii_uppercase(),
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// Validity window of a price rule, expressed in the wall-clock time of the
/// operative business timezone (this is how the catalog stores boundaries).
///
/// A missing end means the rule stays in effect indefinitely. Coverage is
/// end-exclusive: `start <= t < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidityPeriod {
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
}

impl ValidityPeriod {
    /// `end == start` is legal and denotes an empty window.
    pub fn new(start: NaiveDateTime, end: Option<NaiveDateTime>) -> Result<Self> {
        if let Some(end) = end {
            if end < start {
                return Err(Error::Validation(ValidationError::InvalidPeriod(format!(
                    "end {} is before start {}",
                    end, start
                ))));
            }
        }
        Ok(ValidityPeriod { start, end })
    }

    /// Open-ended period starting at `start`.
    pub fn unbounded(start: NaiveDateTime) -> Self {
        ValidityPeriod { start, end: None }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.end.is_none()
    }

    /// Whether the window covers the given local wall-clock time.
    pub fn contains(&self, local: NaiveDateTime) -> bool {
        match self.end {
            Some(end) => self.start <= local && local < end,
            None => self.start <= local,
        }
    }
}

/// One priced rule of the catalog for a brand/product pair.
///
/// Records for the same pair may overlap in time; the numerically higher
/// `priority` wins among the overlapping ones. The resolution service treats
/// records as a read-only snapshot and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub id: i64,
    pub brand_id: i32,
    pub product_id: i32,
    pub price_list_id: i32,
    pub priority: i32,
    pub period: ValidityPeriod,
    pub money: Money,
}

/// Query input as supplied by an external caller.
///
/// Fields are optional because the caller's request may omit any of them;
/// the service validates presence and rejects incomplete queries.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuery {
    pub brand_id: Option<i32>,
    pub product_id: Option<i32>,
    pub application_date: Option<DateTime<Utc>>,
}

impl PriceQuery {
    pub fn new(brand_id: i32, product_id: i32, application_date: DateTime<Utc>) -> Self {
        PriceQuery {
            brand_id: Some(brand_id),
            product_id: Some(product_id),
            application_date: Some(application_date),
        }
    }
}

/// Rounds an amount to the displayed precision using half-up rounding.
///
/// `MidpointAwayFromZero` matches half-up for negative amounts too, so the
/// sign is preserved. Idempotent: re-rounding an already-rounded value is a
/// no-op.
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

fn serialize_decimal_2<S>(decimal: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format!("{:.2}", round_display(*decimal)))
}

/// Presentation view of a resolved price: the selected rule identifier, the
/// rounded price, and the currency, plus the window it came from. An
/// unbounded end serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicablePrice {
    pub brand_id: i32,
    pub product_id: i32,
    pub price_list_id: i32,
    #[serde(serialize_with = "serialize_decimal_2")]
    pub price: Decimal,
    pub currency: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
}

impl From<&PriceRecord> for ApplicablePrice {
    fn from(record: &PriceRecord) -> Self {
        ApplicablePrice {
            brand_id: record.brand_id,
            product_id: record.product_id,
            price_list_id: record.price_list_id,
            price: round_display(record.money.amount()),
            currency: record.money.currency().to_string(),
            start_date: record.period.start(),
            end_date: record.period.end(),
        }
    }
}
