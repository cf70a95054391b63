//! Reference seed catalog.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pricebook_core::constants::DEFAULT_CURRENCY;

use super::model::PriceDB;

fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, mo, d).and_then(|date| date.and_hms_opt(h, mi, s))
}

fn row(
    id: i64,
    price_list: i32,
    priority: i32,
    price: Decimal,
    start_date: Option<NaiveDateTime>,
    end_date: Option<NaiveDateTime>,
) -> PriceDB {
    PriceDB {
        id,
        brand_id: 1,
        product_id: 35455,
        price_list,
        priority,
        price: Some(price),
        curr: Some(DEFAULT_CURRENCY.to_string()),
        start_date,
        end_date,
    }
}

/// Four overlapping rules for brand 1, product 35455, with validity
/// boundaries in Madrid wall-clock time. The base rule (list 1, priority 0)
/// spans the whole season; three higher-priority promotions override it in
/// specific windows, the last one open-ended.
pub fn reference_rows() -> Vec<PriceDB> {
    vec![
        row(
            1,
            1,
            0,
            dec!(35.50),
            local(2020, 6, 14, 0, 0, 0),
            local(2020, 12, 31, 23, 59, 59),
        ),
        row(
            2,
            2,
            1,
            dec!(25.45),
            local(2020, 6, 14, 15, 0, 0),
            local(2020, 6, 14, 18, 30, 0),
        ),
        row(
            3,
            3,
            1,
            dec!(30.50),
            local(2020, 6, 15, 0, 0, 0),
            local(2020, 6, 15, 13, 0, 0),
        ),
        row(4, 4, 1, dec!(38.95), local(2020, 6, 15, 16, 0, 0), None),
    ]
}
