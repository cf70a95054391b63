//! End-to-end resolution over the seeded in-memory catalog.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

use pricebook_core::prices::{PriceQuery, PriceService, PriceServiceTrait};
use pricebook_core::Error;
use pricebook_storage_memory::{reference_rows, InMemoryPriceRepository};

fn seeded_service() -> PriceService {
    PriceService::new(Arc::new(InMemoryPriceRepository::from_rows(reference_rows())))
}

fn query(iso: &str) -> PriceQuery {
    PriceQuery::new(1, 35455, iso.parse::<DateTime<Utc>>().unwrap())
}

#[test]
fn returns_the_applicable_price_for_each_reference_instant() {
    let service = seeded_service();
    let cases = [
        ("2020-06-14T10:00:00Z", 1, dec!(35.50)),
        ("2020-06-14T16:00:00Z", 2, dec!(25.45)),
        ("2020-06-14T21:00:00Z", 1, dec!(35.50)),
        ("2020-06-15T10:00:00Z", 3, dec!(30.50)),
        ("2020-06-16T21:00:00Z", 4, dec!(38.95)),
    ];

    for (iso, expected_list, expected_price) in cases {
        let price = service
            .get_applicable_price(&query(iso))
            .unwrap()
            .unwrap_or_else(|| panic!("expected a price at {}", iso));
        assert_eq!(price.price_list_id, expected_list, "at {}", iso);
        assert_eq!(price.price, expected_price, "at {}", iso);
        assert_eq!(price.currency, "EUR", "at {}", iso);
    }
}

#[test]
fn reports_not_found_for_an_uncovered_instant() {
    let service = seeded_service();
    let result = service
        .get_applicable_price(&query("2019-01-01T00:00:00Z"))
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn reports_not_found_for_an_unknown_product() {
    let service = seeded_service();
    let result = service
        .get_applicable_price(&PriceQuery::new(
            1,
            99999,
            "2020-06-14T10:00:00Z".parse().unwrap(),
        ))
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn rejects_a_query_with_a_missing_field() {
    let service = seeded_service();
    let incomplete = PriceQuery {
        brand_id: Some(1),
        product_id: Some(35455),
        application_date: None,
    };
    assert!(matches!(
        service.get_applicable_price(&incomplete),
        Err(Error::Validation(_))
    ));
}

#[test]
fn response_serializes_with_the_expected_shape() {
    let service = seeded_service();
    let price = service
        .get_applicable_price(&query("2020-06-14T16:00:00Z"))
        .unwrap()
        .unwrap();
    let json = serde_json::to_value(&price).unwrap();

    assert_eq!(json["brandId"], 1);
    assert_eq!(json["productId"], 35455);
    assert_eq!(json["priceListId"], 2);
    assert_eq!(json["price"], "25.45");
    assert_eq!(json["currency"], "EUR");
}

#[test]
fn open_ended_promotion_stays_in_effect() {
    let service = seeded_service();
    let price = service
        .get_applicable_price(&query("2031-06-14T10:00:00Z"))
        .unwrap()
        .unwrap();
    assert_eq!(price.price_list_id, 4);
    assert!(price.end_date.is_none());
}
