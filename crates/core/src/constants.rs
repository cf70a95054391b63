/// Decimal precision for displayed prices
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Length of an ISO 4217 alpha-3 currency code
pub const CURRENCY_CODE_LENGTH: usize = 3;

/// Default currency for seeded catalogs
pub const DEFAULT_CURRENCY: &str = "EUR";
