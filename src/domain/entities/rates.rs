//! Exchange rate entity.

/// Latest conversion rates for a base currency.
///
/// Rates stay `None` when the upstream table lacks the target currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RateRecord {
    pub base_currency_code: String,
    pub usd_rate: Option<f64>,
    pub kzt_rate: Option<f64>,
    pub last_updated_utc: String,
}
