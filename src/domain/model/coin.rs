use serde::{Deserialize, Serialize};

/// One market-data row for a tradable asset, matching the CoinGecko
/// `/coins/markets` shape the service consumes and re-emits. Unknown upstream
/// fields are dropped on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    /// Unique identifier (e.g. "bitcoin").
    pub id: String,
    /// Ticker symbol (e.g. "btc").
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    /// Null upstream for assets with no 24h history.
    pub price_change_percentage_24h: Option<f64>,
    pub total_volume: f64,
    pub market_cap: f64,
    /// Logo URL.
    pub image: String,
}
