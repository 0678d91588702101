/// CoinGecko API. All requests should target domain
pub const BASE_URL: &str = "https://api.coingecko.com";

/// https://docs.coingecko.com/v3.0.1/reference/coins-markets
/// This endpoint allows you to query all the supported coins with price, market cap, volume and market related data
pub const COIN_LATEST: &str = "/api/v3/coins/markets";

/// Default ordering requested upstream; the list service applies its own
/// ordering on top.
pub const ORDER_MARKET_CAP_DESC: &str = "market_cap_desc";
