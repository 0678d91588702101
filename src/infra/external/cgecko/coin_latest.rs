use serde::Serialize;

use crate::domain::model::coin::CoinRecord;
use crate::infra::external::cgecko::constant::COIN_LATEST;
use crate::infra::provider::ProviderError;

/// Query parameters for `/api/v3/coins/markets`.
#[derive(Debug, Serialize, Default)]
pub struct CoinQueryParams {
    pub vs_currency: String, // required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>, // comma-separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>, // e.g., "market_cap_desc"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>, // 1 ~ 250
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>, // pagination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<bool>, // include sparkline
}

/// Fetch one markets page. Non-2xx responses become
/// [`ProviderError::UpstreamStatus`] with no retry.
pub async fn fetch_coin_latest(
    http: &reqwest::Client,
    base_url: &str,
    params: &CoinQueryParams,
) -> Result<Vec<CoinRecord>, ProviderError> {
    let response = http
        .get(format!("{base_url}{COIN_LATEST}"))
        .query(params)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ProviderError::UpstreamStatus(response.status()));
    }

    Ok(response.json::<Vec<CoinRecord>>().await?)
}
