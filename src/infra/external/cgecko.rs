pub mod coin_latest;
pub mod constant;

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::model::coin::CoinRecord;
use crate::global::Config;
use crate::infra::external::cgecko::coin_latest::{fetch_coin_latest, CoinQueryParams};
use crate::infra::provider::{CoinProvider, ProviderError};

struct CachedCoins {
    coins: Arc<Vec<CoinRecord>>,
    fetched_at: Instant,
    refreshed_at: DateTime<Utc>,
}

/// Live dataset variant: CoinGecko `/coins/markets` with a time-windowed
/// in-memory cache. Stale-within-window data is served as-is; concurrent
/// callers may race to refresh an expired cache, last write wins.
pub struct CoinGeckoProvider {
    http: reqwest::Client,
    base_url: String,
    vs_currency: String,
    per_page: u32,
    pages: u32,
    revalidate: Duration,
    cached: RwLock<Option<CachedCoins>>,
}

impl CoinGeckoProvider {
    pub fn new(
        base_url: impl Into<String>,
        vs_currency: impl Into<String>,
        per_page: u32,
        pages: u32,
        revalidate: Duration,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            vs_currency: vs_currency.into(),
            per_page,
            pages,
            revalidate,
            cached: RwLock::new(None),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.cgecko_base_url.clone(),
            config.vs_currency.clone(),
            config.fetch_per_page,
            config.fetch_pages,
            Duration::from_secs(config.revalidate_secs),
        )
    }

    async fn fetch_all(&self) -> Result<Vec<CoinRecord>, ProviderError> {
        let mut all = Vec::new();
        for page in 1..=self.pages {
            let params = CoinQueryParams {
                vs_currency: self.vs_currency.clone(),
                order: Some(constant::ORDER_MARKET_CAP_DESC.to_string()),
                per_page: Some(self.per_page),
                page: Some(page),
                sparkline: Some(false),
                ..Default::default()
            };
            let coins = fetch_coin_latest(&self.http, &self.base_url, &params).await?;
            if coins.is_empty() {
                break;
            }
            all.extend(coins);
        }
        info!(count = all.len(), "fetched coin markets from CoinGecko");
        Ok(all)
    }
}

#[async_trait]
impl CoinProvider for CoinGeckoProvider {
    async fn coins(&self) -> Result<Arc<Vec<CoinRecord>>, ProviderError> {
        {
            let cached = self.cached.read().await;
            if let Some(entry) = cached.as_ref() {
                if entry.fetched_at.elapsed() < self.revalidate {
                    debug!(refreshed_at = %entry.refreshed_at, "serving coins from revalidation cache");
                    return Ok(entry.coins.clone());
                }
            }
        }

        let coins = Arc::new(self.fetch_all().await?);
        let mut cached = self.cached.write().await;
        *cached = Some(CachedCoins {
            coins: coins.clone(),
            fetched_at: Instant::now(),
            refreshed_at: Utc::now(),
        });
        Ok(coins)
    }
}
