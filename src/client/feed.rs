use crate::client::api::{ClientError, CoinListClient, GetCoinsParams};
use crate::domain::model::coin::CoinRecord;

/// Infinite-scroll accumulation over the list endpoint: successive
/// `fetch_next` calls request page 1, 2, ... for a fixed parameter set and
/// append the results. The server sees each request as independent.
pub struct CoinFeed {
    client: CoinListClient,
    params: GetCoinsParams,
    coins: Vec<CoinRecord>,
    next_page: Option<usize>,
    total: Option<usize>,
}

impl CoinFeed {
    /// `params.page` is ignored; the feed drives pagination itself.
    pub fn new(client: CoinListClient, params: GetCoinsParams) -> Self {
        Self { client, params, coins: Vec::new(), next_page: Some(1), total: None }
    }

    pub fn coins(&self) -> &[CoinRecord] {
        &self.coins
    }

    /// Filtered total reported by the server, once known.
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Fetch the next page, if any. Returns false when the feed is already
    /// exhausted. An error leaves the accumulated state untouched so the
    /// caller can retry the same page.
    pub async fn fetch_next(&mut self) -> Result<bool, ClientError> {
        let Some(page) = self.next_page else {
            return Ok(false);
        };

        let mut params = self.params.clone();
        params.page = Some(page);
        let result = self.client.get_coins(&params).await?;

        self.total = Some(result.meta.total);
        self.next_page = result.meta.has_next.then(|| result.meta.page + 1);
        self.coins.extend(result.items);
        Ok(true)
    }

    /// Any param change invalidates the accumulated pages.
    pub fn set_params(&mut self, params: GetCoinsParams) {
        self.params = params;
        self.coins.clear();
        self.next_page = Some(1);
        self.total = None;
    }
}
