use thiserror::Error;

use crate::domain::service::coin_list_service::PageResult;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetCoinsParams {
    pub query: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub ids: Option<String>,
}

/// Thin GET wrapper over the list endpoint; builds the query string exactly
/// as the server parses it, omitting unset params.
pub struct CoinListClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoinListClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }

    pub async fn get_coins(&self, params: &GetCoinsParams) -> Result<PageResult, ClientError> {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(q) = params.query.as_ref().filter(|q| !q.is_empty()) {
            pairs.push(("q", q.clone()));
        }
        if let Some(sort) = &params.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(page) = params.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = params.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(ids) = &params.ids {
            pairs.push(("ids", ids.clone()));
        }

        let response = self
            .http
            .get(format!("{}/api/coins", self.base_url))
            .query(&pairs)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json::<PageResult>().await?)
    }
}
