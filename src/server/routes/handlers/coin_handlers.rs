use serde::Deserialize;
use tracing::error;
use warp::http::StatusCode;
use warp::Rejection;

use crate::domain::service::coin_list_service::{self, QueryParams};
use crate::server::response::{error_json, JsonReply};
use crate::server::AppState;

/// Raw query string of `GET /api/coins`. Numeric params arrive as strings so
/// that malformed values default instead of rejecting the request.
#[derive(Debug, Deserialize, Default)]
pub struct RawListQuery {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub ids: Option<String>,
}

pub async fn list_coins(raw: RawListQuery, state: AppState) -> Result<JsonReply, Rejection> {
    let params = QueryParams::from_raw(
        raw.q.as_deref(),
        raw.sort.as_deref(),
        raw.page.as_deref(),
        raw.limit.as_deref(),
        raw.ids.as_deref(),
    );

    let coins = match state.provider.coins().await {
        Ok(coins) => coins,
        Err(err) => {
            error!(error = %err, "coin provider fetch failed");
            return Ok(error_json(
                "failed to fetch coin data",
                StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
    };

    match coin_list_service::query(&coins, &params) {
        Ok(page) => Ok(warp::reply::with_status(warp::reply::json(&page), StatusCode::OK)),
        Err(err) => Ok(error_json(&err.to_string(), StatusCode::BAD_REQUEST)),
    }
}
