//! Query pipeline shared by the HTTP route and any in-process caller:
//! id-allowlist filter, then search filter, then sort, then pagination.
//! Pure over its inputs; the dataset is never mutated.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::model::coin::CoinRecord;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 50;

/// Reserved `ids` value forcing an empty result set (favorites view with no
/// favorites yet).
pub const EMPTY_IDS_SENTINEL: &str = "__EMPTY__";

#[derive(Debug, Error)]
pub enum ListError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Change,
    Volume,
    MarketCap,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price" => Some(SortKey::Price),
            "change" => Some(SortKey::Change),
            "volume" => Some(SortKey::Volume),
            "marketCap" | "market_cap" => Some(SortKey::MarketCap),
            _ => None,
        }
    }

    fn field(&self, coin: &CoinRecord) -> f64 {
        match self {
            SortKey::Price => coin.current_price,
            // no 24h history counts as a 0% move
            SortKey::Change => coin.price_change_percentage_24h.unwrap_or(0.0),
            SortKey::Volume => coin.total_volume,
            SortKey::MarketCap => coin.market_cap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Optional restriction of the result set to a fixed id set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdFilter {
    /// The `__EMPTY__` sentinel: result is always empty.
    Empty,
    /// Keep only records whose id is a member, in dataset order.
    Ids(HashSet<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub search: String,
    pub sort: Option<(SortKey, SortDirection)>,
    pub page: usize,
    pub limit: usize,
    pub id_filter: Option<IdFilter>,
}

impl Default for QueryParams {
    fn default() -> Self {
        QueryParams {
            search: String::new(),
            sort: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            id_filter: None,
        }
    }
}

impl QueryParams {
    /// Build params from raw query-string values. Non-numeric `page`/`limit`
    /// silently fall back to the defaults; validation of the parsed values
    /// happens in [`query`].
    pub fn from_raw(
        q: Option<&str>,
        sort: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
        ids: Option<&str>,
    ) -> Self {
        QueryParams {
            search: q.unwrap_or_default().to_string(),
            sort: sort.and_then(parse_sort),
            page: page.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_PAGE),
            limit: limit.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_LIMIT),
            id_filter: ids.map(parse_ids),
        }
    }
}

/// Parse `"<key>_<direction>"`, splitting on the LAST underscore so the
/// `market_cap` key round-trips. An unknown key keeps the market-cap fallback
/// ordering; anything but `asc` sorts descending.
fn parse_sort(s: &str) -> Option<(SortKey, SortDirection)> {
    if s.is_empty() {
        return None;
    }
    let (key, direction) = match s.rsplit_once('_') {
        Some((key, direction)) => (key, direction),
        None => (s, ""),
    };
    let direction = match direction {
        "asc" => SortDirection::Asc,
        _ => SortDirection::Desc,
    };
    // "market_cap" splits into ("market", "cap"); retry with the full string
    // before falling back so both spellings of the key work.
    let key = SortKey::parse(key)
        .or_else(|| SortKey::parse(s))
        .unwrap_or(SortKey::MarketCap);
    Some((key, direction))
}

fn parse_ids(s: &str) -> IdFilter {
    if s == EMPTY_IDS_SENTINEL {
        return IdFilter::Empty;
    }
    IdFilter::Ids(
        s.split(',')
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    #[serde(rename = "data")]
    pub items: Vec<CoinRecord>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Run the full pipeline over an immutable dataset.
///
/// Ties under a sort key keep their filtered order (`slice::sort_by` is
/// stable); callers must not rely on that beyond a single dataset revision.
pub fn query(dataset: &[CoinRecord], params: &QueryParams) -> Result<PageResult, ListError> {
    if params.page == 0 {
        return Err(ListError::InvalidParameter("page must be >= 1".into()));
    }
    if params.limit == 0 {
        return Err(ListError::InvalidParameter("limit must be >= 1".into()));
    }

    let mut coins: Vec<CoinRecord> = match &params.id_filter {
        Some(IdFilter::Empty) => Vec::new(),
        Some(IdFilter::Ids(ids)) => dataset.iter().filter(|c| ids.contains(&c.id)).cloned().collect(),
        None => dataset.to_vec(),
    };

    if !params.search.is_empty() {
        let needle = params.search.to_lowercase();
        coins.retain(|c| {
            c.name.to_lowercase().contains(&needle) || c.symbol.to_lowercase().contains(&needle)
        });
    }

    if let Some((key, direction)) = params.sort {
        coins.sort_by(|a, b| {
            let ord = key.field(a).total_cmp(&key.field(b));
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    let total = coins.len();
    let total_pages = total.div_ceil(params.limit);
    let start = (params.page - 1).saturating_mul(params.limit).min(total);
    let end = start.saturating_add(params.limit).min(total);
    let items = coins[start..end].to_vec();

    Ok(PageResult {
        items,
        meta: PageMeta {
            total,
            page: params.page,
            limit: params.limit,
            total_pages,
            has_next: params.page < total_pages,
            has_prev: params.page > 1,
        },
    })
}
