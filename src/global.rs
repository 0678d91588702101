use std::net::SocketAddr;

use once_cell::sync::OnceCell;

use crate::common::{env_or, env_parse_or, is_local};

pub static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Static JSON snapshot loaded once at startup.
    Snapshot,
    /// Live CoinGecko markets fetch with a revalidation window.
    CoinGecko,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub provider: ProviderKind,
    pub snapshot_path: String,
    pub cgecko_base_url: String,
    pub vs_currency: String,
    pub fetch_per_page: u32,
    pub fetch_pages: u32,
    pub revalidate_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_address = match is_local() {
            true => "127.0.0.1:10099".parse().unwrap(),
            false => env_or("BIND_ADDRESS", "0.0.0.0:10099")
                .parse()
                .expect("BIND_ADDRESS must be a valid socket address"),
        };

        let provider = match env_or("COIN_PROVIDER", "snapshot").as_str() {
            "cgecko" | "coingecko" => ProviderKind::CoinGecko,
            _ => ProviderKind::Snapshot,
        };

        Config {
            bind_address,
            provider,
            snapshot_path: env_or("COIN_SNAPSHOT_PATH", "data/coins_snapshot.json"),
            cgecko_base_url: env_or("COIN_GECKO_BASE_URL", crate::infra::external::cgecko::constant::BASE_URL),
            vs_currency: env_or("VS_CURRENCY", "usd"),
            fetch_per_page: env_parse_or("FETCH_PER_PAGE", 250),
            fetch_pages: env_parse_or("FETCH_PAGES", 4),
            revalidate_secs: env_parse_or("REVALIDATE_SECS", 60),
        }
    }
}

pub fn init_config() {
    let _ = CONFIG.set(Config::from_env());
}

/// Get shared config (panics if not initialized)
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}
