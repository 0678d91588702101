pub mod coin_handlers;

pub fn index() -> &'static str {
    "Welcome to the coin list service!"
}

pub fn ping() -> &'static str {
    "ping pong!"
}

pub fn version() -> &'static str {
    concat!("coinlist-data ", env!("CARGO_PKG_VERSION"))
}

pub fn health() -> &'static str {
    "ok"
}
