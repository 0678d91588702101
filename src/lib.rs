pub mod client;
pub mod common;
pub mod domain;
pub mod global;
pub mod infra;
pub mod server;
