pub mod external;
pub mod provider;
pub mod snapshot;
