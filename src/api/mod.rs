mod nhl_client;

pub use nhl_client::{NhlStatsClient, build_cayenne_exp};
