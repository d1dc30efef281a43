pub mod aggregator;
pub mod dashboard_loader;
pub mod opentdb_client;
pub mod rate_limiter;
