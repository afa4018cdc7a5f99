pub mod aggregator;
pub mod analyze;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod log;
