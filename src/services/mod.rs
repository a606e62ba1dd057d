pub mod metrics;
pub mod processing;
