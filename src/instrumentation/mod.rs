/// Dispatch count collection
pub mod metrics;
