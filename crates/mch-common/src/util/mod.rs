pub mod cache;
pub mod tracing;
