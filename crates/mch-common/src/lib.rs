pub mod error;
pub mod settings;
pub mod util;

// Re-exports
pub use ::tracing::{self, debug, error, info, trace, warn};
pub use util::*;

pub use util::cache::{self, CacheSpec};
