pub(crate) mod logger;

pub use logger::init_logging;

pub use mch_common::{cache, error, settings, CacheSpec};
pub use mch_operator::{
    deployment, helmrepo, operator, service, validate_deployment, MultiClusterHub,
    MultiClusterHubSpec, DEFAULT_REPLICA_COUNT,
};
