pub mod error;
pub mod helmrepo;
pub mod k8s;
pub mod operator;

pub use helmrepo::{deployment, service, validate_deployment};
pub use operator::crd::{MultiClusterHub, MultiClusterHubSpec, Mongo, DEFAULT_REPLICA_COUNT};
