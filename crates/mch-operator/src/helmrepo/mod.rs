//! The helm repo component of a hub: one deployment serving charts on
//! [`HELM_REPO_PORT`] and the service in front of it.

mod deployment;
mod service;
mod validate;

use std::collections::BTreeMap;

use kube::api::ObjectMeta;

use crate::k8s::owner::controller_reference;
use crate::operator::crd::MultiClusterHub;

pub use deployment::deployment;
pub use service::service;
pub use validate::validate_deployment;

pub const HELM_REPO_NAME: &str = "multiclusterhub-repo";
/// Key of the helm repo image in the image manifest and the digest cache.
pub const HELM_REPO_IMAGE_KEY: &str = "multiclusterhub_repo";
pub const HELM_REPO_PORT: i32 = 3000;

const ANTI_AFFINITY_LABEL: &str = "ocm-antiaffinity-selector";

pub fn labels() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("app".to_string(), HELM_REPO_NAME.to_string()),
        (ANTI_AFFINITY_LABEL.to_string(), HELM_REPO_NAME.to_string()),
    ])
}

fn metadata(mch: &MultiClusterHub) -> ObjectMeta {
    ObjectMeta {
        name: Some(HELM_REPO_NAME.to_string()),
        namespace: mch.metadata.namespace.clone(),
        labels: Some(labels()),
        owner_references: Some(vec![controller_reference(mch)]),
        ..Default::default()
    }
}
