use std::collections::BTreeMap;

use kube::{CustomResource, CustomResourceExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OperatorResult;

/// Replica count used whenever `replicaCount` is left unset.
pub const DEFAULT_REPLICA_COUNT: i32 = 1;

#[derive(CustomResource, Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
#[kube(
    group = "operators.open-cluster-management.io",
    version = "v1beta1",
    kind = "MultiClusterHub",
    plural = "multiclusterhubs",
    shortname = "mch",
    derive = "PartialEq",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct MultiClusterHubSpec {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub image_repository: String,
    #[serde(default)]
    pub image_pull_policy: String,
    #[serde(default)]
    pub image_pull_secret: String,
    #[serde(default)]
    pub image_tag_suffix: String,
    #[serde(default)]
    pub mongo: Mongo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,
}

impl MultiClusterHubSpec {
    pub fn replicas(&self) -> i32 {
        self.replica_count.unwrap_or(DEFAULT_REPLICA_COUNT)
    }
}

// Reserved for the hub's mongo wiring; nothing reads it yet.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mongo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_set: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_secret: Option<String>,
}

/// Renders the `CustomResourceDefinition` for `MultiClusterHub`.
pub fn crd_yaml() -> OperatorResult<String> {
    Ok(serde_yaml::to_string(&MultiClusterHub::crd())?)
}
