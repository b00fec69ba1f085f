use std::collections::BTreeMap;

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Container, LocalObjectReference, PodSpec};
use mch_common::CacheSpec;
use tracing::info;

use crate::operator::crd::{MultiClusterHub, DEFAULT_REPLICA_COUNT};

use super::deployment;

// The only fields of a helm repo deployment the operator enforces. Anything else
// (labels, annotations, status, fields defaulted by the cluster) is left to whoever set it.
#[derive(Debug)]
struct Enforced<'a> {
    pull_secrets: Option<&'a Vec<LocalObjectReference>>,
    image: Option<&'a str>,
    pull_policy: Option<&'a str>,
    node_selector: Option<&'a BTreeMap<String, String>>,
    replicas: i32,
}

impl<'a> Enforced<'a> {
    fn of(dep: &'a Deployment) -> Self {
        let pod = dep.spec.as_ref().and_then(|spec| spec.template.spec.as_ref());
        let container = pod.and_then(|pod| pod.containers.first());

        Self {
            // Unset and empty lists/maps mean the same thing to the cluster.
            pull_secrets: pod
                .and_then(|pod| pod.image_pull_secrets.as_ref())
                .filter(|secrets| !secrets.is_empty()),
            image: container.and_then(|c| c.image.as_deref()),
            pull_policy: container.and_then(|c| c.image_pull_policy.as_deref()),
            node_selector: pod
                .and_then(|pod| pod.node_selector.as_ref())
                .filter(|selector| !selector.is_empty()),
            replicas: dep
                .spec
                .as_ref()
                .and_then(|spec| spec.replicas)
                .unwrap_or(DEFAULT_REPLICA_COUNT),
        }
    }
}

fn has_container(dep: &Deployment) -> bool {
    dep.spec
        .as_ref()
        .and_then(|spec| spec.template.spec.as_ref())
        .is_some_and(|pod| !pod.containers.is_empty())
}

/// Compares `observed` against the deployment the hub asks for.
///
/// Returns the corrected deployment and whether anything had to change. Only enforced
/// fields are overwritten; when nothing drifted the result equals `observed`.
pub fn validate_deployment(
    mch: &MultiClusterHub,
    cache: &CacheSpec,
    observed: &Deployment,
) -> (Deployment, bool) {
    let desired = deployment(mch, cache);
    let want = Enforced::of(&desired);
    let have = Enforced::of(observed);
    let name = mch.metadata.name.as_deref().unwrap_or_default();

    let mut found = observed.clone();
    let mut needs_update = false;

    if have.pull_secrets != want.pull_secrets {
        info!(hub = name, "Enforcing imagePullSecrets from CR spec");
        pod_spec_mut(&mut found).image_pull_secrets = want.pull_secrets.cloned();
        needs_update = true;
    }

    if !has_container(observed) || have.image != want.image {
        info!(hub = name, "Enforcing image from CR spec");
        container_mut(&mut found, &desired).image = want.image.map(str::to_string);
        needs_update = true;
    }

    if have.pull_policy != want.pull_policy {
        info!(hub = name, "Enforcing imagePullPolicy from CR spec");
        container_mut(&mut found, &desired).image_pull_policy =
            want.pull_policy.map(str::to_string);
        needs_update = true;
    }

    if have.node_selector != want.node_selector {
        info!(hub = name, "Enforcing nodeSelector from CR spec");
        pod_spec_mut(&mut found).node_selector = want.node_selector.cloned();
        needs_update = true;
    }

    if have.replicas != want.replicas {
        info!(hub = name, "Enforcing replicas from CR spec");
        found.spec.get_or_insert_with(Default::default).replicas = Some(want.replicas);
        needs_update = true;
    }

    (found, needs_update)
}

fn pod_spec_mut(dep: &mut Deployment) -> &mut PodSpec {
    dep.spec
        .get_or_insert_with(Default::default)
        .template
        .spec
        .get_or_insert_with(Default::default)
}

// An observed deployment without containers gets the desired one installed whole.
fn container_mut<'a>(dep: &'a mut Deployment, desired: &Deployment) -> &'a mut Container {
    let pod = pod_spec_mut(dep);
    if pod.containers.is_empty() {
        let container = desired
            .spec
            .as_ref()
            .and_then(|spec| spec.template.spec.as_ref())
            .and_then(|pod| pod.containers.first())
            .cloned()
            .unwrap_or_default();
        pod.containers.push(container);
    }
    &mut pod.containers[0]
}
