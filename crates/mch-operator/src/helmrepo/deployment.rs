use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, EnvVar, EnvVarSource, HTTPGetAction, LocalObjectReference,
    ObjectFieldSelector, PodSpec, PodTemplateSpec, Probe,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::ObjectMeta;
use mch_common::CacheSpec;

use crate::k8s::image::image_reference;
use crate::operator::crd::MultiClusterHub;

use super::{labels, metadata, HELM_REPO_IMAGE_KEY, HELM_REPO_NAME, HELM_REPO_PORT};

/// Builds the helm repo deployment the hub asks for.
///
/// Never fails: empty spec fields produce empty or defaulted manifest fields and the
/// API server gets to judge the result.
pub fn deployment(mch: &MultiClusterHub, cache: &CacheSpec) -> Deployment {
    let spec = &mch.spec;

    Deployment {
        metadata: metadata(mch),
        spec: Some(DeploymentSpec {
            replicas: Some(spec.replicas()),
            selector: LabelSelector {
                match_labels: Some(labels()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    image_pull_secrets: pull_secrets(&spec.image_pull_secret),
                    node_selector: spec.node_selector.clone(),
                    containers: vec![container(mch, cache)],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn pull_secrets(name: &str) -> Option<Vec<LocalObjectReference>> {
    if name.is_empty() {
        return None;
    }
    Some(vec![LocalObjectReference {
        name: name.to_string(),
    }])
}

fn container(mch: &MultiClusterHub, cache: &CacheSpec) -> Container {
    let spec = &mch.spec;
    let pull_policy = Some(spec.image_pull_policy.clone()).filter(|policy| !policy.is_empty());

    Container {
        name: HELM_REPO_NAME.to_string(),
        image: Some(image_reference(
            spec,
            HELM_REPO_NAME,
            HELM_REPO_IMAGE_KEY,
            cache,
        )),
        image_pull_policy: pull_policy,
        ports: Some(vec![ContainerPort {
            container_port: HELM_REPO_PORT,
            ..Default::default()
        }]),
        liveness_probe: Some(http_probe("/liveness", Some(15))),
        readiness_probe: Some(http_probe("/readiness", None)),
        env: Some(vec![EnvVar {
            name: "POD_NAMESPACE".to_string(),
            value_from: Some(EnvVarSource {
                field_ref: Some(ObjectFieldSelector {
                    field_path: "metadata.namespace".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]),
        ..Default::default()
    }
}

fn http_probe(path: &str, period_seconds: Option<i32>) -> Probe {
    Probe {
        http_get: Some(HTTPGetAction {
            path: Some(path.to_string()),
            port: IntOrString::Int(HELM_REPO_PORT),
            ..Default::default()
        }),
        initial_delay_seconds: Some(15),
        period_seconds,
        ..Default::default()
    }
}
