use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

use crate::operator::crd::MultiClusterHub;

use super::{labels, metadata, HELM_REPO_PORT};

pub fn service(mch: &MultiClusterHub) -> Service {
    Service {
        metadata: metadata(mch),
        spec: Some(ServiceSpec {
            selector: Some(labels()),
            ports: Some(vec![ServicePort {
                port: HELM_REPO_PORT,
                target_port: Some(IntOrString::Int(HELM_REPO_PORT)),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
