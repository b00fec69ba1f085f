use std::collections::BTreeMap;
use std::fs;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use mchub::helmrepo::{HELM_REPO_IMAGE_KEY, HELM_REPO_NAME};
use mchub::{
    deployment, init_logging, service, validate_deployment, CacheSpec, MultiClusterHub,
    MultiClusterHubSpec,
};

const MANIFEST: &str = r#"[
    {
        "image-name": "multiclusterhub-repo",
        "image-version": "1.0.0",
        "image-remote": "quay.io/open-cluster-management",
        "image-digest": "sha256:0123456789abcdef",
        "image-key": "multiclusterhub_repo"
    }
]"#;

fn hub() -> MultiClusterHub {
    MultiClusterHub {
        metadata: ObjectMeta {
            name: Some("multiclusterhub".to_string()),
            namespace: Some("open-cluster-management".to_string()),
            uid: Some("5f8a1c2e".to_string()),
            ..Default::default()
        },
        spec: MultiClusterHubSpec {
            version: "1.0.0".to_string(),
            image_repository: "quay.io/open-cluster-management".to_string(),
            image_pull_policy: "Always".to_string(),
            image_pull_secret: "multiclusterhub-operator-pull-secret".to_string(),
            replica_count: Some(2),
            node_selector: Some(BTreeMap::from([(
                "node-role.kubernetes.io/infra".to_string(),
                String::new(),
            )])),
            ..Default::default()
        },
    }
}

#[test]
fn test_reconcile_pass() {
    let root = tempfile::tempdir().unwrap();
    let manifests = root.path().join("image-manifests");
    fs::create_dir_all(&manifests).unwrap();
    fs::write(manifests.join("1.0.0.json"), MANIFEST).unwrap();
    fs::write(
        root.path().join("config.toml"),
        format!(
            "log_level = \"warn\"\ningress_domain = \"apps.example.com\"\nmanifest_directory = {:?}\n",
            manifests.display().to_string()
        ),
    )
    .unwrap();

    let settings = init_logging(Some(root.path().to_path_buf())).unwrap();
    assert_eq!(settings.ingress_domain, "apps.example.com");

    let mch = hub();
    let cache =
        CacheSpec::from_manifest(&settings.manifest_directory, &mch.spec.version, &settings.ingress_domain)
            .unwrap();
    assert!(cache.image_sha_digests.contains_key(HELM_REPO_IMAGE_KEY));

    // Create
    let dep = deployment(&mch, &cache);
    let svc = service(&mch);
    assert_eq!(dep.metadata.namespace, svc.metadata.namespace);
    assert_eq!(svc.metadata.name.as_deref(), Some(HELM_REPO_NAME));

    let pod = dep.spec.as_ref().unwrap().template.spec.as_ref().unwrap();
    assert_eq!(
        pod.containers[0].image.as_deref(),
        Some("quay.io/open-cluster-management/multiclusterhub-repo@sha256:0123456789abcdef")
    );

    // Observe unchanged
    let (same, changed) = validate_deployment(&mch, &cache, &dep);
    assert!(!changed);
    assert_eq!(same, dep);

    // Someone scales the deployment by hand
    let mut scaled = dep.clone();
    scaled.spec.as_mut().unwrap().replicas = Some(5);
    let (corrected, changed) = validate_deployment(&mch, &cache, &scaled);
    assert!(changed);
    assert_eq!(corrected, dep);
    assert_eq!(scaled.spec.unwrap().replicas, Some(5));
}
