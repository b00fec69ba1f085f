use {
    crate::error::{MchError, MchResult},
    serde::{Deserialize, Serialize},
    std::{
        collections::BTreeMap,
        fs,
        path::{Path, PathBuf},
    },
};

// Values computed outside of the hub spec that still shape the manifests we render.
// Everything here is optional: an empty cache must always be usable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CacheSpec {
    #[serde(default)]
    pub ingress_domain: String,

    // Logical image key (e.g. `multiclusterhub_repo`) to content digest.
    #[serde(default)]
    pub image_sha_digests: BTreeMap<String, String>,
}

impl CacheSpec {
    pub fn new(ingress_domain: &str) -> Self {
        Self {
            ingress_domain: ingress_domain.to_string(),
            image_sha_digests: BTreeMap::new(),
        }
    }

    /// Builds a cache from the image manifest shipped for `version`.
    pub fn from_manifest(dir: &Path, version: &str, ingress_domain: &str) -> MchResult<Self> {
        Ok(Self {
            ingress_domain: ingress_domain.to_string(),
            image_sha_digests: read_image_manifest(dir, version)?,
        })
    }

    /// Returns the digest recorded for `image_key`. Empty digests count as missing.
    pub fn image_digest(&self, image_key: &str) -> Option<&str> {
        self.image_sha_digests
            .get(image_key)
            .map(String::as_str)
            .filter(|digest| !digest.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ManifestImage {
    pub image_name: String,
    #[serde(default)]
    pub image_version: String,
    #[serde(default)]
    pub image_remote: String,
    #[serde(default)]
    pub image_digest: String,
    pub image_key: String,
}

pub fn manifest_path(dir: &Path, version: &str) -> PathBuf {
    dir.join(format!("{version}.json"))
}

// Reads `<dir>/<version>.json` and returns the image key -> digest map.
pub fn read_image_manifest(dir: &Path, version: &str) -> MchResult<BTreeMap<String, String>> {
    let path = manifest_path(dir, version);
    if !path.is_file() {
        return Err(MchError::FileNotFound(path.display().to_string()));
    }

    tracing::debug!("Reading image manifest: {}", path.display());
    let contents = fs::read_to_string(&path)?;
    let images: Vec<ManifestImage> = serde_json::from_str(&contents)?;

    let digests: BTreeMap<String, String> = images
        .into_iter()
        .filter(|image| !image.image_digest.is_empty())
        .map(|image| (image.image_key, image.image_digest))
        .collect();
    tracing::debug!("Loaded {} image digests from {}", digests.len(), path.display());

    Ok(digests)
}
