use mch_common::CacheSpec;

use crate::operator::crd::MultiClusterHubSpec;

/// Resolves the image for a hub component.
///
/// A digest recorded under `image_key` pins the image; otherwise the tag is built from
/// the hub version plus the optional tag suffix.
pub fn image_reference(
    spec: &MultiClusterHubSpec,
    image_name: &str,
    image_key: &str,
    cache: &CacheSpec,
) -> String {
    let repository = &spec.image_repository;
    match cache.image_digest(image_key) {
        Some(digest) => format!("{repository}/{image_name}@{digest}"),
        None if spec.image_tag_suffix.is_empty() => {
            format!("{repository}/{image_name}:{}", spec.version)
        }
        None => format!(
            "{repository}/{image_name}:{}-{}",
            spec.version, spec.image_tag_suffix
        ),
    }
}
