//! Resolver trait for looking up the releases of a package in a registry

#[cfg(test)]
use mockall::automock;

use crate::version::coordinate::PackageCoordinate;
use crate::version::error::RegistryError;
use crate::version::types::ReleaseResult;

/// Resolves the published releases of a package hosted under a registry URL
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseResolver: Send + Sync {
    /// Looks up `coordinate` under `registry_url`
    ///
    /// # Returns
    /// * `Ok(Some(ReleaseResult))` - Releases ordered from oldest to newest
    /// * `Ok(None)` - The registry has no releases for this package
    /// * `Err(RegistryError)` - The lookup itself failed
    async fn get_releases(
        &self,
        coordinate: &PackageCoordinate,
        registry_url: &str,
    ) -> Result<Option<ReleaseResult>, RegistryError>;
}

/// Tries each registry in order and returns the first non-empty result
pub async fn resolve_in_registries(
    resolver: &dyn ReleaseResolver,
    coordinate: &PackageCoordinate,
    registry_urls: &[String],
) -> Result<Option<ReleaseResult>, RegistryError> {
    for registry_url in registry_urls {
        if let Some(result) = resolver.get_releases(coordinate, registry_url).await? {
            return Ok(Some(result));
        }
    }
    Ok(None)
}
