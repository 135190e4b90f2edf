//! sbt package resolver for directory-listing repositories
//!
//! Repositories that only expose HTML index pages are crawled directly:
//!
//! 1. Each search root derived from the group id is listed (slash form first,
//!    then dot form).
//! 2. Entries naming the artifact, or a cross-built `<artifact>_<suffix>`
//!    variant of it, are kept. Scala.js and Scala Native variants are skipped,
//!    and a requested Scala version narrows the set to its own directory.
//! 3. Every kept directory is listed for version entries, which are merged
//!    and sorted.
//! 4. The POM of the newest version supplies homepage and source URL.
//!
//! The first root that yields versions wins. When none does, the request is
//! handed to the fallback resolver unchanged.

use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexSet;
use tracing::{debug, info, warn};

use crate::config::ResolverConfig;
use crate::version::coordinate::PackageCoordinate;
use crate::version::descriptor::parse_pom;
use crate::version::error::RegistryError;
use crate::version::fetcher::{HttpFetcher, TextFetcher};
use crate::version::listing::LinkExtractor;
use crate::version::registries::maven::MavenMetadataResolver;
use crate::version::registry::ReleaseResolver;
use crate::version::types::{ReleaseMetadata, ReleaseResult};
use crate::version::versioning::{MavenVersionComparator, VersionComparator};

/// Resolver that crawls repository index pages for sbt-published artifacts
pub struct SbtPackageResolver {
    fetcher: Arc<dyn TextFetcher>,
    comparator: Arc<dyn VersionComparator>,
    fallback: Option<Arc<dyn ReleaseResolver>>,
    links: LinkExtractor,
}

impl SbtPackageResolver {
    pub fn new(
        fetcher: Arc<dyn TextFetcher>,
        comparator: Arc<dyn VersionComparator>,
        fallback: Option<Arc<dyn ReleaseResolver>>,
    ) -> Self {
        Self {
            fetcher,
            comparator,
            fallback,
            links: LinkExtractor::new(),
        }
    }

    /// Crawl resolver over `fetcher`, falling back to `maven-metadata.xml`
    pub fn with_maven_fallback(fetcher: Arc<dyn TextFetcher>) -> Self {
        let comparator: Arc<dyn VersionComparator> = Arc::new(MavenVersionComparator);
        let fallback = MavenMetadataResolver::new(fetcher.clone(), comparator.clone());
        Self::new(fetcher, comparator, Some(Arc::new(fallback)))
    }

    /// Resolver built from configuration, sharing one HTTP client
    pub fn from_config(config: &ResolverConfig) -> Self {
        let fetcher: Arc<dyn TextFetcher> =
            Arc::new(HttpFetcher::new(Duration::from_millis(config.timeout_ms)));
        if config.fallback.enabled {
            Self::with_maven_fallback(fetcher)
        } else {
            Self::new(fetcher, Arc::new(MavenVersionComparator), None)
        }
    }

    /// Lists `search_root` and returns the directories holding the artifact.
    ///
    /// Returns `None` when the root itself has no listing.
    pub async fn artifact_subdirs(
        &self,
        search_root: &str,
        artifact: &str,
        scala_version: Option<&str>,
    ) -> Option<Vec<String>> {
        let content = self.fetcher.fetch_text(search_root).await?;

        let subdirs = self.links.extract(&content, search_root, |name| {
            is_artifact_subdir(name, artifact).then(|| name.to_string())
        });

        Some(narrow_to_scala_version(subdirs, artifact, scala_version))
    }

    /// Collects versions listed under each subdirectory, oldest first.
    ///
    /// Returns `None` when no subdirectory lists any version.
    pub async fn package_releases(
        &self,
        search_root: &str,
        subdirs: &[String],
    ) -> Option<Vec<String>> {
        let mut releases = IndexSet::new();

        for subdir in subdirs {
            let listing_url = format!("{}{}/", search_root, subdir);
            let Some(content) = self.fetcher.fetch_text(&listing_url).await else {
                debug!("No listing at {}", listing_url);
                continue;
            };
            releases.extend(self.links.extract(&content, &listing_url, |name| {
                (!name.starts_with('.')).then(|| name.to_string())
            }));
        }

        if releases.is_empty() {
            return None;
        }

        let mut versions: Vec<String> = releases.into_iter().collect();
        self.comparator.sort(&mut versions);
        Some(versions)
    }

    /// Reads homepage and source URL from the first descriptor found for `version`.
    pub async fn release_metadata(
        &self,
        search_root: &str,
        subdirs: &[String],
        version: &str,
    ) -> ReleaseMetadata {
        for subdir in subdirs {
            for file_name in descriptor_file_names(subdir, version) {
                let pom_url = format!("{}{}/{}/{}", search_root, subdir, version, file_name);
                let Some(content) = self.fetcher.fetch_text(&pom_url).await else {
                    continue;
                };

                match parse_pom(&content) {
                    Ok(pom) => {
                        debug!("Read release metadata from {}", pom_url);
                        return pom.release_metadata();
                    }
                    Err(e) => warn!("Skipping malformed descriptor {}: {}", pom_url, e),
                }
            }
        }
        ReleaseMetadata::default()
    }

    /// Tries each search root in order, stopping at the first with versions.
    async fn crawl(
        &self,
        coordinate: &PackageCoordinate,
        registry_url: &str,
    ) -> Option<ReleaseResult> {
        for search_root in coordinate.search_roots(registry_url) {
            let Some(subdirs) = self
                .artifact_subdirs(&search_root, coordinate.artifact(), coordinate.scala_version())
                .await
            else {
                debug!("No listing at search root {}", search_root);
                continue;
            };

            let Some(versions) = self.package_releases(&search_root, &subdirs).await else {
                debug!("No versions for {} under {}", coordinate, search_root);
                continue;
            };

            let metadata = match self.comparator.latest(&versions) {
                Some(latest) => self.release_metadata(&search_root, &subdirs, latest).await,
                None => ReleaseMetadata::default(),
            };

            return Some(ReleaseResult::new(versions, metadata, search_root));
        }
        None
    }
}

impl Default for SbtPackageResolver {
    fn default() -> Self {
        Self::with_maven_fallback(Arc::new(HttpFetcher::default()))
    }
}

#[async_trait::async_trait]
impl ReleaseResolver for SbtPackageResolver {
    async fn get_releases(
        &self,
        coordinate: &PackageCoordinate,
        registry_url: &str,
    ) -> Result<Option<ReleaseResult>, RegistryError> {
        if let Some(result) = self.crawl(coordinate, registry_url).await {
            info!(
                "Found {} versions for {} under {} (latest {})",
                result.releases.len(),
                coordinate,
                result.registry_url,
                result.latest().unwrap_or("-")
            );
            return Ok(Some(result));
        }

        let Some(fallback) = &self.fallback else {
            debug!("No versions discovered for {}", coordinate);
            return Ok(None);
        };

        debug!(
            "No versions discovered for {} listing package folders, falling back",
            coordinate
        );
        fallback.get_releases(coordinate, registry_url).await
    }
}

/// Whether a search root entry holds releases of `artifact`
fn is_artifact_subdir(name: &str, artifact: &str) -> bool {
    if name == artifact {
        return true;
    }
    let Some(suffix) = name
        .strip_prefix(artifact)
        .and_then(|rest| rest.strip_prefix('_'))
    else {
        return false;
    };
    !suffix.starts_with("native") && !suffix.starts_with("sjs")
}

/// Keeps only `<artifact>_<scala_version>` when it is among `subdirs`
fn narrow_to_scala_version(
    subdirs: Vec<String>,
    artifact: &str,
    scala_version: Option<&str>,
) -> Vec<String> {
    let Some(scala_version) = scala_version else {
        return subdirs;
    };
    let wanted = format!("{}_{}", artifact, scala_version);
    if subdirs.contains(&wanted) {
        vec![wanted]
    } else {
        subdirs
    }
}

/// Descriptor file names for `subdir`, most specific first
fn descriptor_file_names(subdir: &str, version: &str) -> Vec<String> {
    let artifact = subdir.split('_').next().unwrap_or(subdir);

    let mut names = vec![format!("{}-{}.pom", subdir, version)];
    if artifact != subdir {
        names.push(format!("{}-{}.pom", artifact, version));
    }
    names
}
