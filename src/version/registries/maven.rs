//! Maven repository resolver backed by `maven-metadata.xml`

use std::sync::Arc;

use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::version::coordinate::PackageCoordinate;
use crate::version::descriptor::{parse_maven_metadata, parse_pom};
use crate::version::error::RegistryError;
use crate::version::fetcher::{HttpFetcher, TextFetcher};
use crate::version::registry::ReleaseResolver;
use crate::version::types::{ReleaseMetadata, ReleaseResult};
use crate::version::versioning::{MavenVersionComparator, VersionComparator};

/// Resolves releases from the metadata file Maven publishes per artifact
pub struct MavenMetadataResolver {
    fetcher: Arc<dyn TextFetcher>,
    comparator: Arc<dyn VersionComparator>,
}

impl MavenMetadataResolver {
    pub fn new(fetcher: Arc<dyn TextFetcher>, comparator: Arc<dyn VersionComparator>) -> Self {
        Self {
            fetcher,
            comparator,
        }
    }

    async fn fetch_metadata(
        &self,
        artifact_url: &str,
        artifact_id: &str,
        version: &str,
    ) -> ReleaseMetadata {
        let pom_url = format!("{}{}/{}-{}.pom", artifact_url, version, artifact_id, version);
        let Some(body) = self.fetcher.fetch_text(&pom_url).await else {
            return ReleaseMetadata::default();
        };

        match parse_pom(&body) {
            Ok(pom) => pom.release_metadata(),
            Err(e) => {
                warn!("Ignoring malformed descriptor {}: {}", pom_url, e);
                ReleaseMetadata::default()
            }
        }
    }
}

impl Default for MavenMetadataResolver {
    fn default() -> Self {
        Self::new(
            Arc::new(HttpFetcher::default()),
            Arc::new(MavenVersionComparator),
        )
    }
}

#[async_trait::async_trait]
impl ReleaseResolver for MavenMetadataResolver {
    async fn get_releases(
        &self,
        coordinate: &PackageCoordinate,
        registry_url: &str,
    ) -> Result<Option<ReleaseResult>, RegistryError> {
        let artifact_url = coordinate.maven_artifact_url(registry_url);
        let metadata_url = format!("{}maven-metadata.xml", artifact_url);
        debug!("Fetching Maven metadata: {}", metadata_url);

        let Some(body) = self.fetcher.fetch_text(&metadata_url).await else {
            debug!("No Maven metadata for {} at {}", coordinate, registry_url);
            return Ok(None);
        };

        let metadata = parse_maven_metadata(&body).map_err(|e| {
            warn!("Failed to parse Maven metadata {}: {}", metadata_url, e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let unique: IndexSet<&String> = metadata.versions().iter().collect();
        let mut versions: Vec<String> = unique.into_iter().cloned().collect();
        if versions.is_empty() {
            return Ok(None);
        }
        self.comparator.sort(&mut versions);

        let release_metadata = match self.comparator.latest(&versions) {
            Some(latest) => {
                self.fetch_metadata(&artifact_url, coordinate.artifact_id(), latest)
                    .await
            }
            None => ReleaseMetadata::default(),
        };

        debug!(
            "Found {} versions for {} in Maven metadata",
            versions.len(),
            coordinate
        );

        Ok(Some(ReleaseResult::new(
            versions,
            release_metadata,
            registry_url.to_string(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const METADATA: &str = r#"<metadata>
  <groupId>org.example</groupId>
  <artifactId>foo_2.13</artifactId>
  <versioning>
    <versions>
      <version>1.10</version>
      <version>1.2</version>
      <version>1.2</version>
      <version>1.3</version>
    </versions>
  </versioning>
</metadata>"#;

    #[tokio::test]
    async fn get_releases_returns_sorted_versions_with_metadata() {
        let mut server = Server::new_async().await;

        let metadata_mock = server
            .mock("GET", "/maven2/org/example/foo_2.13/maven-metadata.xml")
            .with_status(200)
            .with_body(METADATA)
            .create_async()
            .await;
        let pom_mock = server
            .mock("GET", "/maven2/org/example/foo_2.13/1.10/foo_2.13-1.10.pom")
            .with_status(200)
            .with_body(
                "<project><url>https://foo.example.org</url>\
                 <scm><url>https://github.com/example/foo</url></scm></project>",
            )
            .create_async()
            .await;

        let registry_url = format!("{}/maven2", server.url());
        let coordinate = PackageCoordinate::parse("org.example:foo_2.13").unwrap();
        let result = MavenMetadataResolver::default()
            .get_releases(&coordinate, &registry_url)
            .await
            .unwrap()
            .unwrap();

        metadata_mock.assert_async().await;
        pom_mock.assert_async().await;
        assert_eq!(result.versions(), vec!["1.2", "1.3", "1.10"]);
        assert_eq!(
            result.metadata,
            ReleaseMetadata {
                homepage: Some("https://foo.example.org".to_string()),
                source_url: Some("https://github.com/example/foo".to_string()),
            }
        );
        assert_eq!(result.registry_url, registry_url);
    }

    #[tokio::test]
    async fn get_releases_returns_none_without_metadata() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/org/example/foo/maven-metadata.xml")
            .with_status(404)
            .create_async()
            .await;

        let coordinate = PackageCoordinate::parse("org.example:foo").unwrap();
        let result = MavenMetadataResolver::default()
            .get_releases(&coordinate, &server.url())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn get_releases_returns_none_for_empty_version_list() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/org/example/foo/maven-metadata.xml")
            .with_status(200)
            .with_body("<metadata><versioning><versions></versions></versioning></metadata>")
            .create_async()
            .await;

        let coordinate = PackageCoordinate::parse("org.example:foo").unwrap();
        let result = MavenMetadataResolver::default()
            .get_releases(&coordinate, &server.url())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn get_releases_returns_invalid_response_for_malformed_metadata() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/org/example/foo/maven-metadata.xml")
            .with_status(200)
            .with_body("<metadata><versioning></metadata>")
            .create_async()
            .await;

        let coordinate = PackageCoordinate::parse("org.example:foo").unwrap();
        let result = MavenMetadataResolver::default()
            .get_releases(&coordinate, &server.url())
            .await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn get_releases_omits_metadata_when_pom_is_missing() {
        let mut server = Server::new_async().await;

        let _metadata_mock = server
            .mock("GET", "/org/example/foo/maven-metadata.xml")
            .with_status(200)
            .with_body("<metadata><versioning><versions><version>1.0</version></versions></versioning></metadata>")
            .create_async()
            .await;
        let pom_mock = server
            .mock("GET", "/org/example/foo/1.0/foo-1.0.pom")
            .with_status(404)
            .create_async()
            .await;

        let coordinate = PackageCoordinate::parse("org.example:foo").unwrap();
        let result = MavenMetadataResolver::default()
            .get_releases(&coordinate, &server.url())
            .await
            .unwrap()
            .unwrap();

        pom_mock.assert_async().await;
        assert_eq!(result.versions(), vec!["1.0"]);
        assert_eq!(result.metadata, ReleaseMetadata::default());
    }
}
