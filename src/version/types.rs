//! Result types shared by the release resolvers

use serde::Serialize;

/// A single published version of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub version: String,
}

impl Release {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

/// Homepage and source-control location read from a release descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Outcome of resolving a package against one registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseResult {
    /// Releases ordered from oldest to newest
    pub releases: Vec<Release>,
    #[serde(flatten)]
    pub metadata: ReleaseMetadata,
    /// Repository URL the releases were discovered under
    pub registry_url: String,
}

impl ReleaseResult {
    pub fn new(versions: Vec<String>, metadata: ReleaseMetadata, registry_url: String) -> Self {
        Self {
            releases: versions.into_iter().map(Release::new).collect(),
            metadata,
            registry_url,
        }
    }

    /// Version strings in release order
    pub fn versions(&self) -> Vec<&str> {
        self.releases.iter().map(|r| r.version.as_str()).collect()
    }

    /// Newest version, the last in release order
    pub fn latest(&self) -> Option<&str> {
        self.releases.last().map(|r| r.version.as_str())
    }
}
