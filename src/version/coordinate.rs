//! Package coordinates and the repository roots derived from them

use std::fmt;

use crate::version::error::RegistryError;

/// A `group:artifact` coordinate, e.g. `org.typelevel:cats-core_2.13`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageCoordinate {
    group_id: String,
    artifact_id: String,
}

impl PackageCoordinate {
    pub fn new(group_id: &str, artifact_id: &str) -> Result<Self, RegistryError> {
        if group_id.is_empty() || artifact_id.is_empty() {
            return Err(RegistryError::InvalidCoordinate(format!(
                "{}:{}",
                group_id, artifact_id
            )));
        }
        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
        })
    }

    /// Parses `group:artifact`. Anything after a second `:` is ignored.
    pub fn parse(package_name: &str) -> Result<Self, RegistryError> {
        let mut parts = package_name.split(':');
        match (parts.next(), parts.next()) {
            (Some(group_id), Some(artifact_id)) => Self::new(group_id.trim(), artifact_id.trim()),
            _ => Err(RegistryError::InvalidCoordinate(package_name.to_string())),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Artifact name without any cross-build suffix (`cats-core_2.13` -> `cats-core`)
    pub fn artifact(&self) -> &str {
        self.artifact_id
            .split('_')
            .next()
            .unwrap_or(&self.artifact_id)
    }

    /// Scala version suffix (`cats-core_2.13` -> `2.13`)
    pub fn scala_version(&self) -> Option<&str> {
        self.artifact_id.split('_').nth(1).filter(|s| !s.is_empty())
    }

    /// Candidate search roots under `registry_url`, in lookup order.
    ///
    /// The slash-joined group path comes first (Maven layout), then the
    /// dot-joined group as a single directory (flat Ivy-style layout).
    pub fn search_roots(&self, registry_url: &str) -> Vec<String> {
        let repo_root = ensure_trailing_slash(registry_url);
        let segments: Vec<&str> = self.group_id.split('.').collect();

        vec![
            format!("{}{}/", repo_root, segments.join("/")),
            format!("{}{}/", repo_root, segments.join(".")),
        ]
    }

    /// Maven layout directory of the full artifact id
    pub fn maven_artifact_url(&self, registry_url: &str) -> String {
        format!(
            "{}{}/{}/",
            ensure_trailing_slash(registry_url),
            self.group_id.replace('.', "/"),
            self.artifact_id
        )
    }
}

impl fmt::Display for PackageCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
