//! POM descriptor and `maven-metadata.xml` parsing

use quick_xml::de::from_str;
use serde::Deserialize;

use crate::version::error::DescriptorError;
use crate::version::types::ReleaseMetadata;

/// The subset of a POM read for release metadata
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PomDescriptor {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub scm: Option<Scm>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Scm {
    #[serde(default)]
    pub url: Option<String>,
}

impl PomDescriptor {
    /// Top-level `<url>`
    pub fn homepage(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }

    /// `<scm><url>`, as written in the POM
    pub fn scm_url(&self) -> Option<&str> {
        non_blank(self.scm.as_ref().and_then(|scm| scm.url.as_deref()))
    }

    pub fn release_metadata(&self) -> ReleaseMetadata {
        ReleaseMetadata {
            homepage: self.homepage().map(String::from),
            source_url: self.scm_url().map(normalize_source_url),
        }
    }
}

pub fn parse_pom(body: &str) -> Result<PomDescriptor, DescriptorError> {
    from_str(body).map_err(DescriptorError::from)
}

/// `maven-metadata.xml` as published next to each artifact's version directories
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct MavenMetadata {
    #[serde(default)]
    pub versioning: Option<Versioning>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Versioning {
    #[serde(default)]
    pub versions: Versions,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Versions {
    #[serde(default, rename = "version")]
    pub items: Vec<String>,
}

impl MavenMetadata {
    pub fn versions(&self) -> &[String] {
        self.versioning
            .as_ref()
            .map(|versioning| versioning.versions.items.as_slice())
            .unwrap_or_default()
    }
}

pub fn parse_maven_metadata(body: &str) -> Result<MavenMetadata, DescriptorError> {
    from_str(body).map_err(DescriptorError::from)
}

/// Turns an SCM connection string into a browsable URL.
///
/// `scm:git:git@github.com:org/repo.git` -> `https://github.com/org/repo`
pub fn normalize_source_url(url: &str) -> String {
    let url = url.trim();
    let url = url.strip_prefix("scm:").unwrap_or(url);
    let url = url.strip_prefix("git:").unwrap_or(url);
    let url = match url.strip_prefix("git@github.com:") {
        Some(path) => format!("https://github.com/{}", path),
        None => url.to_string(),
    };
    match url.strip_suffix(".git") {
        Some(stripped) => stripped.to_string(),
        None => url,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <modelVersion>4.0.0</modelVersion>
  <groupId>org.example</groupId>
  <artifactId>foo_2.12</artifactId>
  <version>1.0</version>
  <url>https://foo.example.org</url>
  <organization>
    <name>Example</name>
    <url>https://example.org</url>
  </organization>
  <licenses>
    <license><name>MIT</name></license>
  </licenses>
  <scm>
    <url>scm:git:git@github.com:example/foo.git</url>
    <connection>scm:git:git@github.com:example/foo.git</connection>
  </scm>
  <dependencies>
    <dependency>
      <groupId>org.scala-lang</groupId>
      <artifactId>scala-library</artifactId>
      <version>2.12.18</version>
    </dependency>
  </dependencies>
</project>"#;

    #[test]
    fn parse_pom_reads_homepage_and_scm_url() {
        let pom = parse_pom(POM).unwrap();

        assert_eq!(pom.homepage(), Some("https://foo.example.org"));
        assert_eq!(pom.scm_url(), Some("scm:git:git@github.com:example/foo.git"));
        assert_eq!(
            pom.release_metadata(),
            ReleaseMetadata {
                homepage: Some("https://foo.example.org".to_string()),
                source_url: Some("https://github.com/example/foo".to_string()),
            }
        );
    }

    #[test]
    fn parse_pom_without_fields_yields_empty_metadata() {
        let pom = parse_pom("<project><artifactId>foo</artifactId></project>").unwrap();

        assert_eq!(pom.release_metadata(), ReleaseMetadata::default());
    }

    #[test]
    fn parse_pom_treats_blank_url_as_missing() {
        let pom = parse_pom("<project><url></url><scm></scm></project>").unwrap();

        assert_eq!(pom.homepage(), None);
        assert_eq!(pom.scm_url(), None);
    }

    #[test]
    fn parse_pom_rejects_malformed_xml() {
        assert!(parse_pom("<project><url>https://x</project>").is_err());
    }

    #[rstest]
    #[case("scm:git:git@github.com:org/repo.git", "https://github.com/org/repo")]
    #[case("git@github.com:org/repo", "https://github.com/org/repo")]
    #[case("git:https://github.com/org/repo.git", "https://github.com/org/repo")]
    #[case("https://github.com/org/repo", "https://github.com/org/repo")]
    #[case("https://gitlab.com/org/repo.git", "https://gitlab.com/org/repo")]
    fn normalize_source_url_returns_browsable_url(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_source_url(input), expected);
    }

    #[test]
    fn parse_maven_metadata_reads_versions() {
        let metadata = parse_maven_metadata(
            r#"<metadata>
                 <groupId>org.example</groupId>
                 <artifactId>foo</artifactId>
                 <versioning>
                   <latest>1.1</latest>
                   <release>1.1</release>
                   <versions>
                     <version>1.0</version>
                     <version>1.1</version>
                   </versions>
                   <lastUpdated>20250101010101</lastUpdated>
                 </versioning>
               </metadata>"#,
        )
        .unwrap();

        assert_eq!(metadata.versions(), ["1.0", "1.1"]);
    }

    #[test]
    fn parse_maven_metadata_without_versioning_has_no_versions() {
        let metadata = parse_maven_metadata("<metadata><groupId>x</groupId></metadata>").unwrap();
        assert!(metadata.versions().is_empty());
    }
}
