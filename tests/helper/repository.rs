//! Mock repository test utilities

use std::sync::Arc;

use mockito::{Mock, ServerGuard};

use sbt_releases::version::fetcher::HttpFetcher;
use sbt_releases::version::registries::SbtPackageResolver;

/// Renders an index page in the style of Maven Central's directory listing
pub fn index_page(entries: &[&str]) -> String {
    let links: Vec<String> = entries
        .iter()
        .map(|entry| format!(r#"<a href="{0}/" title="{0}/">{0}/</a>"#, entry))
        .collect();

    format!(
        "<html>\n<head><title>Index</title></head>\n<body>\n<pre id=\"contents\">\n\
         <a href=\"../\">../</a>\n{}\n<a href=\"maven-metadata.xml\">maven-metadata.xml</a>\n\
         </pre>\n</body>\n</html>",
        links.join("\n")
    )
}

/// Minimal POM with optional homepage and SCM URL
pub fn pom(homepage: Option<&str>, scm_url: Option<&str>) -> String {
    let url = homepage
        .map(|u| format!("<url>{}</url>", u))
        .unwrap_or_default();
    let scm = scm_url
        .map(|u| format!("<scm><url>{}</url></scm>", u))
        .unwrap_or_default();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <project xmlns=\"http://maven.apache.org/POM/4.0.0\">\
         <modelVersion>4.0.0</modelVersion>{}{}</project>",
        url, scm
    )
}

/// Serves an index page at `path`
pub async fn mock_listing(server: &mut ServerGuard, path: &str, entries: &[&str]) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(index_page(entries))
        .create_async()
        .await
}

/// Serves a text document at `path`
pub async fn mock_document(server: &mut ServerGuard, path: &str, body: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(body)
        .create_async()
        .await
}

/// Resolver talking to the mock server over real HTTP
pub fn create_test_resolver() -> SbtPackageResolver {
    SbtPackageResolver::with_maven_fallback(Arc::new(HttpFetcher::default()))
}
