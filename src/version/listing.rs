//! Directory-listing link extraction
//!
//! Repository servers expose their layout as plain HTML index pages. Only
//! links to immediate subdirectories of the listed page are of interest, so
//! every `href` is resolved against the page URL and reduced to a single
//! path segment before the caller's filter sees it.

use indexmap::IndexSet;
use regex::Regex;
use reqwest::Url;

/// Extracts subdirectory links from HTML index pages
pub struct LinkExtractor {
    /// Matches `href="..."` / `href='...'`, capturing the target
    href_re: Regex,
}

impl LinkExtractor {
    pub fn new() -> Self {
        Self {
            href_re: Regex::new(r#"(?i)href\s*=\s*["']([^"']*)["']"#).unwrap(),
        }
    }

    /// Collects the subdirectory names linked from a listing page.
    ///
    /// `filter` receives each name (no slashes) and returns the value to keep,
    /// or `None` to drop it. Duplicates are collapsed.
    pub fn extract<F>(&self, body: &str, page_url: &str, filter: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Url::parse(page_url).ok();

        let entries: IndexSet<String> = self
            .href_re
            .captures_iter(body)
            .filter_map(|caps| caps.get(1))
            .filter_map(|href| subdirectory_name(base.as_ref(), href.as_str()))
            .filter_map(|name| filter(&name))
            .collect();

        entries.into_iter().collect()
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduces `href` to the name of a direct child directory of `base`
fn subdirectory_name(base: Option<&Url>, href: &str) -> Option<String> {
    let relative = match base {
        Some(base) => {
            let target = base.join(href).ok()?;
            if target.origin() != base.origin() {
                return None;
            }
            target.path().strip_prefix(base.path())?.to_string()
        }
        None => href.strip_prefix("./").unwrap_or(href).to_string(),
    };

    // Listings mix files and directories; only directories end in `/`.
    let name = relative.strip_suffix('/')?;
    if name.is_empty() || name.contains('/') || name == ".." {
        return None;
    }
    Some(name.to_string())
}
