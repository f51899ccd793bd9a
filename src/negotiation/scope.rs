//! Which request paths take part in locale negotiation.

use regex::Regex;
use std::sync::OnceLock;

/// Paths excluded unless configured otherwise.
pub const DEFAULT_EXCLUDED_PATHS: &[&str] = &[
    "/static/",
    "/assets/",
    "/favicon.ico",
    "/robots.txt",
    "/sitemap.xml",
    "/health",
];

/// Matches a final path segment that ends in a file extension
static FILE_EXTENSION: OnceLock<Regex> = OnceLock::new();

fn file_extension() -> &'static Regex {
    FILE_EXTENSION.get_or_init(|| {
        Regex::new(r"\.[A-Za-z0-9]+$").expect("file extension pattern is valid")
    })
}

/// Excluded path prefixes plus the "has a file extension" rule.
///
/// Excluded requests bypass negotiation entirely: no resolution, no cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteScope {
    excluded_prefixes: Vec<String>,
}

impl RouteScope {
    pub fn new<I, S>(excluded_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_prefixes: excluded_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether `path` bypasses negotiation.
    pub fn is_excluded(&self, path: &str) -> bool {
        if self
            .excluded_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
        {
            return true;
        }

        let last_segment = path.rsplit('/').next().unwrap_or_default();
        file_extension().is_match(last_segment)
    }

    pub fn excluded_prefixes(&self) -> &[String] {
        &self.excluded_prefixes
    }
}

impl Default for RouteScope {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_PATHS.iter().copied())
    }
}
