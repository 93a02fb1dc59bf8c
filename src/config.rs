//! Site settings that have to be identical on the server and in the browser,
//! so they are fixed at compile time rather than read at runtime.

use chrono::{DateTime, Datelike, FixedOffset};

const DEFAULT_SITE_URL: &str = "https://vignesh-portfolio.com";

/// Canonical origin of the deployed site, without a trailing slash.
pub const SITE_URL: &str = match option_env!("SITE_URL") {
    Some(url) => url,
    None => DEFAULT_SITE_URL,
};

/// RFC 3339 timestamp written by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn site_url(path: &str) -> String {
    let base = SITE_URL.trim_end_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    built_at: DateTime<FixedOffset>,
}

impl BuildInfo {
    pub fn parse(timestamp: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(timestamp)
            .ok()
            .map(|built_at| Self { built_at })
    }

    pub fn current() -> Option<Self> {
        Self::parse(BUILD_TIME)
    }

    pub fn year(&self) -> i32 {
        self.built_at.year()
    }

    /// e.g. "March 2026"
    pub fn updated(&self) -> String {
        self.built_at.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info() {
        let info = BuildInfo::parse("2026-03-04T10:20:30+00:00").unwrap();
        assert_eq!(info.year(), 2026);
        assert_eq!(info.updated(), "March 2026");

        assert!(BuildInfo::parse("yesterday").is_none());
        assert!(BuildInfo::current().is_some());
    }

    #[test]
    fn test_site_url() {
        assert!(!site_url("").ends_with('/'));
        assert_eq!(site_url("og-image.jpg"), format!("{}/og-image.jpg", site_url("")));
        assert_eq!(site_url("/og-image.jpg"), site_url("og-image.jpg"));
    }
}
