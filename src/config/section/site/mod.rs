//! `[site]` section configuration.
//!
//! Process-wide site defaults: the origin every canonical URL is joined to,
//! the title and description used when a page does not override them, and
//! the social assets shared by every route.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://millionjs.org"
//! title = "Million.js"
//! description = "Million is an extremely fast and lightweight <4kb virtual DOM"
//! favicon = "/favicon.svg"
//! twitter = "aidenybai"
//!
//! [site.og_image]
//! url = "https://millionjs.org/banner.png"
//! width = 1328
//! height = 345
//! alt = "Million.js banner"
//! type = "image/png"
//! ```

mod og_image;

pub use og_image::OgImageConfig;

use serde::{Deserialize, Serialize};

use crate::config::util::check_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata shared by every route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site origin, e.g. `https://millionjs.org`.
    pub url: String,

    /// Site title. Also the bare title template and the apple web-app title.
    pub title: String,

    /// Default page description.
    pub description: String,

    /// Favicon path as served by the host (opaque, not fetched).
    pub favicon: String,

    /// Twitter handle without the leading `@`.
    pub twitter: String,

    /// Open Graph share image.
    pub og_image: OgImageConfig,
}

impl SiteConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const DESCRIPTION: FieldPath = FieldPath::new("site.description");
    pub const FAVICON: FieldPath = FieldPath::new("site.favicon");
    pub const TWITTER: FieldPath = FieldPath::new("site.twitter");

    /// Validate site defaults.
    ///
    /// # Checks
    /// - `url` is an absolute http(s) URL
    /// - `title`, `description`, `favicon`, `twitter` are present
    /// - `twitter` is given without the `@` prefix
    /// - `favicon` that is not an SVG produces a warning, since the head
    ///   always declares `image/svg+xml`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_http_url(Self::URL, &self.url, diag);
        diag.require(Self::TITLE, &self.title);
        diag.require(Self::DESCRIPTION, &self.description);
        diag.require(Self::FAVICON, &self.favicon);
        diag.require(Self::TWITTER, &self.twitter);

        if self.twitter.starts_with('@') {
            diag.error_with_hint(
                Self::TWITTER,
                "handle must not start with '@'",
                format!("use \"{}\"", self.twitter.trim_start_matches('@')),
            );
        }

        if !self.favicon.is_empty() && !self.favicon.to_ascii_lowercase().ends_with(".svg") {
            diag.warn(
                Self::FAVICON,
                format!("'{}' is not an svg, but is declared as image/svg+xml", self.favicon),
            );
        }

        self.og_image.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_site_fields() {
        let config = test_parse_config("");
        assert_eq!(config.site.url, "https://millionjs.org");
        assert_eq!(config.site.title, "Million.js");
        assert_eq!(config.site.favicon, "/favicon.svg");
        assert_eq!(config.site.twitter, "aidenybai");
    }

    #[test]
    fn test_missing_favicon_is_error() {
        let mut config = test_parse_config("");
        config.site.favicon.clear();
        let diag = config.diagnostics();
        assert!(diag.errors().iter().any(|e| e.field.as_str() == "site.favicon"));
    }

    #[test]
    fn test_twitter_with_at_is_error() {
        let mut config = test_parse_config("");
        config.site.twitter = "@aidenybai".into();
        let diag = config.diagnostics();
        let err = diag
            .errors()
            .iter()
            .find(|e| e.field.as_str() == "site.twitter")
            .unwrap();
        assert_eq!(err.hint.as_deref(), Some("use \"aidenybai\""));
    }

    #[test]
    fn test_non_svg_favicon_warns() {
        let mut config = test_parse_config("");
        config.site.favicon = "/favicon.ico".into();
        let diag = config.diagnostics();
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_relative_site_url_is_error() {
        let mut config = test_parse_config("");
        config.site.url = "/docs".into();
        let diag = config.diagnostics();
        assert!(diag.errors().iter().any(|e| e.field.as_str() == "site.url"));
    }
}
