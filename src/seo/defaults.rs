//! Process-wide site defaults.

use url::Url;

use crate::config::util::parse_http_url;
use crate::config::{ConfigError, SiteConfig, ThemeConfig};

use super::og::OgImage;

/// Values every route falls back to.
///
/// Built once from a validated [`ThemeConfig`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDefaults {
    /// Origin canonical URLs are joined onto.
    pub origin: Url,
    pub title: String,
    pub description: String,
    /// Favicon path, emitted as-is.
    pub favicon: String,
    /// Handle without the `@`.
    pub twitter_handle: String,
    /// Share image; its URL is also the `twitter:image` banner.
    pub og_image: OgImage,
    /// Routes that use the bare title template (exact match).
    pub bare_title_routes: Vec<String>,
}

impl SiteDefaults {
    /// Extract the defaults from a config.
    ///
    /// Only the origin is re-parsed here; the other fields were checked by
    /// [`ThemeConfig::validate`].
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        let site = &config.site;
        let origin = parse_http_url(&site.url).map_err(|reason| {
            ConfigError::Validation(format!("{}: {}", SiteConfig::URL.as_str(), reason))
        })?;

        Ok(Self {
            origin,
            title: site.title.clone(),
            description: site.description.clone(),
            favicon: site.favicon.clone(),
            twitter_handle: site.twitter.clone(),
            og_image: OgImage::from(&site.og_image),
            bare_title_routes: config.seo.bare_title_routes.clone(),
        })
    }

    /// `@handle` as used by `twitter:site` and `twitter:creator`.
    pub fn twitter_at(&self) -> String {
        format!("@{}", self.twitter_handle)
    }
}
