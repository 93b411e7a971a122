//! Open Graph and title props handed to the host's SEO component.
//!
//! The host substitutes the page title into `titleTemplate` itself;
//! [`apply_title_template`] does the same for callers without such a host.

use serde::Serialize;

use crate::config::OgImageConfig;
use crate::core::RouteContext;

use super::SiteDefaults;
use super::resolve::{TITLE_PLACEHOLDER, title_template};

/// Open Graph image descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl From<&OgImageConfig> for OgImage {
    fn from(config: &OgImageConfig) -> Self {
        Self {
            url: config.url.clone(),
            width: config.width,
            height: config.height,
            alt: config.alt.clone(),
            mime_type: config.mime_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub images: Vec<OgImage>,
}

/// Per-route SEO props: title template plus shared Open Graph images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoProps {
    pub title_template: String,
    pub open_graph: OpenGraph,
}

/// Build the SEO props for `route`. Depends on the path only.
pub fn seo_props(route: &RouteContext, defaults: &SiteDefaults) -> SeoProps {
    SeoProps {
        title_template: title_template(route.path(), defaults),
        open_graph: OpenGraph {
            images: vec![defaults.og_image.clone()],
        },
    }
}

/// Substitute `page_title` into `template`.
///
/// A template without the placeholder is returned unchanged, which is how
/// the bare-title routes keep the site title.
pub fn apply_title_template(template: &str, page_title: &str) -> String {
    template.replacen(TITLE_PLACEHOLDER, page_title, 1)
}
