//! `[seo]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [seo]
//! bare_title_routes = ["/", "/docs"]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Route-sensitive SEO settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Routes whose title template is the bare site title (no `%s` suffix).
    ///
    /// Matched by exact string equality against the route path:
    /// `/docs/` and `/en/docs` do not match `/docs`.
    pub bare_title_routes: Vec<String>,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            bare_title_routes: vec!["/".into(), "/docs".into()],
        }
    }
}

impl SeoConfig {
    pub const BARE_TITLE_ROUTES: FieldPath = FieldPath::new("seo.bare_title_routes");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for route in &self.bare_title_routes {
            if !route.starts_with('/') {
                diag.error_with_hint(
                    Self::BARE_TITLE_ROUTES,
                    format!("route '{route}' must start with '/'"),
                    format!("use \"/{route}\""),
                );
            }
        }
    }
}
