//! `[banner]` section configuration.
//!
//! A single dismissible announcement. The host remembers dismissal per
//! `key`, so bumping the key shows the banner again to everyone.
//!
//! # Example
//!
//! ```toml
//! [banner]
//! key = "2.0.0-release"
//! text = "⭐ Million.js 2.0.0 is released. Leave a star →"
//! link = "https://github.com/aidenybai/million"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::util::check_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct BannerConfig {
    /// Dismissal key. Required whenever `text` is set.
    pub key: String,
    /// Banner text; an empty text disables the banner.
    pub text: String,
    /// Optional link wrapping the text.
    pub link: Option<String>,
}

impl BannerConfig {
    pub const KEY: FieldPath = FieldPath::new("banner.key");
    pub const LINK: FieldPath = FieldPath::new("banner.link");

    /// Whether the banner should be shown at all.
    pub fn is_enabled(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.is_enabled() {
            return;
        }
        if self.key.trim().is_empty() {
            diag.error_with_hint(
                Self::KEY,
                "banner text is set but key is missing",
                "use a version-stamped key, e.g. \"2.0.0-release\"",
            );
        } else if self.key.chars().any(char::is_whitespace) {
            diag.error(Self::KEY, "key must not contain whitespace");
        }
        if let Some(link) = &self.link {
            check_http_url(Self::LINK, link, diag);
        }
    }
}
