//! `[site.og_image]` Open Graph share image.

use serde::{Deserialize, Serialize};

use crate::config::util::check_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::mime;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OgImageConfig {
    /// Absolute image URL. Doubles as the `twitter:image` banner.
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
    /// MIME type, written as `type` in TOML.
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl OgImageConfig {
    pub const URL: FieldPath = FieldPath::new("site.og_image.url");
    pub const WIDTH: FieldPath = FieldPath::new("site.og_image.width");
    pub const HEIGHT: FieldPath = FieldPath::new("site.og_image.height");
    pub const MIME_TYPE: FieldPath = FieldPath::new("site.og_image.type");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_http_url(Self::URL, &self.url, diag);
        if self.width == 0 {
            diag.error(Self::WIDTH, "must be greater than 0");
        }
        if self.height == 0 {
            diag.error(Self::HEIGHT, "must be greater than 0");
        }
        if !self.mime_type.starts_with("image/") {
            diag.error_with_hint(
                Self::MIME_TYPE,
                format!("'{}' is not an image MIME type", self.mime_type),
                "e.g. \"image/png\"",
            );
        } else if let Some(guessed) = mime::for_image(&self.url)
            && guessed != self.mime_type
        {
            diag.warn(
                Self::MIME_TYPE,
                format!("declared '{}' but the url looks like '{}'", self.mime_type, guessed),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_og_image_parsed() {
        let config = test_parse_config("");
        let image = &config.site.og_image;
        assert_eq!(image.url, "https://millionjs.org/banner.png");
        assert_eq!((image.width, image.height), (1328, 345));
        assert_eq!(image.alt, "Million.js banner");
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn test_zero_size_and_bad_type() {
        let mut config = test_parse_config("");
        config.site.og_image.width = 0;
        config.site.og_image.mime_type = "text/plain".into();
        let diag = config.diagnostics();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"site.og_image.width"));
        assert!(fields.contains(&"site.og_image.type"));
        assert!(!fields.contains(&"site.og_image.height"));
    }

    #[test]
    fn test_type_mismatch_warns() {
        let mut config = test_parse_config("");
        config.site.og_image.mime_type = "image/jpeg".into();
        let diag = config.diagnostics();
        assert!(!diag.has_errors());
        assert!(diag.warnings().iter().any(|(f, _)| f.as_str() == "site.og_image.type"));
    }
}
