//! `[footer]` section configuration.
//!
//! The footer line is `<license> <year> © <author>.`, where the year is read
//! from the clock at render time.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! license = "MIT"
//! author = "Aiden Bai"
//! author_url = "https://aidenybai.com"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::util::check_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub license: String,
    pub author: String,
    /// Optional link around the author name, opened in a new tab.
    pub author_url: Option<String>,
}

impl FooterConfig {
    pub const LICENSE: FieldPath = FieldPath::new("footer.license");
    pub const AUTHOR: FieldPath = FieldPath::new("footer.author");
    pub const AUTHOR_URL: FieldPath = FieldPath::new("footer.author_url");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        diag.require(Self::LICENSE, &self.license);
        diag.require(Self::AUTHOR, &self.author);
        if let Some(url) = &self.author_url {
            check_http_url(Self::AUTHOR_URL, url, diag);
        }
    }
}
