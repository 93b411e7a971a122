//! `[logo]` section configuration.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// CSS height of the rendered mark.
    pub height: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            height: "1.8rem".into(),
        }
    }
}

impl LogoConfig {
    pub const HEIGHT: FieldPath = FieldPath::new("logo.height");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        // Goes into a style attribute verbatim.
        if self.height.contains(['"', ';', '<', '>']) {
            diag.error_with_hint(
                Self::HEIGHT,
                format!("'{}' is not a CSS length", self.height),
                "e.g. \"1.8rem\" or \"32px\"",
            );
        }
    }
}
