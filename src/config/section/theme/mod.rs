//! `[theme]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! hue = { light = 270, dark = 204 }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Primary color hue per color scheme, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryHue {
    pub light: u16,
    pub dark: u16,
}

impl Default for PrimaryHue {
    fn default() -> Self {
        // Framework default (sky blue) in both schemes.
        Self {
            light: 212,
            dark: 212,
        }
    }
}

/// Theme section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    pub hue: PrimaryHue,
}

impl ThemeSectionConfig {
    pub const HUE_LIGHT: FieldPath = FieldPath::new("theme.hue.light");
    pub const HUE_DARK: FieldPath = FieldPath::new("theme.hue.dark");

    /// Hues must lie in `[0, 360)`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::HUE_LIGHT, self.hue.light),
            (Self::HUE_DARK, self.hue.dark),
        ] {
            if value >= 360 {
                diag.error_with_hint(
                    field,
                    format!("hue {value} is out of range"),
                    format!("use a degree in 0..360, e.g. {}", value % 360),
                );
            }
        }
    }
}
