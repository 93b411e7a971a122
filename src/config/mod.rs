//! Theme configuration management for `theme.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # URL checks, config file discovery
//! └── mod.rs         # ThemeConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section              | Purpose                                      |
//! |----------------------|----------------------------------------------|
//! | `[site]`             | Origin, title, description, favicon, twitter |
//! | `[site.og_image]`    | Open Graph share image                       |
//! | `[seo]`              | Bare-title routes                            |
//! | `[links]`            | Project, chat, docs repository base          |
//! | `[footer]`           | Footer copyright line                        |
//! | `[banner]`           | Dismissible banner text and key              |
//! | `[sidebar]`, `[toc]` | Layout toggles                               |
//! | `[theme]`            | Primary hue per color scheme                 |
//! | `[logo]`             | Logo sizing                                  |
//!
//! Loading never yields a partially valid config: every problem is collected
//! into [`ConfigDiagnostics`] and reported at once.

pub mod section;
pub mod types;
pub(crate) mod util;

pub use section::{
    BannerConfig, FooterConfig, LinksConfig, LogoConfig, OgImageConfig, PrimaryHue, SeoConfig,
    SidebarConfig, SiteConfig, ThemeSectionConfig, TocConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::log;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default `theme.toml`, written by `docthemer init`.
pub const DEFAULT_THEME: &str = include_str!("../embed/init/theme.toml");

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing theme.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub seo: SeoConfig,

    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default)]
    pub footer: FooterConfig,

    #[serde(default)]
    pub banner: BannerConfig,

    #[serde(default)]
    pub sidebar: SidebarConfig,

    #[serde(default)]
    pub toc: TocConfig,

    #[serde(default)]
    pub theme: ThemeSectionConfig,

    #[serde(default)]
    pub logo: LogoConfig,
}

impl ThemeConfig {
    /// Load and validate configuration.
    ///
    /// `config` is searched upward from the current directory. Unknown keys
    /// are reported as warnings; any validation error aborts.
    pub fn load(config: &Path) -> Result<Self> {
        let Some(config_path) = find_config_file(config) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'docthemer init' to create one",
                config.display()
            )));
        };

        let mut theme = Self::from_path(&config_path)?;
        theme.config_path = config_path;
        theme.validate()?;
        Ok(theme)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, Path::new("theme.toml"));
        }
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section check and collect the results.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.seo.validate(&mut diag);
        self.links.validate(&mut diag);
        self.footer.validate(&mut diag);
        self.banner.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.logo.validate(&mut diag);

        diag
    }

    /// Validate configuration.
    ///
    /// Prints warnings, returns all collected errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse the bundled default theme with `overrides` merged on top.
///
/// Tables merge key by key; any other value replaces the default.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(overrides: &str) -> ThemeConfig {
    fn merge(base: &mut toml::Table, patch: toml::Table) {
        for (key, value) in patch {
            match (base.get_mut(&key), value) {
                (Some(toml::Value::Table(base_table)), toml::Value::Table(patch_table)) => {
                    merge(base_table, patch_table)
                }
                (_, value) => {
                    base.insert(key, value);
                }
            }
        }
    }

    let mut table: toml::Table = toml::from_str(DEFAULT_THEME).unwrap();
    merge(&mut table, toml::from_str(overrides).unwrap());

    let content = toml::to_string(&table).unwrap();
    let (parsed, ignored) = ThemeConfig::parse_with_ignored(&content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
