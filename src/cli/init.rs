//! Theme initialization.
//!
//! Writes the bundled default `theme.toml` into a directory.

use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::DEFAULT_THEME;
use crate::log;

/// Default config filename
pub const CONFIG_FILE: &str = "theme.toml";

/// Write the default theme into `dir`, creating the directory if needed.
///
/// An existing `theme.toml` is only replaced with `force`.
pub fn write_theme(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "'{}' already exists.\n\
             Use `docthemer init --force` to overwrite it.",
            path.display()
        );
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    fs::write(&path, DEFAULT_THEME)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use tempfile::TempDir;

    #[test]
    fn test_write_theme() {
        let temp = TempDir::new().unwrap();
        let path = write_theme(temp.path(), false).unwrap();

        assert_eq!(path, temp.path().join("theme.toml"));
        let config = ThemeConfig::load(&path).unwrap();
        assert_eq!(config.site.url, "https://millionjs.org");
    }

    #[test]
    fn test_write_theme_creates_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("website");
        write_theme(&dir, false).unwrap();
        assert!(dir.join("theme.toml").is_file());
    }

    #[test]
    fn test_existing_theme_needs_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("theme.toml");
        fs::write(&path, "# mine").unwrap();

        assert!(write_theme(temp.path(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        write_theme(temp.path(), true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_THEME);
    }
}
