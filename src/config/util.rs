//! Configuration utility functions.

use std::path::{Path, PathBuf};

use url::Url;

use super::{ConfigDiagnostics, FieldPath};

/// Parse an absolute `http`/`https` URL with a host.
///
/// Returns the reason as an `Err` string so callers can attach it to a
/// diagnostic.
///
/// # Examples
/// ```ignore
/// parse_http_url("https://millionjs.org")      -> Ok(..)
/// parse_http_url("ftp://millionjs.org")        -> Err("scheme 'ftp' not supported ...")
/// parse_http_url("millionjs.org")              -> Err("invalid URL: ...")
/// ```
pub fn parse_http_url(url_str: &str) -> Result<Url, String> {
    let parsed = Url::parse(url_str).map_err(|e| format!("invalid URL: {e}"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        ));
    }
    if parsed.host_str().is_none() {
        return Err("URL must have a valid host".into());
    }
    Ok(parsed)
}

/// Report `field` unless `value` is an absolute http(s) URL.
pub fn check_http_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    if value.trim().is_empty() {
        diag.error(field, "required field is missing or empty");
        return;
    }
    if let Err(reason) = parse_http_url(value) {
        diag.error_with_hint(field, reason, "use format like https://example.com");
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/pages/docs/  ← cwd
/// /home/user/site/theme.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from an explicit directory.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
