//! Per-page front matter.
//!
//! Pages carry overrides in a YAML (`---`) or TOML (`+++`) block at the
//! top of the file. Either is read into the same JSON map.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Front matter of the active page: string keys to JSON values.
///
/// Key order follows the source block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter(Map<String, Value>);

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for hosts and tests.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of `key`, if present, a string, and not empty.
    ///
    /// Whitespace-only strings count as set and are returned as-is.
    pub fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Page description override.
    pub fn description(&self) -> Option<&str> {
        self.non_empty_str("description")
    }

    /// Page title, substituted into the title template by the host.
    pub fn title(&self) -> Option<&str> {
        self.non_empty_str("title")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Split `content` into front matter and body.
    ///
    /// Content without a front matter block yields an empty map and the
    /// whole content as body. Invalid YAML or TOML is an error.
    pub fn extract(content: &str) -> Result<(Self, &str)> {
        match detect_block(content) {
            Some((block, body, true)) => Ok((parse_toml(block)?, body)),
            Some((block, body, false)) => Ok((parse_yaml(block)?, body)),
            None => Ok((Self::default(), content)),
        }
    }
}

impl From<Map<String, Value>> for FrontMatter {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Detect and extract a front matter block.
/// Returns `(block, body, is_toml)` if found.
fn detect_block(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if let Some(rest) = trimmed.strip_prefix(fence)
            && let Some(end) = rest.find(&format!("\n{fence}"))
        {
            let block = rest[..end].trim();
            let body = rest[end + 1 + fence.len()..].trim_start_matches(['\r', '\n']);
            return Some((block, body, is_toml));
        }
    }

    None
}

/// Parse TOML front matter.
fn parse_toml(block: &str) -> Result<FrontMatter> {
    let table: toml::Table =
        toml::from_str(block).map_err(|e| anyhow!("Invalid TOML front matter: {}", e))?;
    match serde_json::to_value(table)? {
        Value::Object(map) => Ok(FrontMatter(map)),
        _ => Ok(FrontMatter::default()),
    }
}

/// Parse YAML front matter.
///
/// The block must be a mapping with string keys. Block scalars (`>-`, `|`)
/// are folded by the YAML parser.
fn parse_yaml(block: &str) -> Result<FrontMatter> {
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    let map: Map<String, Value> =
        serde_yaml::from_str(block).map_err(|e| anyhow!("Invalid YAML front matter: {}", e))?;
    Ok(FrontMatter(map))
}
