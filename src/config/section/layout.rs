//! `[sidebar]` and `[toc]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [sidebar]
//! toggle_button = true
//!
//! [toc]
//! float = true
//! extra_content = "<a href=\"https://github.com/aidenybai/million\">Star on GitHub</a>"
//! ```

use serde::{Deserialize, Serialize};

/// Sidebar behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct SidebarConfig {
    /// Show the collapse/expand button.
    pub toggle_button: bool,
}

/// Table-of-contents behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct TocConfig {
    /// Float the TOC beside the content instead of inlining it.
    pub float: bool,
    /// Raw HTML appended below the TOC (trusted input).
    pub extra_content: Option<String>,
}
