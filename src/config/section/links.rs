//! `[links]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [links]
//! project = "https://github.com/aidenybai/million"
//! chat = "https://discord.gg/X9yFbcV2rF"
//! docs_repository_base = "https://github.com/aidenybai/million/tree/main/website/"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::util::check_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};

/// External links shown in the navbar and on every doc page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct LinksConfig {
    /// Source repository.
    pub project: String,
    /// Community chat.
    pub chat: String,
    /// Base URL the host appends a page's file path to for "edit this page".
    pub docs_repository_base: String,
}

impl LinksConfig {
    pub const PROJECT: FieldPath = FieldPath::new("links.project");
    pub const CHAT: FieldPath = FieldPath::new("links.chat");
    pub const DOCS_REPOSITORY_BASE: FieldPath = FieldPath::new("links.docs_repository_base");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_http_url(Self::PROJECT, &self.project, diag);
        check_http_url(Self::CHAT, &self.chat, diag);
        check_http_url(Self::DOCS_REPOSITORY_BASE, &self.docs_repository_base, diag);

        if !self.docs_repository_base.is_empty() && !self.docs_repository_base.ends_with('/') {
            diag.warn(
                Self::DOCS_REPOSITORY_BASE,
                "no trailing '/', the last path segment is replaced when joined",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_links_parsed() {
        let config = test_parse_config("");
        assert_eq!(config.links.project, "https://github.com/aidenybai/million");
        assert_eq!(config.links.chat, "https://discord.gg/X9yFbcV2rF");
        assert!(config.links.docs_repository_base.ends_with("/website/"));
    }

    #[test]
    fn test_missing_trailing_slash_warns() {
        let config = test_parse_config(
            "[links]\ndocs_repository_base = \"https://github.com/aidenybai/million/tree/main/website\"",
        );
        let diag = config.diagnostics();
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
