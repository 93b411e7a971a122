//! The route being rendered.

use std::path::{Component, Path};

use serde::Serialize;
use thiserror::Error;

use super::FrontMatter;

/// Per-render derivation failures.
///
/// These mean the router or content broke its contract (e.g. handed over a
/// relative path). They are surfaced, never replaced by a default URL, since
/// a silent fallback would ship wrong SEO metadata.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeriveError {
    #[error("route path `{0}` must start with '/'")]
    RelativePath(String),

    #[error("cannot join route path `{path}` onto `{origin}`: {reason}")]
    Join {
        origin: String,
        path: String,
        reason: String,
    },

    #[error("route path `{path}` resolves outside of `{origin}` (got `{resolved}`)")]
    ForeignOrigin {
        origin: String,
        path: String,
        resolved: String,
    },
}

/// Current request path and the active page's front matter.
///
/// Created fresh by the host for every render; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteContext {
    path: String,
    front_matter: FrontMatter,
}

impl RouteContext {
    /// Route without front matter.
    pub fn new(path: impl Into<String>) -> Result<Self, DeriveError> {
        Self::with_front_matter(path, FrontMatter::default())
    }

    pub fn with_front_matter(
        path: impl Into<String>,
        front_matter: FrontMatter,
    ) -> Result<Self, DeriveError> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(DeriveError::RelativePath(path));
        }
        Ok(Self { path, front_matter })
    }

    /// Request path as the router reported it, always starting with `/`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn front_matter(&self) -> &FrontMatter {
        &self.front_matter
    }
}

/// Map a page file (relative to the pages directory) to its route.
///
/// Follows the pages-directory convention:
/// - `index.mdx` -> `/`, `docs/index.md` -> `/docs`
/// - `docs/install.mdx` -> `/docs/install`
/// - only `.md`/`.mdx` files are pages
/// - any `_`-prefixed segment (`_app.mdx`, `_drafts/`), dynamic
///   segments (`[slug].mdx`) and names containing `?` or `#` are skipped
pub fn route_for_page(relative: &Path) -> Option<String> {
    let ext = relative.extension()?.to_str()?;
    if !matches!(ext, "md" | "mdx") {
        return None;
    }

    let stem = relative.with_extension("");
    let mut segments = Vec::new();
    for component in stem.components() {
        let Component::Normal(segment) = component else {
            return None;
        };
        let segment = segment.to_str()?;
        if segment.starts_with('_') || segment.starts_with('[') {
            return None;
        }
        // Would be cut off as query or fragment once joined onto the origin.
        if segment.contains(['?', '#']) {
            return None;
        }
        segments.push(segment);
    }

    if segments.last() == Some(&"index") {
        segments.pop();
    }

    Some(format!("/{}", segments.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_leading_slash() {
        assert!(RouteContext::new("/docs").is_ok());
        assert_eq!(
            RouteContext::new("docs"),
            Err(DeriveError::RelativePath("docs".into()))
        );
        assert!(RouteContext::new("").is_err());
    }

    #[test]
    fn test_accessors() {
        let fm = FrontMatter::new().with("description", "Custom");
        let route = RouteContext::with_front_matter("/", fm.clone()).unwrap();
        assert_eq!(route.path(), "/");
        assert_eq!(route.front_matter(), &fm);
    }

    #[test]
    fn test_route_for_page() {
        let cases = [
            ("index.mdx", Some("/")),
            ("docs/index.mdx", Some("/docs")),
            ("docs/install.mdx", Some("/docs/install")),
            ("blog/v2.md", Some("/blog/v2")),
            ("docs/_meta.json", None),
            ("_app.mdx", None),
            ("_drafts/post.mdx", None),
            ("blog/[slug].mdx", None),
            ("favicon.svg", None),
            ("docs/c#.mdx", None),
            ("docs/what?.md", None),
            ("lang#/intro.mdx", None),
        ];
        for (file, expected) in cases {
            assert_eq!(
                route_for_page(Path::new(file)).as_deref(),
                expected,
                "page file {file}"
            );
        }
    }

    #[test]
    fn test_route_for_nested_index() {
        assert_eq!(
            route_for_page(Path::new("docs/api/index.md")).as_deref(),
            Some("/docs/api")
        );
    }
}
