//! Route metadata derivation.
//!
//! Pure functions of `(RouteContext, SiteDefaults)`: no caching, no shared
//! state, safe to call from any number of render threads at once.

use serde::Serialize;
use url::Url;

use crate::core::{DeriveError, RouteContext};

use super::SiteDefaults;

/// Placeholder the host replaces with the page's own title.
pub const TITLE_PLACEHOLDER: &str = "%s";

/// Metadata derived for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMetadata {
    canonical_url: String,
    description: String,
    title_template: String,
}

impl ResolvedMetadata {
    /// Absolute URL on the site origin, without query or fragment.
    pub fn canonical_url(&self) -> &str {
        &self.canonical_url
    }

    /// Front matter description, or the site default.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Bare site title, or `"%s | <site title>"`.
    pub fn title_template(&self) -> &str {
        &self.title_template
    }
}

/// Derive the metadata for `route`.
pub fn resolve(
    route: &RouteContext,
    defaults: &SiteDefaults,
) -> Result<ResolvedMetadata, DeriveError> {
    let canonical = canonical_url(&defaults.origin, route.path())?;

    let description = route
        .front_matter()
        .description()
        .unwrap_or(&defaults.description)
        .to_owned();

    Ok(ResolvedMetadata {
        canonical_url: canonical.into(),
        description,
        title_template: title_template(route.path(), defaults),
    })
}

/// Join `path` onto `origin`, dropping any query string and fragment.
///
/// Fails if the join fails or lands on a different origin (e.g. a
/// protocol-relative `//host/x` path).
pub fn canonical_url(origin: &Url, path: &str) -> Result<Url, DeriveError> {
    if !path.starts_with('/') {
        return Err(DeriveError::RelativePath(path.to_owned()));
    }

    let mut url = origin.join(path).map_err(|e| DeriveError::Join {
        origin: origin.to_string(),
        path: path.to_owned(),
        reason: e.to_string(),
    })?;

    if url.origin() != origin.origin() {
        return Err(DeriveError::ForeignOrigin {
            origin: origin.to_string(),
            path: path.to_owned(),
            resolved: url.to_string(),
        });
    }

    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Pick the title template for `path`.
///
/// Exact string match against the bare-title routes; every other path,
/// including `/docs/` and locale-prefixed variants, gets the suffix form.
pub fn title_template(path: &str, defaults: &SiteDefaults) -> String {
    if defaults.bare_title_routes.iter().any(|route| route == path) {
        defaults.title.clone()
    } else {
        format!("{TITLE_PLACEHOLDER} | {}", defaults.title)
    }
}
