//! Route-sensitive SEO metadata.
//!
//! ```text
//! RouteContext ─┐
//!               ├─ resolve() ─► ResolvedMetadata ─ assemble() ─► Vec<HeadTag>
//! SiteDefaults ─┘                                                 │
//!                                                   render_html() ◄┘
//! ```
//!
//! `seo_props()` is the path-only companion handed to the host's SEO
//! component (title template plus Open Graph images).

mod defaults;
pub mod head;
pub mod og;
pub mod resolve;

pub use defaults::SiteDefaults;
pub use head::{HeadTag, TagKind, assemble, render_html};
pub use og::{OgImage, OpenGraph, SeoProps, apply_title_template, seo_props};
pub use resolve::{ResolvedMetadata, TITLE_PLACEHOLDER, canonical_url, resolve, title_template};
