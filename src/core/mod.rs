//! Core types - the per-render inputs handed over by the host.

mod front_matter;
mod route;

pub use front_matter::FrontMatter;
pub use route::{DeriveError, RouteContext, route_for_page};
