//! docthemer - theme registry for documentation sites.
//!
//! Turns a `theme.toml` into everything a docs host needs besides content:
//! per-route `<head>` tags (canonical URL, description, social cards,
//! icons), title templates, the hover-animated logo, the banner, and the
//! footer line.
//!
//! # Module Structure
//!
//! - [`config`]: `theme.toml` parsing and validation
//! - [`core`]: per-render inputs (route, front matter)
//! - [`seo`]: metadata derivation and head assembly
//! - [`logo`]: logo state machine and markup
//! - [`registry`]: the immutable registry shared across renders
//! - [`cli`]: command-line front end

pub mod cli;
pub mod config;
pub mod core;
pub mod embed;
pub mod logger;
pub mod logo;
pub mod registry;
pub mod seo;
pub mod utils;

pub use self::config::ThemeConfig;
pub use self::core::{DeriveError, FrontMatter, RouteContext};
pub use self::logo::{LogoVisualState, LogoWidget, PointerEvent};
pub use self::registry::{ConfigRegistry, FixedYear, SystemYear, YearProvider};
