//! Configuration section definitions.
//!
//! Each module corresponds to a section in `theme.toml`:
//!
//! | Module   | TOML Section              | Purpose                              |
//! |----------|---------------------------|--------------------------------------|
//! | `site`   | `[site]`                  | Origin, title, description, assets   |
//! | `seo`    | `[seo]`                   | Route-sensitive title rules          |
//! | `links`  | `[links]`                 | Project, chat, docs repository       |
//! | `footer` | `[footer]`                | Footer copyright line                |
//! | `banner` | `[banner]`                | Dismissible announcement             |
//! | `layout` | `[sidebar]`, `[toc]`      | Sidebar/TOC toggles                  |
//! | `theme`  | `[theme]`                 | Primary color hue                    |
//! | `logo`   | `[logo]`                  | Logo sizing                          |

mod banner;
mod footer;
mod layout;
mod links;
mod logo;
mod seo;
pub mod site;
pub mod theme;

pub use banner::BannerConfig;
pub use footer::FooterConfig;
pub use layout::{SidebarConfig, TocConfig};
pub use links::LinksConfig;
pub use logo::LogoConfig;
pub use seo::SeoConfig;
pub use site::{OgImageConfig, SiteConfig};
pub use theme::{PrimaryHue, ThemeSectionConfig};
