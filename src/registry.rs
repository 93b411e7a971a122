//! Theme registry handed to the documentation host.
//!
//! Built once at startup from a validated [`ThemeConfig`]; afterwards it is
//! read-only and shared freely between render threads.
//!
//! ```text
//! theme.toml ─► ThemeConfig ─► ConfigRegistry::new ─┬─► head(route)
//!                                                   ├─► seo_props(route)
//!                                                   ├─► logo(state)
//!                                                   └─► footer_text(year)
//! ```

use std::io::Cursor;
use std::sync::{Arc, OnceLock};

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde::Serialize;

use crate::config::{
    BannerConfig, ConfigError, FooterConfig, LinksConfig, PrimaryHue, SidebarConfig, ThemeConfig,
    TocConfig,
};
use crate::core::{DeriveError, RouteContext};
use crate::logo::{LogoVisualState, LogoWidget};
use crate::seo::{self, HeadTag, SeoProps, SiteDefaults};
use crate::utils::date;

// ============================================================================
// year provider
// ============================================================================

/// Source of the current calendar year for the footer.
pub trait YearProvider {
    fn current_year(&self) -> i32;
}

/// Wall clock, UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemYear;

impl YearProvider for SystemYear {
    fn current_year(&self) -> i32 {
        date::current_year()
    }
}

/// Constant year, for snapshots and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl YearProvider for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

// ============================================================================
// registry
// ============================================================================

/// Immutable theme registry.
#[derive(Debug, Clone)]
pub struct ConfigRegistry {
    config: ThemeConfig,
    defaults: SiteDefaults,
    logo: LogoWidget,
}

impl ConfigRegistry {
    /// Validate `config` and build the registry.
    ///
    /// All errors are collected before failing, so one run reports every
    /// problem in `theme.toml`. Warnings are left to [`ThemeConfig::load`].
    pub fn new(config: ThemeConfig) -> Result<Self, ConfigError> {
        config
            .diagnostics()
            .into_result()
            .map_err(ConfigError::Diagnostics)?;
        let defaults = SiteDefaults::from_config(&config)?;
        let logo = LogoWidget::new(&config.logo);
        Ok(Self {
            config,
            defaults,
            logo,
        })
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn defaults(&self) -> &SiteDefaults {
        &self.defaults
    }

    pub fn links(&self) -> &LinksConfig {
        &self.config.links
    }

    pub fn docs_repository_base(&self) -> &str {
        &self.config.links.docs_repository_base
    }

    pub fn footer(&self) -> &FooterConfig {
        &self.config.footer
    }

    pub fn banner(&self) -> &BannerConfig {
        &self.config.banner
    }

    pub fn sidebar(&self) -> SidebarConfig {
        self.config.sidebar
    }

    pub fn toc(&self) -> &TocConfig {
        &self.config.toc
    }

    pub fn primary_hue(&self) -> PrimaryHue {
        self.config.theme.hue
    }

    // ------------------------------------------------------------------------
    // per-render callbacks
    // ------------------------------------------------------------------------

    /// Head tags for `route`.
    pub fn head(&self, route: &RouteContext) -> Result<Vec<HeadTag>, DeriveError> {
        let resolved = seo::resolve(route, &self.defaults)?;
        Ok(seo::assemble(&resolved, &self.defaults))
    }

    /// Title template and Open Graph images for `route`.
    pub fn seo_props(&self, route: &RouteContext) -> SeoProps {
        seo::seo_props(route, &self.defaults)
    }

    /// Logo markup in `state`.
    pub fn logo(&self, state: LogoVisualState) -> String {
        self.logo.render(state)
    }

    /// Footer line: `<p>MIT 2026 © <a ..>Aiden Bai</a>.</p>`.
    ///
    /// The year is read from `years` on every call.
    pub fn footer_text(&self, years: &dyn YearProvider) -> Result<String> {
        let footer = &self.config.footer;
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        writer.write_event(Event::Start(BytesStart::new("p")))?;
        let lead = format!("{} {} © ", footer.license, years.current_year());
        writer.write_event(Event::Text(BytesText::new(&lead)))?;

        match &footer.author_url {
            Some(url) => {
                let mut anchor = BytesStart::new("a");
                anchor.push_attribute(("target", "_blank"));
                anchor.push_attribute(("href", url.as_str()));
                writer.write_event(Event::Start(anchor))?;
                writer.write_event(Event::Text(BytesText::new(&footer.author)))?;
                writer.write_event(Event::End(BytesEnd::new("a")))?;
            }
            None => writer.write_event(Event::Text(BytesText::new(&footer.author)))?,
        }

        writer.write_event(Event::Text(BytesText::new(".")))?;
        writer.write_event(Event::End(BytesEnd::new("p")))?;

        Ok(String::from_utf8(writer.into_inner().into_inner())?)
    }

    /// Banner markup, or `None` when the banner is disabled.
    ///
    /// The host keys dismissal on `data-key`.
    pub fn banner_html(&self) -> Result<Option<String>> {
        let banner = &self.config.banner;
        if !banner.is_enabled() {
            return Ok(None);
        }

        let mut writer = Writer::new(Cursor::new(Vec::new()));
        let mut root = BytesStart::new("div");
        root.push_attribute(("class", "docthemer-banner"));
        root.push_attribute(("data-key", banner.key.as_str()));
        writer.write_event(Event::Start(root))?;

        match &banner.link {
            Some(link) => {
                let mut anchor = BytesStart::new("a");
                anchor.push_attribute(("href", link.as_str()));
                anchor.push_attribute(("target", "_blank"));
                writer.write_event(Event::Start(anchor))?;
                writer.write_event(Event::Text(BytesText::new(&banner.text)))?;
                writer.write_event(Event::End(BytesEnd::new("a")))?;
            }
            None => writer.write_event(Event::Text(BytesText::new(&banner.text)))?,
        }

        writer.write_event(Event::End(BytesEnd::new("div")))?;

        Ok(Some(String::from_utf8(writer.into_inner().into_inner())?))
    }

    /// Everything the host reads once at startup.
    pub fn snapshot(&self, years: &dyn YearProvider) -> Result<RegistrySnapshot<'_>> {
        Ok(RegistrySnapshot {
            site_title: &self.defaults.title,
            origin: self.defaults.origin.as_str(),
            links: &self.config.links,
            footer: self.footer_text(years)?,
            banner: &self.config.banner,
            sidebar: self.config.sidebar,
            toc: &self.config.toc,
            primary_hue: self.config.theme.hue,
            logo_height: &self.config.logo.height,
        })
    }
}

/// Serializable view of the static registry fields.
///
/// Keys are camelCase at every level, nested sections included.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot<'a> {
    pub site_title: &'a str,
    pub origin: &'a str,
    pub links: &'a LinksConfig,
    /// Footer HTML for the year the snapshot was taken.
    pub footer: String,
    pub banner: &'a BannerConfig,
    pub sidebar: SidebarConfig,
    pub toc: &'a TocConfig,
    pub primary_hue: PrimaryHue,
    pub logo_height: &'a str,
}

// ============================================================================
// global handle
// ============================================================================

static REGISTRY: OnceLock<Arc<ConfigRegistry>> = OnceLock::new();

/// Install the process-wide registry. Fails if one is already installed.
pub fn install_registry(registry: ConfigRegistry) -> Result<Arc<ConfigRegistry>, ConfigError> {
    let registry = Arc::new(registry);
    REGISTRY
        .set(Arc::clone(&registry))
        .map_err(|_| ConfigError::Validation("theme registry is already installed".into()))?;
    Ok(registry)
}

/// The installed registry, if any.
pub fn registry() -> Option<Arc<ConfigRegistry>> {
    REGISTRY.get().cloned()
}
