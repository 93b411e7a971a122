//! Single-route commands: `check`, `head`, `seo`, `logo`, `footer`, `dump`.
//!
//! Each command builds its output as a string so it can be tested without
//! capturing stdout; [`print`] writes it.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

use crate::cli::args::HeadArgs;
use crate::core::{FrontMatter, RouteContext};
use crate::logo::LogoVisualState;
use crate::registry::{ConfigRegistry, YearProvider};
use crate::seo::{SeoProps, apply_title_template, render_html};
use crate::{debug, log};

/// Write command output to stdout.
pub fn print(output: &str) {
    println!("{}", output);
}

/// Summarize a loaded registry.
pub fn check(registry: &ConfigRegistry) {
    let config = registry.config();
    log!("check"; "{} is valid", config.config_path.display());
    debug!("check"; "origin {}", registry.defaults().origin);
    debug!("check"; "bare-title routes {:?}", registry.defaults().bare_title_routes);
    if !registry.banner().is_enabled() {
        log!("hint"; "banner is disabled (empty banner.text)");
    }
}

/// Route for the `head` command: path plus front matter from `--page`,
/// with `--description` applied on top.
pub fn route_from_args(args: &HeadArgs) -> Result<RouteContext> {
    let mut front_matter = match &args.page {
        Some(page) => {
            let content = fs::read_to_string(page)
                .with_context(|| format!("Failed to read page '{}'", page.display()))?;
            let (front_matter, _) = FrontMatter::extract(&content)
                .with_context(|| format!("Invalid front matter in '{}'", page.display()))?;
            front_matter
        }
        None => FrontMatter::new(),
    };

    if let Some(description) = &args.description {
        front_matter = front_matter.with("description", description.as_str());
    }

    Ok(RouteContext::with_front_matter(args.path.as_str(), front_matter)?)
}

/// Head tags as HTML lines, or pretty JSON with `--json`.
pub fn head(registry: &ConfigRegistry, args: &HeadArgs) -> Result<String> {
    let route = route_from_args(args)?;
    let tags = registry.head(&route)?;
    debug!("head"; "{} tags for {}", tags.len(), route.path());

    if args.json {
        Ok(serde_json::to_string_pretty(&tags)?)
    } else {
        render_html(&tags)
    }
}

#[derive(Serialize)]
struct SeoOutput {
    #[serde(flatten)]
    props: SeoProps,
    /// Final document title, when a page title was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

/// SEO props for `path` as pretty JSON.
pub fn seo(registry: &ConfigRegistry, path: &str, page_title: Option<&str>) -> Result<String> {
    let route = RouteContext::new(path)?;
    let props = registry.seo_props(&route);
    let title = page_title.map(|t| apply_title_template(&props.title_template, t));
    Ok(serde_json::to_string_pretty(&SeoOutput { props, title })?)
}

pub fn logo(registry: &ConfigRegistry, hovered: bool) -> String {
    let state = if hovered {
        LogoVisualState::Hovered
    } else {
        LogoVisualState::Idle
    };
    registry.logo(state)
}

pub fn footer(registry: &ConfigRegistry, years: &dyn YearProvider) -> Result<String> {
    registry.footer_text(years)
}

/// Registry snapshot as pretty JSON.
pub fn dump(registry: &ConfigRegistry, years: &dyn YearProvider) -> Result<String> {
    Ok(serde_json::to_string_pretty(&registry.snapshot(years)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::registry::FixedYear;
    use tempfile::TempDir;

    fn registry() -> ConfigRegistry {
        ConfigRegistry::new(test_parse_config("")).unwrap()
    }

    fn head_args(path: &str) -> HeadArgs {
        HeadArgs {
            path: path.into(),
            page: None,
            description: None,
            json: false,
        }
    }

    #[test]
    fn test_head_html() {
        let html = head(&registry(), &head_args("/docs/install")).unwrap();
        assert_eq!(html.lines().count(), 11);
        assert!(html.contains(r#"<link rel="canonical" href="https://millionjs.org/docs/install"/>"#));
    }

    #[test]
    fn test_head_reads_page_front_matter() {
        let temp = TempDir::new().unwrap();
        let page = temp.path().join("install.mdx");
        fs::write(&page, "---\ndescription: Install it\n---\n# Install").unwrap();

        let args = HeadArgs {
            page: Some(page),
            json: true,
            ..head_args("/docs/install")
        };
        let json: serde_json::Value = serde_json::from_str(&head(&registry(), &args).unwrap()).unwrap();
        assert_eq!(json[2]["attrs"]["content"], "Install it");
        assert_eq!(json[3]["attrs"]["property"], "og:description");
    }

    #[test]
    fn test_description_flag_wins() {
        let temp = TempDir::new().unwrap();
        let page = temp.path().join("install.mdx");
        fs::write(&page, "---\ndescription: From page\n---\n").unwrap();

        let args = HeadArgs {
            page: Some(page),
            description: Some("From flag".into()),
            ..head_args("/docs/install")
        };
        let route = route_from_args(&args).unwrap();
        assert_eq!(route.front_matter().description(), Some("From flag"));
    }

    #[test]
    fn test_head_relative_path_fails() {
        assert!(head(&registry(), &head_args("docs")).is_err());
    }

    #[test]
    fn test_seo_with_title() {
        let output = seo(&registry(), "/docs/install", Some("Install")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["titleTemplate"], "%s | Million.js");
        assert_eq!(json["title"], "Install | Million.js");
        assert_eq!(json["openGraph"]["images"][0]["width"], 1328);

        let output = seo(&registry(), "/", None).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["titleTemplate"], "Million.js");
        assert!(json.get("title").is_none());
    }

    #[test]
    fn test_logo_and_footer() {
        let registry = registry();
        assert!(logo(&registry, true).contains("data-state=\"hovered\""));
        assert!(logo(&registry, false).contains("data-state=\"idle\""));
        assert!(footer(&registry, &FixedYear(2026)).unwrap().starts_with("<p>MIT 2026 ©"));
    }

    #[test]
    fn test_dump() {
        let json: serde_json::Value =
            serde_json::from_str(&dump(&registry(), &FixedYear(2026)).unwrap()).unwrap();
        assert_eq!(json["links"]["chat"], "https://discord.gg/X9yFbcV2rF");
        assert_eq!(json["toc"]["float"], true);
    }
}
