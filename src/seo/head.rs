//! `<head>` tag assembly.
//!
//! Produces an ordered list of tag descriptors the host emits verbatim.
//! The order is fixed so snapshots stay stable; nothing here reads the
//! clock or any other ambient state.

use std::io::{Cursor, Write};

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};
use serde::{Serialize, Serializer};

use crate::utils::mime;

use super::{ResolvedMetadata, SiteDefaults};

/// `twitter:card` value for every route.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Element kind of a head tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Meta,
    Link,
}

impl TagKind {
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Link => "link",
        }
    }
}

/// One `<meta>` or `<link>` with its attributes in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadTag {
    pub kind: TagKind,
    #[serde(serialize_with = "serialize_attrs")]
    pub attrs: Vec<(&'static str, String)>,
}

impl HeadTag {
    /// `<meta property=.. content=..>` (Open Graph)
    fn property(property: &'static str, content: impl Into<String>) -> Self {
        Self {
            kind: TagKind::Meta,
            attrs: vec![("property", property.into()), ("content", content.into())],
        }
    }

    /// `<meta name=.. content=..>`
    fn named(name: &'static str, content: impl Into<String>) -> Self {
        Self {
            kind: TagKind::Meta,
            attrs: vec![("name", name.into()), ("content", content.into())],
        }
    }

    /// `<link rel=.. href=..>` with optional `type`
    fn link(rel: &'static str, href: impl Into<String>, mime_type: Option<&str>) -> Self {
        let mut attrs = vec![("rel", rel.into()), ("href", href.into())];
        if let Some(mime_type) = mime_type {
            attrs.push(("type", mime_type.into()));
        }
        Self {
            kind: TagKind::Link,
            attrs,
        }
    }

    /// Value of attribute `name`, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn serialize_attrs<S: Serializer>(
    attrs: &[(&'static str, String)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(attrs.iter().map(|(k, v)| (k, v)))
}

/// Assemble the head tags for one render.
pub fn assemble(resolved: &ResolvedMetadata, defaults: &SiteDefaults) -> Vec<HeadTag> {
    let canonical = resolved.canonical_url();
    let description = resolved.description();
    let twitter = defaults.twitter_at();

    vec![
        HeadTag::property("og:url", canonical),
        HeadTag::link("canonical", canonical, None),
        HeadTag::named("description", description),
        HeadTag::property("og:description", description),
        HeadTag::named("twitter:site", twitter.clone()),
        HeadTag::named("twitter:creator", twitter),
        HeadTag::named("twitter:card", TWITTER_CARD),
        HeadTag::named("twitter:image", defaults.og_image.url.as_str()),
        HeadTag::link("shortcut icon", defaults.favicon.as_str(), Some(mime::SVG)),
        HeadTag::link("apple-touch-icon", defaults.favicon.as_str(), Some(mime::SVG)),
        HeadTag::named("apple-mobile-web-app-title", defaults.title.as_str()),
    ]
}

/// Serialize tags as HTML, one element per line. Attribute values are
/// escaped.
pub fn render_html(tags: &[HeadTag]) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            writer.get_mut().write_all(b"\n")?;
        }
        let mut elem = BytesStart::new(tag.kind.tag_name());
        for (key, value) in &tag.attrs {
            elem.push_attribute((*key, value.as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
    }

    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::core::{FrontMatter, RouteContext};
    use crate::seo::resolve;

    fn defaults() -> SiteDefaults {
        SiteDefaults::from_config(&test_parse_config("")).unwrap()
    }

    fn head_for(path: &str, fm: FrontMatter) -> Vec<HeadTag> {
        let defaults = defaults();
        let route = RouteContext::with_front_matter(path, fm).unwrap();
        assemble(&resolve(&route, &defaults).unwrap(), &defaults)
    }

    #[test]
    fn test_tag_order_and_values() {
        let tags = head_for("/docs/install", FrontMatter::new().with("description", "Custom"));
        let summary: Vec<_> = tags
            .iter()
            .map(|t| {
                let key = t.attr("property").or(t.attr("name")).or(t.attr("rel"));
                let value = t.attr("content").or(t.attr("href"));
                (t.kind, key.unwrap(), value.unwrap())
            })
            .collect();

        assert_eq!(
            summary,
            [
                (TagKind::Meta, "og:url", "https://millionjs.org/docs/install"),
                (TagKind::Link, "canonical", "https://millionjs.org/docs/install"),
                (TagKind::Meta, "description", "Custom"),
                (TagKind::Meta, "og:description", "Custom"),
                (TagKind::Meta, "twitter:site", "@aidenybai"),
                (TagKind::Meta, "twitter:creator", "@aidenybai"),
                (TagKind::Meta, "twitter:card", "summary_large_image"),
                (TagKind::Meta, "twitter:image", "https://millionjs.org/banner.png"),
                (TagKind::Link, "shortcut icon", "/favicon.svg"),
                (TagKind::Link, "apple-touch-icon", "/favicon.svg"),
                (TagKind::Meta, "apple-mobile-web-app-title", "Million.js"),
            ]
        );
    }

    #[test]
    fn test_icons_are_svg() {
        let tags = head_for("/", FrontMatter::new());
        let icons: Vec<_> = tags.iter().filter(|t| t.kind == TagKind::Link).skip(1).collect();
        assert_eq!(icons.len(), 2);
        assert!(icons.iter().all(|t| t.attr("type") == Some("image/svg+xml")));
        assert_eq!(tags[1].attr("type"), None);
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let defaults = defaults();
        let route = RouteContext::new("/docs").unwrap();
        let resolved = resolve(&route, &defaults).unwrap();

        let first = assemble(&resolved, &defaults);
        for _ in 0..16 {
            assert_eq!(assemble(&resolved, &defaults), first);
        }
        assert_eq!(
            render_html(&first).unwrap(),
            render_html(&assemble(&resolved, &defaults)).unwrap()
        );
    }

    #[test]
    fn test_render_html_escapes() {
        let tags = head_for("/docs/install", FrontMatter::new());
        let html = render_html(&tags).unwrap();
        let lines: Vec<_> = html.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(
            lines[0],
            r#"<meta property="og:url" content="https://millionjs.org/docs/install"/>"#
        );
        assert!(lines[2].contains("&lt;4kb virtual DOM"));
        assert_eq!(
            lines[8],
            r#"<link rel="shortcut icon" href="/favicon.svg" type="image/svg+xml"/>"#
        );
    }

    #[test]
    fn test_json_shape() {
        let tags = head_for("/", FrontMatter::new());
        let json = serde_json::to_value(&tags[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "link",
                "attrs": { "rel": "canonical", "href": "https://millionjs.org/" }
            })
        );
    }
}
