//! Batch rendering of a pages directory.
//!
//! # Flow
//!
//! ```text
//! pages/ ─ jwalk ─► (file, route) ─ rayon ─► PageEntry ─ sort ─► manifest.json
//! ```
//!
//! Every page is rendered against the same shared registry. Any page that
//! fails (bad front matter, route that cannot be joined) aborts the build.

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::BuildArgs;
use crate::core::{FrontMatter, RouteContext, route_for_page};
use crate::registry::ConfigRegistry;
use crate::seo::{HeadTag, SeoProps, apply_title_template};
use crate::{debug, log};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// A page file and the route it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFile {
    pub path: PathBuf,
    /// Path relative to the pages directory, `/`-separated.
    pub relative: String,
    pub route: String,
}

/// Rendered output for one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageEntry {
    pub route: String,
    pub file: String,
    /// Final document title, when the page declares one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub seo: SeoProps,
    pub head: Vec<HeadTag>,
}

/// Build manifest, pages sorted by route.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub site: String,
    pub pages: Vec<PageEntry>,
}

/// Run the `build` command.
pub fn build(registry: &ConfigRegistry, args: &BuildArgs) -> Result<()> {
    let manifest = render_pages(registry, &args.pages)?;
    let json = serde_json::to_string_pretty(&manifest)?;

    if let Some(ref output_path) = args.output {
        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        writeln!(file, "{}", json)?;
        log!("build"; "rendered {} pages to {}", manifest.pages.len(), output_path.display());
    } else {
        println!("{}", json);
        log!("build"; "rendered {} pages", manifest.pages.len());
    }

    Ok(())
}

/// Render every page under `pages_dir` in parallel.
pub fn render_pages(registry: &ConfigRegistry, pages_dir: &Path) -> Result<Manifest> {
    if !pages_dir.is_dir() {
        bail!("pages directory '{}' not found", pages_dir.display());
    }

    let files = collect_pages(pages_dir)?;
    debug!("build"; "found {} pages in {}", files.len(), pages_dir.display());

    let mut pages = files
        .par_iter()
        .map(|file| render_page(registry, file))
        .collect::<Result<Vec<_>>>()?;
    pages.sort_by(|a, b| a.route.cmp(&b.route));

    Ok(Manifest {
        site: registry.defaults().origin.to_string(),
        pages,
    })
}

/// Collect page files and their routes, rejecting two files that map to the
/// same route (e.g. `docs.mdx` and `docs/index.mdx`).
pub fn collect_pages(pages_dir: &Path) -> Result<Vec<PageFile>> {
    let mut files: Vec<PageFile> = WalkDir::new(pages_dir)
        .sort(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log!("warning"; "skipping unreadable entry in {}: {}", pages_dir.display(), e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .filter_map(|e| {
            let path = e.path();
            let relative = path.strip_prefix(pages_dir).ok()?.to_path_buf();
            let route = route_for_page(&relative)?;
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            Some(PageFile {
                path,
                relative,
                route,
            })
        })
        .collect();
    files.sort_by(|a, b| a.relative.cmp(&b.relative));

    let mut seen = FxHashSet::default();
    for file in &files {
        if !seen.insert(file.route.as_str()) {
            bail!(
                "route '{}' is served by more than one page (again by '{}')",
                file.route,
                file.relative
            );
        }
    }

    Ok(files)
}

fn render_page(registry: &ConfigRegistry, file: &PageFile) -> Result<PageEntry> {
    let content = fs::read_to_string(&file.path)
        .with_context(|| format!("Failed to read page '{}'", file.path.display()))?;
    let (front_matter, _) = FrontMatter::extract(&content)
        .with_context(|| format!("Invalid front matter in '{}'", file.relative))?;

    let title = front_matter.title().map(str::to_owned);
    let route = RouteContext::with_front_matter(file.route.as_str(), front_matter)?;

    let head = registry
        .head(&route)
        .with_context(|| format!("Failed to render head for '{}'", file.relative))?;
    let seo = registry.seo_props(&route);
    let title = title.map(|t| apply_title_template(&seo.title_template, &t));

    Ok(PageEntry {
        route: file.route.clone(),
        file: file.relative.clone(),
        title,
        seo,
        head,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn registry() -> ConfigRegistry {
        ConfigRegistry::new(test_parse_config("")).unwrap()
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn sample_site() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "index.mdx", "---\ntitle: Home\n---\n# Million");
        write(root, "docs/index.mdx", "# Docs");
        write(
            root,
            "docs/install.mdx",
            "---\ntitle: Install\ndescription: Install Million\n---\n",
        );
        write(root, "blog/virtual-dom.md", "+++\ntitle = \"Virtual DOM\"\n+++\n");
        write(root, "_app.mdx", "ignored");
        write(root, "docs/_meta.json", "{}");
        write(root, ".DS_Store", "");
        temp
    }

    #[test]
    fn test_collect_pages() {
        let temp = sample_site();
        let routes: Vec<_> = collect_pages(temp.path())
            .unwrap()
            .into_iter()
            .map(|p| (p.relative, p.route))
            .collect();

        assert_eq!(
            routes,
            [
                ("blog/virtual-dom.md".to_string(), "/blog/virtual-dom".to_string()),
                ("docs/index.mdx".to_string(), "/docs".to_string()),
                ("docs/install.mdx".to_string(), "/docs/install".to_string()),
                ("index.mdx".to_string(), "/".to_string()),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_dir_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        write(temp.path(), "index.mdx", "# Home");
        write(temp.path(), "locked/page.mdx", "# Locked");
        let locked = temp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = collect_pages(temp.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let routes: Vec<_> = result.unwrap().into_iter().map(|p| p.route).collect();
        assert!(routes.contains(&"/".to_string()));
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "docs.mdx", "");
        write(temp.path(), "docs/index.mdx", "");

        let err = collect_pages(temp.path()).unwrap_err();
        assert!(err.to_string().contains("route '/docs'"));
    }

    #[test]
    fn test_render_pages() {
        let temp = sample_site();
        let manifest = render_pages(&registry(), temp.path()).unwrap();

        assert_eq!(manifest.site, "https://millionjs.org/");
        let routes: Vec<_> = manifest.pages.iter().map(|p| p.route.as_str()).collect();
        assert_eq!(routes, ["/", "/blog/virtual-dom", "/docs", "/docs/install"]);

        let home = &manifest.pages[0];
        assert_eq!(home.title.as_deref(), Some("Million.js"));
        assert_eq!(home.seo.title_template, "Million.js");

        let install = &manifest.pages[3];
        assert_eq!(install.title.as_deref(), Some("Install | Million.js"));
        assert_eq!(install.head[2].attr("content"), Some("Install Million"));
        assert_eq!(
            install.head[0].attr("content"),
            Some("https://millionjs.org/docs/install")
        );

        assert_eq!(manifest.pages[2].title, None);
    }

    #[test]
    fn test_render_is_deterministic() {
        let temp = sample_site();
        let registry = registry();
        let first = serde_json::to_string(&render_pages(&registry, temp.path()).unwrap()).unwrap();
        let second = serde_json::to_string(&render_pages(&registry, temp.path()).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_front_matter_aborts() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "index.mdx", "+++\ntitle = \n+++\n");

        let err = render_pages(&registry(), temp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("index.mdx"));
    }

    #[test]
    fn test_missing_pages_dir() {
        let temp = TempDir::new().unwrap();
        assert!(render_pages(&registry(), &temp.path().join("pages")).is_err());
    }

    #[test]
    fn test_build_writes_manifest() {
        let temp = sample_site();
        let output = temp.path().join("out/manifest.json");
        let args = BuildArgs {
            pages: temp.path().to_path_buf(),
            output: Some(output.clone()),
        };

        build(&registry(), &args).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["pages"].as_array().unwrap().len(), 4);
        assert_eq!(json["pages"][0]["route"], "/");
    }
}
