//! Sitemap generation.
//!
//! Scans a built site for HTML pages and writes a sitemap listing them for
//! search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::{SiteConfig, SiteSection},
    debug, log,
    utils::{
        date::DateTimeUtc,
        path::{BasePath, get_path_with_base},
    },
};
use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Pages never listed.
const EXCLUDED_PAGES: &[&str] = &["404.html"];

/// Build the sitemap if the integration is enabled.
///
/// Returns the written file, or `None` when the integration is off.
pub fn build_sitemap(config: &SiteConfig) -> Result<Option<PathBuf>> {
    if !config.integrations.sitemap {
        log!("sitemap"; "integration disabled, skipping");
        return Ok(None);
    }

    let Some(origin) = config.origin() else {
        bail!("{} is required to build a sitemap", SiteSection::URL.as_str());
    };

    let output = config.output_dir();
    if !output.is_dir() {
        bail!(
            "output directory `{}` not found, build the site first",
            output.display()
        );
    }

    let sitemap = Sitemap::scan(output, &origin, config.base())?;
    let path = config.sitemap_path();
    let count = sitemap.urls.len();
    sitemap.write(&path)?;

    log!("sitemap"; "{} ({} urls)", path.display(), count);
    Ok(Some(path))
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

#[derive(Debug)]
struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    /// Collect every HTML page under `output`, sorted by URL.
    fn scan(output: &Path, origin: &str, base: &BasePath) -> Result<Self> {
        let origin = origin.trim_end_matches('/');

        let mut urls: Vec<UrlEntry> = WalkDir::new(output)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let path = e.path();
                let relative = path.strip_prefix(output).ok()?;
                let route = route_for_file(relative)?;
                let lastmod = fs::metadata(&path)
                    .and_then(|m| m.modified())
                    .ok()
                    .map(|time| DateTimeUtc::from_system_time(time).to_ymd());
                Some(UrlEntry {
                    loc: format!("{origin}{}", get_path_with_base(base, &route)),
                    lastmod,
                })
            })
            .collect();

        urls.sort_by(|a, b| a.loc.cmp(&b.loc));
        debug!("sitemap"; "found {} pages under {}", urls.len(), output.display());
        Ok(Self { urls })
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 96);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.into_xml())
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))
    }
}

/// Site route for a built file, relative to the output directory.
///
/// ```text
/// index.html            -> ""
/// posts/hello/index.html -> "posts/hello/"
/// about.html            -> "about.html"
/// 404.html, style.css   -> None
/// ```
pub fn route_for_file(relative: &Path) -> Option<String> {
    let name = relative.file_name()?.to_str()?;
    if !name.ends_with(".html") || EXCLUDED_PAGES.contains(&name) {
        return None;
    }

    let route = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?
        .join("/");

    Some(match route.strip_suffix("index.html") {
        Some(dir) if dir.is_empty() || dir.ends_with('/') => dir.to_string(),
        _ => route,
    })
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
