//! Conversion of exported HTML posts into front-matter posts.
//!
//! An exported post looks like
//!
//! ```html
//! <hr>
//! <h2>title: Continuous piecewise functions
//! date: 2020-06-20</h2>
//! <p><img src="https://old.host/blog/assets/plot.png"></p>
//! ```
//!
//! and becomes
//!
//! ```text
//! ---
//! title: Continuous piecewise functions
//! date: 2020-06-20
//! ---
//! <p><img src="/blog/assets/plot.png"></p>
//! ```

use crate::{
    log,
    logger::ProgressLine,
    utils::{html::unescape, path::BasePath},
};
use anyhow::{Context, Result, bail};
use lol_html::{RewriteStrSettings, element, errors::RewritingError, rewrite_str};
use rayon::prelude::*;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to parse HTML")]
    Parse,

    #[error("no <h2> header found")]
    MissingHeader,

    #[error("header has no preceding <hr> sibling")]
    MissingSeparator,

    #[error("failed to rewrite HTML")]
    Rewrite(#[from] RewritingError),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("`{0}` has no file name")]
    NoFileName(PathBuf),
}

// ============================================================================
// Single post
// ============================================================================

/// Make image sources base-relative.
///
/// Everything before the first occurrence of the base path is dropped.
/// Sources that do not contain it are left alone, as is everything when the
/// site is served from the root.
pub fn rewrite_image_sources<'a>(
    html: &'a str,
    base: &BasePath,
) -> Result<Cow<'a, str>, ImportError> {
    let needle = base.as_str();
    if needle.is_empty() {
        return Ok(Cow::Borrowed(html));
    }

    let rewritten = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!("img[src]", |el| {
                if let Some(src) = el.get_attribute("src")
                    && let Some(start) = src.find(needle)
                    && start > 0
                {
                    el.set_attribute("src", &src[start..])?;
                }
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    )?;
    Ok(Cow::Owned(rewritten))
}

/// The first `<h2>` of a post and the `<hr>` that separates it.
struct HeaderLocation {
    text: String,
    /// Document-order index of the separator among all `<hr>` elements.
    separator: usize,
}

/// Find the first `<h2>` in document order and the nearest `<hr>` before it
/// among its siblings. Elements may sit between the two.
fn locate_header(html: &str) -> Result<HeaderLocation, ImportError> {
    let dom = tl::parse(html, tl::ParserOptions::default()).map_err(|_| ImportError::Parse)?;
    let mut hr_seen = 0;
    find_header(dom.children().iter(), dom.parser(), &mut hr_seen)
        .unwrap_or(Err(ImportError::MissingHeader))
}

fn find_header<'h>(
    siblings: impl Iterator<Item = &'h tl::NodeHandle>,
    parser: &tl::Parser<'_>,
    hr_seen: &mut usize,
) -> Option<Result<HeaderLocation, ImportError>> {
    let mut separator = None;

    for handle in siblings {
        let Some(tag) = handle.get(parser).and_then(tl::Node::as_tag) else {
            continue;
        };
        let name = tag.name().as_utf8_str();

        if name.eq_ignore_ascii_case("h2") {
            let text = unescape(&tag.inner_text(parser)).trim().to_string();
            return Some(
                separator
                    .map(|separator| HeaderLocation { text, separator })
                    .ok_or(ImportError::MissingSeparator),
            );
        }

        if name.eq_ignore_ascii_case("hr") {
            separator = Some(*hr_seen);
            *hr_seen += 1;
            continue;
        }

        if let Some(found) = find_header(tag.children().top().iter(), parser, hr_seen) {
            return Some(found);
        }
    }

    None
}

/// Remove the `<hr>` + `<h2>` header block.
///
/// Returns the header text (tags stripped, entities decoded, trimmed) and the
/// remaining document.
pub fn extract_header(html: &str) -> Result<(String, String), ImportError> {
    let header = locate_header(html)?;
    let separator = header.separator;
    let mut hr_index = 0usize;
    let mut header_removed = false;

    let rest = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("hr", move |el| {
                    if hr_index == separator {
                        el.remove();
                    }
                    hr_index += 1;
                    Ok(())
                }),
                element!("h2", move |el| {
                    if !header_removed {
                        el.remove();
                        header_removed = true;
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    )?;

    Ok((header.text, rest))
}

/// Convert one exported post.
pub fn convert_post(html: &str, base: &BasePath) -> Result<String, ImportError> {
    let html = rewrite_image_sources(html, base)?;
    let (header, rest) = extract_header(&html)?;

    let mut out = String::with_capacity(header.len() + rest.len() + 10);
    out.push_str("---\n");
    out.push_str(&header);
    out.push_str("\n---\n");
    out.push_str(&rest);
    Ok(out)
}

// ============================================================================
// Batch
// ============================================================================

/// Convert `input` and write it under `out_dir` with the same file name.
pub fn import_file(input: &Path, out_dir: &Path, base: &BasePath) -> Result<PathBuf> {
    let name = input
        .file_name()
        .ok_or_else(|| ImportError::NoFileName(input.to_path_buf()))?;
    let html =
        fs::read_to_string(input).map_err(|e| ImportError::Read(input.to_path_buf(), e))?;

    let converted =
        convert_post(&html, base).with_context(|| format!("in {}", input.display()))?;

    let output = out_dir.join(name);
    fs::write(&output, converted).map_err(|e| ImportError::Write(output.clone(), e))?;
    Ok(output)
}

/// Convert many posts in parallel. Every input is attempted; failures are
/// logged and reported together.
pub fn import_posts(inputs: &[PathBuf], out_dir: &Path, base: &BasePath) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let progress = ProgressLine::new("import", &[("posts", inputs.len())]);
    let results: Vec<(&PathBuf, Result<PathBuf>)> = inputs
        .par_iter()
        .map(|input| {
            let result = import_file(input, out_dir, base);
            progress.inc("posts");
            (input, result)
        })
        .collect();
    progress.finish();

    let mut written = Vec::with_capacity(results.len());
    let mut failed = 0usize;
    for (input, result) in results {
        match result {
            Ok(path) => written.push(path),
            Err(e) => {
                failed += 1;
                log!("error"; "{}: {:#}", input.display(), e);
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} posts failed to import", inputs.len());
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const POST: &str = "<p>intro</p>\n<hr>\n<h2>title: Piecewise &amp; more\ndate: 2020-06-20</h2>\n<p><img src=\"https://old.host/blog/assets/a.png\" alt=\"a\"></p>\n";

    fn rewrite(html: &str) -> String {
        rewrite_image_sources(html, &BasePath::new("/blog"))
            .unwrap()
            .into_owned()
    }

    #[test]
    fn test_rewrite_image_sources() {
        let out = rewrite(r#"<img src="https://x.io/blog/a.png">"#);
        assert!(out.contains(r#"src="/blog/a.png""#));
        assert!(!out.contains("x.io"));

        let out = rewrite("<IMG class='w' SRC='../blog/b.png'/>");
        assert!(out.contains("/blog/b.png"));
        assert!(!out.contains("../blog"));

        let out = rewrite("<p><img src=https://x.io/blog/u.png></p>");
        assert!(out.contains("/blog/u.png"));
        assert!(!out.contains("x.io"));

        let untouched = r#"<img src="https://x.io/other/c.png">"#;
        assert_eq!(rewrite(untouched), untouched);
    }

    #[test]
    fn test_rewrite_only_touches_src_attribute() {
        let out = rewrite(
            r#"<img alt="old src='https://x.io/blog/old.png' text" src="https://x.io/blog/a.png">"#,
        );
        assert!(out.contains("https://x.io/blog/old.png"));
        assert!(out.contains(r#"src="/blog/a.png""#));
        assert!(!out.contains(r#"src="https://x.io/blog/a.png""#));
    }

    #[test]
    fn test_rewrite_ignores_non_images_and_root_base() {
        let html = r#"<a href="https://x.io/blog/">x</a><script src="https://x.io/blog/a.js"></script>"#;
        assert_eq!(rewrite(html), html);

        let img = r#"<img src="https://x.io/blog/a.png">"#;
        assert!(matches!(
            rewrite_image_sources(img, &BasePath::root()),
            Ok(Cow::Borrowed(_))
        ));
    }

    #[test]
    fn test_extract_header() {
        let (text, rest) = extract_header(POST).unwrap();
        assert_eq!(text, "title: Piecewise & more\ndate: 2020-06-20");
        assert!(rest.starts_with("<p>intro</p>\n"));
        assert!(rest.contains("<p><img"));
        assert!(!rest.contains("<hr"));
        assert!(!rest.contains("<h2"));
    }

    #[test]
    fn test_extract_header_skips_siblings_between() {
        let (text, rest) = extract_header("<hr>\n<p>intro</p>\n<h2>title: x</h2><p>body</p>").unwrap();
        assert_eq!(text, "title: x");
        assert_eq!(rest, "\n<p>intro</p>\n<p>body</p>");
    }

    #[test]
    fn test_extract_header_uses_nearest_separator() {
        let html = "<hr><p>a</p><hr><h2>x</h2><hr><h2>y</h2>";
        let (text, rest) = extract_header(html).unwrap();
        assert_eq!(text, "x");
        assert_eq!(rest, "<hr><p>a</p><hr><h2>y</h2>");
    }

    #[test]
    fn test_extract_header_nested() {
        let html = "<hr><article><p>a</p><hr><h2>x</h2><p>b</p></article>";
        let (text, rest) = extract_header(html).unwrap();
        assert_eq!(text, "x");
        assert_eq!(rest, "<hr><article><p>a</p><p>b</p></article>");
    }

    #[test]
    fn test_extract_header_errors() {
        assert!(matches!(
            extract_header("<p>no header</p>"),
            Err(ImportError::MissingHeader)
        ));
        assert!(matches!(
            extract_header("<h2>x</h2><hr>"),
            Err(ImportError::MissingSeparator)
        ));
        assert!(matches!(
            extract_header("<div><hr></div><h2>x</h2>"),
            Err(ImportError::MissingSeparator)
        ));
    }

    #[test]
    fn test_convert_post() {
        let out = convert_post(POST, &BasePath::new("/blog")).unwrap();
        assert!(out.starts_with("---\ntitle: Piecewise & more\ndate: 2020-06-20\n---\n<p>intro</p>"));
        assert!(out.contains(r#"src="/blog/assets/a.png""#));
        assert!(out.contains(r#"alt="a""#));
    }

    #[test]
    fn test_import_posts() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("2020-06-20-piecewise.html");
        let bad = dir.path().join("broken.html");
        fs::write(&good, POST).unwrap();
        fs::write(&bad, "<p>nothing</p>").unwrap();
        let out = dir.path().join("out");

        let written = import_posts(&[good.clone()], &out, &BasePath::new("/blog")).unwrap();
        assert_eq!(written, [out.join("2020-06-20-piecewise.html")]);
        assert!(fs::read_to_string(&written[0]).unwrap().starts_with("---\n"));

        assert!(import_posts(&[good, bad], &out, &BasePath::new("/blog")).is_err());
        assert!(!out.join("broken.html").exists());
    }
}
