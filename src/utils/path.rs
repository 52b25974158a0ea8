//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`BasePath`]: the prefix the whole site is served under (e.g. `/blog`)
//! - [`get_path_with_base`]: prefix a site-relative link with the base path
//! - [`normalize_path`]: filesystem path normalization

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// URL path prefix under which the site is served.
///
/// Invariants:
/// - Starts with exactly one `/` unless it is the root
/// - Never ends with `/` (the root base is the empty string)
/// - Built once from configuration, immutable afterwards
///
/// # Example
/// ```ignore
/// let base = BasePath::new("/blog/");
/// assert_eq!(base.as_str(), "/blog");
/// assert_eq!(base.join("/posts/"), "/blog/posts/");
/// assert_eq!(base.join(""), "/blog/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BasePath(Arc<str>);

impl BasePath {
    /// Build from the raw configured value.
    ///
    /// `blog`, `/blog/` and `//blog` all become `/blog`.
    pub fn new(raw: &str) -> Self {
        let trimmed = strip_leading_slash(strip_trailing_slash(raw.trim()));
        if trimmed.is_empty() {
            return Self::root();
        }
        Self(Arc::from(format!("/{trimmed}")))
    }

    /// The root base (`/`), stored as the empty string.
    pub fn root() -> Self {
        Self::default()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Prefix `path` with the base, separated by exactly one `/`.
    ///
    /// An empty path yields the base followed by `/`.
    pub fn join(&self, path: &str) -> String {
        let path = strip_leading_slash(path);
        let mut out = String::with_capacity(self.0.len() + path.len() + 1);
        out.push_str(&self.0);
        out.push('/');
        out.push_str(path);
        out
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("/")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl Serialize for BasePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Prefix a site-relative link with the configured base path.
///
/// # Examples
/// ```ignore
/// let base = BasePath::new("/blog");
/// assert_eq!(get_path_with_base(&base, "about"), "/blog/about");
/// assert_eq!(get_path_with_base(&base, "/about"), "/blog/about");
/// assert_eq!(get_path_with_base(&base, ""), "/blog/");
/// ```
#[inline]
pub fn get_path_with_base(base: &BasePath, path: &str) -> String {
    base.join(path)
}

/// Strip leading slashes from a URL path.
#[inline]
pub fn strip_leading_slash(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Strip trailing slashes from a URL path.
#[inline]
pub fn strip_trailing_slash(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first, then falls back to joining relative paths
/// onto the current directory.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}
