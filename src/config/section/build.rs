//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! output = "dist"                 # Built site, relative to blog.toml
//! sitemap = "sitemap.xml"       # Sitemap file name inside `output`
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub output: PathBuf,
    pub sitemap: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "dist".into(),
            sitemap: "sitemap.xml".into(),
        }
    }
}

impl BuildConfig {
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");
    pub const SITEMAP: FieldPath = FieldPath::new("build.sitemap");

    /// Sitemap must be a relative file name so it lands inside `output`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error(Self::OUTPUT, "output directory must not be empty");
        }
        if self.sitemap.is_absolute() {
            diag.error_with_hint(
                Self::SITEMAP,
                format!("'{}' must be relative to the output directory", self.sitemap.display()),
                "use a plain file name, e.g. \"sitemap.xml\"",
            );
        }
        if self.sitemap.as_os_str().is_empty() {
            diag.error(Self::SITEMAP, "sitemap file name must not be empty");
        }
    }
}
