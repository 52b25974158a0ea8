//! Site configuration management for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per TOML section
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # URL helpers, config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                       |
//! |------------------|-----------------------------------------------|
//! | `[site]`         | URL, base path, title, home page counts       |
//! | `[pages.*]`      | Home / blog / projects page metadata          |
//! | `[[socials]]`    | Footer links                                  |
//! | `[integrations]` | sitemap, mdx, search, tailwind toggles        |
//! | `[markdown]`     | remark / rehype plugins, syntax theme         |
//! | `[image]`        | Image service                                 |
//! | `[build]`        | Output directory, sitemap file name           |

pub mod section;
pub mod types;
mod util;

pub use section::{
    BuildConfig, ImageConfig, ImageService, IntegrationsConfig, MarkdownConfig, PageConfig,
    PagesConfig, SiteSection,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Severity};
pub use util::{extract_url_path, find_config_file, site_origin};

use crate::{
    cli::Cli,
    debug, log,
    site::{SOCIALS, Site, Social},
    utils::path::{BasePath, normalize_path},
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blog.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file; empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file
    #[serde(skip)]
    pub root: PathBuf,

    /// Resolved base path, set once by `resolve_base`
    #[serde(skip)]
    base: BasePath,

    /// Keys present in the file but not understood
    #[serde(skip)]
    pub unknown_fields: Vec<String>,

    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub pages: PagesConfig,

    #[serde(default)]
    pub socials: Option<Vec<Social>>,

    #[serde(default)]
    pub integrations: IntegrationsConfig,

    #[serde(default)]
    pub markdown: MarkdownConfig,

    #[serde(default)]
    pub image: ImageConfig,

    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. Commands that can run on
    /// defaults fall back to them when no file exists; the others fail.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = normalize_path(&path);
                config.root = config
                    .config_path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.clone());
                config
            }
            None if cli.command.requires_config() => {
                bail!(ConfigError::NotFound(cli.config.clone()));
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.finalize(cli.base.as_deref());

        if config.has_file() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve derived values after parsing.
    fn finalize(&mut self, cli_base: Option<&str>) {
        self.resolve_base(cli_base);
        if self.build.output.is_relative() {
            self.build.output = self.root.join(&self.build.output);
        }
    }

    /// Pick the base path: CLI flag, then `site.base`, then the path of
    /// `site.url`, else the root.
    pub fn resolve_base(&mut self, cli_base: Option<&str>) {
        let raw = cli_base
            .map(str::to_owned)
            .or_else(|| self.site.base.clone())
            .or_else(|| self.site.url.as_deref().and_then(extract_url_path))
            .unwrap_or_default();
        self.base = BasePath::new(&raw);
        debug!("config"; "base path: {}", self.base);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        config.unknown_fields = ignored;

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Whether values came from a config file rather than defaults.
    pub fn has_file(&self) -> bool {
        !self.config_path.as_os_str().is_empty()
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// `[site]` metadata for templates.
    pub fn site_meta(&self) -> Site {
        self.site.to_site()
    }

    /// Configured socials, or the built-in list.
    pub fn socials(&self) -> &[Social] {
        self.socials.as_deref().unwrap_or(SOCIALS)
    }

    /// Scheme and host of `site.url`.
    pub fn origin(&self) -> Option<String> {
        self.site.url.as_deref().and_then(site_origin)
    }

    pub fn output_dir(&self) -> &Path {
        &self.build.output
    }

    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.build.sitemap)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section check without reporting.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(self.integrations.sitemap, &mut diag);
        self.markdown.validate(&mut diag);
        self.build.validate(&mut diag);
        section::socials::validate(self.socials(), &mut diag);
        diag
    }

    /// Print warnings and fail with all collected errors.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields so typos in tests surface.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use tempfile::TempDir;

    fn cli(config: PathBuf, base: Option<&str>, command: Commands) -> Cli {
        Cli {
            config,
            base: base.map(str::to_owned),
            verbose: false,
            color: Default::default(),
            command,
        }
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[site\ntitle = \"My Blog\"").is_err());
    }

    #[test]
    fn test_empty_config_needs_url_for_sitemap() {
        let config = test_parse_config("");
        assert_eq!(config.site_meta(), crate::site::SITE);
        let diag = config.diagnose();
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field, SiteSection::URL);

        let config = test_parse_config("[integrations]\nsitemap = false");
        assert!(config.diagnose().into_result().is_ok());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\ntitel = \"typo\"\n[unknown_section]\nfield = 1";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f == "site.titel"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_base_resolution_order() {
        let mut config = test_parse_config(
            "[site]\nurl = \"https://example.github.io/from-url/\"\nbase = \"/from-base/\"",
        );
        config.resolve_base(Some("/from-cli"));
        assert_eq!(config.base().as_str(), "/from-cli");

        config.resolve_base(Some("from-cli/"));
        assert_eq!(config.base().as_str(), "/from-cli");

        config.resolve_base(None);
        assert_eq!(config.base().as_str(), "/from-base");

        config.site.base = None;
        config.resolve_base(None);
        assert_eq!(config.base().as_str(), "/from-url");

        config.site.url = None;
        config.resolve_base(None);
        assert!(config.base().is_root());
    }

    #[test]
    fn test_origin() {
        let config = test_parse_config("[site]\nurl = \"https://barrysir.github.io/blog\"");
        assert_eq!(config.origin().as_deref(), Some("https://barrysir.github.io"));
        assert_eq!(test_parse_config("").origin(), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blog.toml");
        fs::write(
            &path,
            "[site]\nurl = \"https://example.com\"\nbase = \"/blog\"\n[build]\noutput = \"public\"",
        )
        .unwrap();

        let config = SiteConfig::load(&cli(path, None, Commands::Check { strict: false })).unwrap();
        assert!(config.has_file());
        assert_eq!(config.base().as_str(), "/blog");
        assert!(config.output_dir().ends_with("public"));
        assert!(config.output_dir().is_absolute());
        assert!(config.sitemap_path().ends_with("public/sitemap.xml"));
    }

    #[test]
    fn test_load_reports_validation_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blog.toml");
        // sitemap is on by default and needs a url
        fs::write(&path, "[site]\ntitle = \"x\"").unwrap();

        let err = SiteConfig::load(&cli(path, None, Commands::Check { strict: false }))
            .unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let err = SiteConfig::load(&cli(path.clone(), None, Commands::Check { strict: false }))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));

        let config = SiteConfig::load(&cli(
            path,
            Some("/docs"),
            Commands::Path {
                paths: vec!["a".into()],
            },
        ))
        .unwrap();
        assert!(!config.has_file());
        assert_eq!(config.base().as_str(), "/docs");
    }
}
