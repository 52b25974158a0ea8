//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! url = "https://barrysir.github.io"   # Deployed origin (required for sitemap)
//! base = "/blog"                        # Path the site is served under
//! title = "barry"
//! description = ""
//! email = ""
//! num_posts_on_homepage = 5
//! num_projects_on_homepage = 0
//! ```
//!
//! When `base` is unset, the path of `url` is used instead
//! (`https://example.github.io/my-project` serves under `/my-project`).

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::site::{SITE, Site};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub url: Option<String>,
    pub base: Option<String>,
    pub title: String,
    pub description: String,
    pub email: String,
    pub num_posts_on_homepage: usize,
    pub num_projects_on_homepage: usize,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            url: None,
            base: None,
            title: SITE.title.to_string(),
            description: SITE.description.to_string(),
            email: SITE.email.to_string(),
            num_posts_on_homepage: SITE.num_posts_on_homepage,
            num_projects_on_homepage: SITE.num_projects_on_homepage,
        }
    }
}

impl SiteSection {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const BASE: FieldPath = FieldPath::new("site.base");
    pub const TITLE: FieldPath = FieldPath::new("site.title");

    /// Metadata exposed to templates.
    pub fn to_site(&self) -> Site {
        Site {
            title: self.title.clone().into(),
            description: self.description.clone().into(),
            email: self.email.clone().into(),
            num_posts_on_homepage: self.num_posts_on_homepage,
            num_projects_on_homepage: self.num_projects_on_homepage,
        }
    }

    /// # Checks
    /// - `url` must be an http(s) URL with a host
    /// - `sitemap_enabled` requires `url`
    /// - `base` should start with `/`
    pub fn validate(&self, sitemap_enabled: bool, diag: &mut ConfigDiagnostics) {
        if sitemap_enabled && self.url.is_none() {
            diag.error_with_hint(
                Self::URL,
                format!(
                    "`integrations.sitemap` is enabled but {} is not configured",
                    Self::URL
                ),
                format!("set {}, e.g.: \"https://example.com\"", Self::URL),
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::URL,
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if let Some(base) = &self.base
            && !base.is_empty()
            && !base.starts_with('/')
        {
            diag.warn_with_hint(
                Self::BASE,
                format!("'{base}' does not start with '/', treating it as '/{base}'"),
                format!("use \"/{base}\""),
            );
        }

        if self.title.trim().is_empty() {
            diag.warn(Self::TITLE, "site title is empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};
    use crate::site::SITE;

    fn diagnose(extra: &str, sitemap_enabled: bool) -> ConfigDiagnostics {
        let config = test_parse_config(extra);
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(sitemap_enabled, &mut diag);
        diag
    }

    #[test]
    fn test_site_defaults_mirror_constant() {
        let config = test_parse_config("");
        assert_eq!(config.site.to_site(), SITE);
        assert!(config.site.url.is_none());
        assert!(config.site.base.is_none());
    }

    #[test]
    fn test_site_override() {
        let config = test_parse_config(
            "[site]\ntitle = \"My Blog\"\nemail = \"me@example.com\"\nnum_posts_on_homepage = 3",
        );
        let site = config.site.to_site();
        assert_eq!(site.title, "My Blog");
        assert_eq!(site.email, "me@example.com");
        assert_eq!(site.num_posts_on_homepage, 3);
        assert_eq!(site.num_projects_on_homepage, 0);
    }

    #[test]
    fn test_valid_url() {
        let diag = diagnose("[site]\nurl = \"https://barrysir.github.io\"", true);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_invalid_url() {
        assert!(diagnose("[site]\nurl = \"barrysir.github.io\"", false).has_errors());
        assert!(diagnose("[site]\nurl = \"ftp://example.com\"", false).has_errors());
    }

    #[test]
    fn test_sitemap_requires_url() {
        let diag = diagnose("", true);
        assert!(diag.has_errors());
        assert!(diag.errors()[0].hint.is_some());
        assert!(!diagnose("", false).has_errors());
    }

    #[test]
    fn test_relative_base_warns() {
        let diag = diagnose("[site]\nbase = \"blog\"", false);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);

        let diag = diagnose("[site]\nbase = \"/blog\"", false);
        assert!(diag.warnings().is_empty());
    }
}
