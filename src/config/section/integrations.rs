//! `[integrations]` and `[image]` section configuration.
//!
//! ```toml
//! [integrations]
//! sitemap = true     # write sitemap.xml after a build
//! mdx = true         # MDX pages
//! search = true      # search index over the built pages
//! tailwind = true    # utility-class CSS
//!
//! [image]
//! service = "passthrough"   # or "sharp"
//! ```
//!
//! These are declarative toggles read by the site framework. Only the sitemap
//! is produced here (`blogkit sitemap`).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    pub sitemap: bool,
    pub mdx: bool,
    pub search: bool,
    pub tailwind: bool,
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            sitemap: true,
            mdx: true,
            search: true,
            tailwind: true,
        }
    }
}

impl IntegrationsConfig {
    /// Names of the enabled integrations, in a fixed order.
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("sitemap", self.sitemap),
            ("mdx", self.mdx),
            ("search", self.search),
            ("tailwind", self.tailwind),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

/// Image processing backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageService {
    /// Serve images unmodified.
    #[default]
    Passthrough,
    /// Resize and convert at build time.
    Sharp,
}

impl fmt::Display for ImageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Passthrough => "passthrough",
            Self::Sharp => "sharp",
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub service: ImageService,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_integrations_default_enabled() {
        let config = test_parse_config("");
        assert_eq!(
            config.integrations.enabled(),
            ["sitemap", "mdx", "search", "tailwind"]
        );
        assert_eq!(config.image.service, ImageService::Passthrough);
    }

    #[test]
    fn test_integrations_toggle() {
        let config = test_parse_config("[integrations]\nsearch = false\nsitemap = false");
        assert_eq!(config.integrations.enabled(), ["mdx", "tailwind"]);
    }

    #[test]
    fn test_image_service() {
        let config = test_parse_config("[image]\nservice = \"sharp\"");
        assert_eq!(config.image.service, ImageService::Sharp);
        assert_eq!(config.image.service.to_string(), "sharp");
    }

    #[test]
    fn test_unknown_image_service_rejected() {
        assert!(SiteConfig::from_str("[image]\nservice = \"squoosh\"").is_err());
    }
}
