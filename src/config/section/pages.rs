//! `[pages.*]` section configuration.
//!
//! ```toml
//! [pages.projects]
//! title = "Work"
//! description = "Things I have built."
//! ```
//!
//! Missing pages or keys keep the built-in `HOME`, `BLOG` and `PROJECTS`.

use crate::site::{BLOG, HOME, Metadata, PROJECTS};
use serde::{Deserialize, Serialize};

/// Partial page metadata, merged over a built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PageConfig {
    pub fn resolve(&self, fallback: &Metadata) -> Metadata {
        Metadata {
            title: self
                .title
                .clone()
                .map_or_else(|| fallback.title.clone(), Into::into),
            description: self
                .description
                .clone()
                .map_or_else(|| fallback.description.clone(), Into::into),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub home: PageConfig,
    pub blog: PageConfig,
    pub projects: PageConfig,
}

impl PagesConfig {
    pub fn home(&self) -> Metadata {
        self.home.resolve(&HOME)
    }

    pub fn blog(&self) -> Metadata {
        self.blog.resolve(&BLOG)
    }

    pub fn projects(&self) -> Metadata {
        self.projects.resolve(&PROJECTS)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use crate::site::{BLOG, HOME, PROJECTS};

    #[test]
    fn test_pages_default_to_constants() {
        let config = test_parse_config("");
        assert_eq!(config.pages.home(), HOME);
        assert_eq!(config.pages.blog(), BLOG);
        assert_eq!(config.pages.projects(), PROJECTS);
    }

    #[test]
    fn test_partial_page_override() {
        let config = test_parse_config("[pages.projects]\ntitle = \"Work\"");
        let projects = config.pages.projects();
        assert_eq!(projects.title, "Work");
        assert_eq!(projects.description, PROJECTS.description);
    }

    #[test]
    fn test_description_only_override() {
        let config = test_parse_config("[pages.blog]\ndescription = \"Notes\"");
        let blog = config.pages.blog();
        assert_eq!(blog.title, "Blog");
        assert_eq!(blog.description, "Notes");
    }
}
