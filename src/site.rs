//! Site-wide metadata consumed by page templates.
//!
//! The constants are the built-in defaults. `blog.toml` can override each of
//! them through `[site]`, `[pages.*]` and `[[socials]]`; sections that are
//! absent fall back to the values here.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Site information shown in the header, footer and home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
    /// Contact address.
    pub email: Cow<'static, str>,
    /// Number of recent posts listed on the home page.
    pub num_posts_on_homepage: usize,
    /// Number of projects listed on the home page.
    pub num_projects_on_homepage: usize,
}

impl Default for Site {
    fn default() -> Self {
        SITE
    }
}

/// Per-page title and description pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Cow<'static, str>,
    #[serde(default)]
    pub description: Cow<'static, str>,
}

impl Metadata {
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title: Cow::Borrowed(title),
            description: Cow::Borrowed(description),
        }
    }
}

/// A social link rendered in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub name: Cow<'static, str>,
    pub href: Cow<'static, str>,
}

impl Social {
    pub const fn new(name: &'static str, href: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            href: Cow::Borrowed(href),
        }
    }
}

pub const SITE: Site = Site {
    title: Cow::Borrowed("barry"),
    description: Cow::Borrowed(""),
    email: Cow::Borrowed(""),
    num_posts_on_homepage: 5,
    num_projects_on_homepage: 0,
};

pub const HOME: Metadata = Metadata::new("Home", "");

pub const BLOG: Metadata = Metadata::new("Blog", "");

pub const PROJECTS: Metadata = Metadata::new(
    "Projects",
    "A collection of my projects with links to repositories and live demos.",
);

pub const SOCIALS: &[Social] = &[];
