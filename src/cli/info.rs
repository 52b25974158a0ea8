//! `blogkit info`: resolved site settings.

use crate::{
    config::{ImageService, SiteConfig},
    site::{Metadata, Site, Social},
    utils::path::BasePath,
};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Everything templates see, after config overrides and base resolution.
#[derive(Debug, Serialize)]
pub struct SiteInfo<'a> {
    pub url: Option<&'a str>,
    pub base: &'a BasePath,
    pub site: Site,
    pub home: Metadata,
    pub blog: Metadata,
    pub projects: Metadata,
    pub socials: &'a [Social],
    pub integrations: Vec<&'static str>,
    pub syntax_theme: &'a str,
    pub image_service: ImageService,
}

impl<'a> SiteInfo<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            url: config.site.url.as_deref(),
            base: config.base(),
            site: config.site_meta(),
            home: config.pages.home(),
            blog: config.pages.blog(),
            projects: config.pages.projects(),
            socials: config.socials(),
            integrations: config.integrations.enabled(),
            syntax_theme: &config.markdown.syntax_theme,
            image_service: config.image.service,
        }
    }
}

pub fn print_info(config: &SiteConfig, json: bool, out: &mut impl Write) -> Result<()> {
    let info = SiteInfo::new(config);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
        return Ok(());
    }

    let label = |name: &str| format!("{name:<14}");

    writeln!(out, "{}{}", label("title"), info.site.title)?;
    if !info.site.description.is_empty() {
        writeln!(out, "{}{}", label("description"), info.site.description)?;
    }
    if !info.site.email.is_empty() {
        writeln!(out, "{}{}", label("email"), info.site.email)?;
    }
    writeln!(out, "{}{}", label("url"), info.url.unwrap_or("-"))?;
    writeln!(out, "{}{}", label("base"), info.base)?;
    writeln!(
        out,
        "{}{} posts, {} projects",
        label("home page"),
        info.site.num_posts_on_homepage,
        info.site.num_projects_on_homepage
    )?;

    writeln!(out)?;
    for (name, page) in [("home", &info.home), ("blog", &info.blog), ("projects", &info.projects)] {
        writeln!(out, "{}{}", label(name), page.title)?;
        if !page.description.is_empty() {
            writeln!(out, "{:14}{}", "", page.description)?;
        }
    }

    if !info.socials.is_empty() {
        writeln!(out)?;
        for social in info.socials {
            writeln!(out, "{}{}", label(social.name.as_ref()), social.href)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}{}", label("integrations"), info.integrations.join(", "))?;
    writeln!(out, "{}{}", label("syntax theme"), info.syntax_theme)?;
    writeln!(out, "{}{}", label("images"), info.image_service)?;
    Ok(())
}
