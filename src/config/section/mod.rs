//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blog.toml`:
//!
//! | Module         | TOML Section       | Purpose                              |
//! |----------------|--------------------|--------------------------------------|
//! | `site`         | `[site]`           | URL, base path, site metadata        |
//! | `pages`        | `[pages.*]`        | Per-page title and description       |
//! | `socials`      | `[[socials]]`      | Footer links                         |
//! | `integrations` | `[integrations]`, `[image]` | Framework integration toggles |
//! | `markdown`     | `[markdown]`       | Markdown plugins and code theme      |
//! | `build`        | `[build]`          | Output directory, sitemap file name  |

mod build;
mod integrations;
mod markdown;
mod pages;
mod site;
pub mod socials;

pub use build::BuildConfig;
pub use integrations::{ImageConfig, ImageService, IntegrationsConfig};
pub use markdown::MarkdownConfig;
pub use pages::{PageConfig, PagesConfig};
pub use site::SiteSection;
