//! blogkit - configuration and template helpers for a personal static blog.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── site          # SITE / HOME / BLOG / PROJECTS / SOCIALS
//! ├── config/       # blog.toml loading and validation
//! ├── utils/
//! │   ├── path      # base-path aware links
//! │   ├── class/    # utility-class merging (cn)
//! │   ├── date      # date parsing and MM/DD/YYYY formatting
//! │   └── html      # tag stripping, escaping, reading time
//! ├── generator/    # sitemap.xml
//! ├── import        # legacy post conversion
//! ├── logger        # log! / debug! macros
//! └── cli/          # command-line interface
//! ```
//!
//! Template helpers are re-exported at the crate root:
//!
//! ```ignore
//! use blogkit::{BasePath, cn, format_date, reading_time};
//!
//! let base = BasePath::new("/blog/");
//! assert_eq!(base.join("posts/hello"), "/blog/posts/hello");
//! assert_eq!(cn!("p-2", false, "p-4"), "p-4");
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod import;
pub mod logger;
pub mod site;
pub mod utils;

pub use site::{BLOG, HOME, Metadata, PROJECTS, SITE, SOCIALS, Site, Social};
pub use utils::class::{ClassMap, ClassValue, cn, merge_classes};
pub use utils::date::{DateTimeUtc, format_date};
pub use utils::html::reading_time;
pub use utils::path::{BasePath, get_path_with_base};
