//! Files generated from a built site.
//!
//! - **Sitemap**: search engine indexing (`sitemap.xml`)

pub mod sitemap;

pub use sitemap::{build_sitemap, route_for_file};
