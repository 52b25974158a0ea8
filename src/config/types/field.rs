//! Dotted config key paths used in diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Path of a key in `blog.toml`, e.g. `site.url` or `markdown.syntax_theme`.
///
/// Sections expose their keys as associated constants:
///
/// ```ignore
/// diag.error(SiteSection::URL, "invalid URL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_display_quotes_key() {
        assert!(FieldPath::new("site.url").to_string().contains("`site.url`"));
        assert_eq!(FieldPath::new("pages.home.title").as_ref(), "pages.home.title");
    }
}
