//! `[markdown]` section configuration.
//!
//! ```toml
//! [markdown]
//! remark_plugins = ["remark-math"]
//! rehype_plugins = ["rehype-katex"]
//! syntax_theme = "css-variables"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

const REMARK_MATH: &str = "remark-math";
const REHYPE_KATEX: &str = "rehype-katex";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub remark_plugins: Vec<String>,
    pub rehype_plugins: Vec<String>,
    /// Code block highlighting theme.
    pub syntax_theme: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            remark_plugins: vec![REMARK_MATH.into()],
            rehype_plugins: vec![REHYPE_KATEX.into()],
            syntax_theme: "css-variables".into(),
        }
    }
}

impl MarkdownConfig {
    pub const REMARK_PLUGINS: FieldPath = FieldPath::new("markdown.remark_plugins");
    pub const REHYPE_PLUGINS: FieldPath = FieldPath::new("markdown.rehype_plugins");
    pub const SYNTAX_THEME: FieldPath = FieldPath::new("markdown.syntax_theme");

    /// Math parsing and math rendering only work together.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let has_math = self.remark_plugins.iter().any(|p| p == REMARK_MATH);
        let has_katex = self.rehype_plugins.iter().any(|p| p == REHYPE_KATEX);

        match (has_math, has_katex) {
            (true, false) => diag.warn_with_hint(
                Self::REHYPE_PLUGINS,
                format!("'{REMARK_MATH}' is enabled without '{REHYPE_KATEX}', math will not render"),
                format!("add \"{REHYPE_KATEX}\" to {}", Self::REHYPE_PLUGINS),
            ),
            (false, true) => diag.warn_with_hint(
                Self::REMARK_PLUGINS,
                format!("'{REHYPE_KATEX}' is enabled without '{REMARK_MATH}', math will not be parsed"),
                format!("add \"{REMARK_MATH}\" to {}", Self::REMARK_PLUGINS),
            ),
            _ => {}
        }

        if self.syntax_theme.trim().is_empty() {
            diag.error_with_hint(
                Self::SYNTAX_THEME,
                "syntax theme must not be empty",
                "use \"css-variables\" to style code with CSS custom properties",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    fn diagnose(extra: &str) -> ConfigDiagnostics {
        let config = test_parse_config(extra);
        let mut diag = ConfigDiagnostics::new();
        config.markdown.validate(&mut diag);
        diag
    }

    #[test]
    fn test_markdown_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.markdown.remark_plugins, ["remark-math"]);
        assert_eq!(config.markdown.rehype_plugins, ["rehype-katex"]);
        assert_eq!(config.markdown.syntax_theme, "css-variables");
        let diag = diagnose("");
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_unpaired_math_plugins_warn() {
        let diag = diagnose("[markdown]\nrehype_plugins = []");
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);

        let diag = diagnose("[markdown]\nremark_plugins = []");
        assert_eq!(diag.warnings().len(), 1);

        let diag = diagnose("[markdown]\nremark_plugins = []\nrehype_plugins = []");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_empty_syntax_theme_rejected() {
        assert!(diagnose("[markdown]\nsyntax_theme = \"  \"").has_errors());
    }
}
