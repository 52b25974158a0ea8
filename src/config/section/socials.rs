//! `[[socials]]` entries.
//!
//! ```toml
//! [[socials]]
//! name = "GitHub"
//! href = "https://github.com/barrysir"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::site::Social;

pub const SOCIALS: FieldPath = FieldPath::new("socials");

/// Every entry needs a non-empty `name` and `href`.
pub fn validate(socials: &[Social], diag: &mut ConfigDiagnostics) {
    for (i, social) in socials.iter().enumerate() {
        if social.name.trim().is_empty() {
            diag.error(SOCIALS, format!("entry {} has an empty `name`", i + 1));
        }
        if social.href.trim().is_empty() {
            diag.error_with_hint(
                SOCIALS,
                format!("entry {} ('{}') has an empty `href`", i + 1, social.name),
                "set href to the profile URL",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::site::SOCIALS as DEFAULT_SOCIALS;

    #[test]
    fn test_socials_default_empty() {
        let config = test_parse_config("");
        assert_eq!(config.socials(), DEFAULT_SOCIALS);
    }

    #[test]
    fn test_socials_parsed_in_order() {
        let config = test_parse_config(
            "[[socials]]\nname = \"GitHub\"\nhref = \"https://github.com/x\"\n\
             [[socials]]\nname = \"Mail\"\nhref = \"mailto:x@example.com\"",
        );
        let socials = config.socials();
        assert_eq!(socials.len(), 2);
        assert_eq!(socials[0].name, "GitHub");
        assert_eq!(socials[1].href, "mailto:x@example.com");

        let mut diag = ConfigDiagnostics::new();
        validate(socials, &mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_empty_social_fields_rejected() {
        let socials = [Social::new("", "https://x"), Social::new("X", " ")];
        let mut diag = ConfigDiagnostics::new();
        validate(&socials, &mut diag);
        assert_eq!(diag.errors().len(), 2);
    }
}
