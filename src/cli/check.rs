//! `blogkit check`: config validation report.

use crate::{
    config::{ConfigError, SiteConfig},
    log,
};
use anyhow::{Result, bail};

/// Report on a config that already passed loading.
///
/// Errors fail `SiteConfig::load` before this runs; what is left are unknown
/// fields, which `strict` turns into an error.
pub fn check_config(config: &SiteConfig, strict: bool) -> Result<()> {
    if strict && !config.unknown_fields.is_empty() {
        bail!(ConfigError::UnknownFields(config.unknown_fields.clone()));
    }

    let warnings = config.diagnose().warnings().len() + config.unknown_fields.len();
    let name = config
        .config_path
        .file_name()
        .map_or_else(|| config.config_path.display().to_string(), |n| n.to_string_lossy().into_owned());

    match warnings {
        0 => log!("check"; "{name} is valid"),
        1 => log!("check"; "{name} is valid (1 warning)"),
        n => log!("check"; "{name} is valid ({n} warnings)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_strict_rejects_unknown_fields() {
        let mut config = test_parse_config("[integrations]\nsitemap = false");
        config.unknown_fields = vec!["site.titel".into()];

        assert!(check_config(&config, false).is_ok());
        let err = check_config(&config, true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::UnknownFields(fields)) if fields == &["site.titel"]
        ));
    }

    #[test]
    fn test_clean_config_passes_strict() {
        let config = test_parse_config("[site]\nurl = \"https://example.com\"");
        assert!(check_config(&config, true).is_ok());
    }
}
