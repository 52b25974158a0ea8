//! One-shot helper commands: `path`, `class`, `date`, `read-time`.

use crate::{
    config::SiteConfig,
    utils::{
        class::cn,
        date::{DateTimeUtc, format_date},
        html::reading_time,
        path::get_path_with_base,
    },
};
use anyhow::{Context, Result, bail};
use std::io::{self, Write};
use std::path::Path;

pub fn print_paths(config: &SiteConfig, paths: &[String], out: &mut impl Write) -> Result<()> {
    for path in paths {
        writeln!(out, "{}", get_path_with_base(config.base(), path))?;
    }
    Ok(())
}

/// Arguments are joined in order, so `class "p-2 m-1" p-4` merges to `m-1 p-4`.
pub fn print_classes(classes: &[String], out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", cn(classes.iter().cloned()))?;
    Ok(())
}

pub fn print_date(date: &str, out: &mut impl Write) -> Result<()> {
    let Some(parsed) = DateTimeUtc::parse(date.trim()) else {
        bail!("invalid date '{date}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ");
    };
    writeln!(out, "{}", format_date(&parsed))?;
    Ok(())
}

/// Read `file`, or stdin when `None`.
pub fn print_reading_time(file: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
    };
    writeln!(out, "{}", reading_time(&content))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::NamedTempFile;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_paths() {
        let mut config = test_parse_config("[site]\nbase = \"/blog/\"");
        config.resolve_base(None);
        let paths = vec!["/about".to_string(), "posts/".to_string(), String::new()];
        assert_eq!(
            output(|out| print_paths(&config, &paths, out)),
            "/blog/about\n/blog/posts/\n/blog/\n"
        );
    }

    #[test]
    fn test_print_classes() {
        let classes = vec!["p-2 m-1".to_string(), "p-4".to_string()];
        assert_eq!(output(|out| print_classes(&classes, out)), "m-1 p-4\n");
    }

    #[test]
    fn test_print_date() {
        assert_eq!(output(|out| print_date("2024-03-05", out)), "03/05/2024\n");
        assert_eq!(
            output(|out| print_date("2021-12-31T23:59:59Z", out)),
            "12/31/2021\n"
        );
    }

    #[test]
    fn test_print_date_rejects_invalid() {
        let mut out = Vec::new();
        assert!(print_date("03/05/2024", &mut out).is_err());
        assert!(print_date("2023-02-29", &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_print_reading_time_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), format!("<p>{}</p>", "word ".repeat(400))).unwrap();
        assert_eq!(
            output(|out| print_reading_time(Some(file.path()), out)),
            "3 min read\n"
        );
    }
}
