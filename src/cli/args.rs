//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Configuration and template helpers for a personal static blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "blog.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the base path the site is served under (e.g. /blog)
    #[arg(long, global = true)]
    pub base: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show resolved site metadata, pages, socials and integrations
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load and validate the config file
    #[command(visible_alias = "c")]
    Check {
        /// Treat unknown config fields as errors
        #[arg(long)]
        strict: bool,
    },

    /// Prefix site-relative paths with the base path
    #[command(visible_alias = "p")]
    Path {
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
    },

    /// Merge utility classes, later classes winning conflicts
    Class {
        #[arg(required = true, value_name = "CLASS", allow_hyphen_values = true)]
        classes: Vec<String>,
    },

    /// Format a date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ) as MM/DD/YYYY
    Date {
        #[arg(value_name = "DATE")]
        date: String,
    },

    /// Estimate reading time of an HTML or text file (stdin if omitted)
    #[command(name = "read-time", visible_alias = "rt")]
    ReadTime {
        #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Write the sitemap for a built site
    #[command(visible_alias = "s")]
    Sitemap {
        /// Built site directory (default: build.output)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,
    },

    /// Convert exported HTML posts to front-matter posts
    Import {
        #[arg(required = true, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,

        /// Directory to write converted posts into
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: PathBuf,
    },
}

impl Commands {
    /// Commands that cannot run on built-in defaults.
    pub const fn requires_config(&self) -> bool {
        matches!(
            self,
            Self::Check { .. } | Self::Sitemap { .. } | Self::Import { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from(["blogkit", "path", "about", "--base", "/blog", "-v"]);
        assert_eq!(cli.base.as_deref(), Some("/blog"));
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("blog.toml"));
        assert!(matches!(cli.command, Commands::Path { ref paths } if paths == &["about"]));
    }

    #[test]
    fn test_class_accepts_negative_values() {
        let cli = Cli::parse_from(["blogkit", "class", "mt-4", "-mt-2"]);
        match cli.command {
            Commands::Class { classes } => assert_eq!(classes, ["mt-4", "-mt-2"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_requires_config() {
        let cli = Cli::parse_from(["blogkit", "import", "a.html", "-o", "out"]);
        assert!(cli.command.requires_config());
        let cli = Cli::parse_from(["blogkit", "date", "2024-01-02"]);
        assert!(!cli.command.requires_config());
    }
}
