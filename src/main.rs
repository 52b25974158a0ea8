//! blogkit - configuration and template helpers for a personal static blog.

use anyhow::Result;
use blogkit::{
    cli::{self, Cli, Commands},
    config::SiteConfig,
    generator::build_sitemap,
    import::import_posts,
    log, logger,
};
use clap::{ColorChoice, Parser};
use std::io::stdout;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let mut config = SiteConfig::load(&cli)?;
    let mut out = stdout();

    match &cli.command {
        Commands::Info { json } => cli::info::print_info(&config, *json, &mut out),
        Commands::Check { strict } => cli::check::check_config(&config, *strict),
        Commands::Path { paths } => cli::tools::print_paths(&config, paths, &mut out),
        Commands::Class { classes } => cli::tools::print_classes(classes, &mut out),
        Commands::Date { date } => cli::tools::print_date(date, &mut out),
        Commands::ReadTime { file } => cli::tools::print_reading_time(file.as_deref(), &mut out),
        Commands::Sitemap { output } => {
            if let Some(dir) = output {
                config.build.output = dir.clone();
            }
            build_sitemap(&config).map(|_| ())
        }
        Commands::Import { files, output } => {
            let written = import_posts(files, output, config.base())?;
            log!("import"; "converted {} posts into {}", written.len(), output.display());
            Ok(())
        }
    }
}
