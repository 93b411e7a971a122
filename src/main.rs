//! docthemer - theme registry for documentation sites.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use std::path::Path;

use docthemer::cli::{self, Cli, Commands, render};
use docthemer::config::ThemeConfig;
use docthemer::logger;
use docthemer::registry::{ConfigRegistry, SystemYear, install_registry};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // init runs before any config exists
    if let Commands::Init { dir, force } = &cli.command {
        let dir = dir.as_deref().unwrap_or(Path::new("."));
        cli::init::write_theme(dir, *force)?;
        return Ok(());
    }

    let config = ThemeConfig::load(&cli.config)?;
    let registry = install_registry(ConfigRegistry::new(config)?)?;

    match &cli.command {
        Commands::Init { .. } => {} // handled before loading
        Commands::Check => render::check(&registry),
        Commands::Head { args } => render::print(&render::head(&registry, args)?),
        Commands::Seo { path, title } => {
            render::print(&render::seo(&registry, path, title.as_deref())?)
        }
        Commands::Logo { hovered } => render::print(&render::logo(&registry, *hovered)),
        Commands::Footer => render::print(&render::footer(&registry, &SystemYear)?),
        Commands::Build { args } => cli::build::build(&registry, args)?,
        Commands::Dump => render::print(&render::dump(&registry, &SystemYear)?),
    }

    Ok(())
}
