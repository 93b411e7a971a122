//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Theme registry for documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "theme.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

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
    /// Write the default theme.toml
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Overwrite an existing theme.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Load and validate theme.toml
    #[command(visible_alias = "c")]
    Check,

    /// Print the head tags for a route
    Head {
        #[command(flatten)]
        args: HeadArgs,
    },

    /// Print the SEO props (title template, Open Graph) for a route
    Seo {
        /// Route path, e.g. `/docs/install`
        path: String,

        /// Page title to substitute into the template
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Print the logo markup
    Logo {
        /// Render the hovered state instead of idle
        #[arg(long)]
        hovered: bool,
    },

    /// Print the footer for the current year
    Footer,

    /// Render every page under a pages directory into a JSON manifest
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Print the registry snapshot as JSON
    Dump,
}

/// Head command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct HeadArgs {
    /// Route path, e.g. `/docs/install`
    pub path: String,

    /// Page file to read front matter from
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub page: Option<PathBuf>,

    /// Description override (takes precedence over --page)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Print tag descriptors as JSON instead of HTML
    #[arg(long)]
    pub json: bool,
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Pages directory (Markdown/MDX files)
    #[arg(short, long, default_value = "pages", value_hint = clap::ValueHint::DirPath)]
    pub pages: PathBuf,

    /// Write the manifest to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}
