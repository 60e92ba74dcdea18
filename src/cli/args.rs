//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Documentation theme configuration tool
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
    /// Write a theme.toml for the TurboCore docs theme
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Write a blank commented template instead of the TurboCore theme
        #[arg(short, long)]
        template: bool,
    },

    /// Validate theme.toml and report every problem
    #[command(visible_alias = "c")]
    Check {
        /// Treat unknown fields as errors
        #[arg(short, long)]
        strict: bool,
    },

    /// Build the theme and print it in the host renderer's schema (JSON)
    #[command(visible_alias = "e")]
    Export {
        /// Evaluate the footer as if the current year were YEAR
        #[arg(short, long)]
        year: Option<u16>,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Print the browser title composed for a page
    #[command(visible_alias = "t")]
    Title {
        /// Page-specific title
        page_title: String,
    },
}
