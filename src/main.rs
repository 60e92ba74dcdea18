//! docs-theme - validate and export the documentation site theme.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use docs_theme::cli::{self, Cli, Commands};
use docs_theme::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { force, template } => {
            cli::init::write_config(&cli.config, *force, *template)
        }
        Commands::Check { strict } => cli::check::run(&cli, *strict),
        Commands::Export { year, output } => cli::export::run(&cli, *year, output.as_deref()),
        Commands::Title { page_title } => cli::title::run(&cli, page_title),
    }
}
