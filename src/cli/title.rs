//! `title` command: compose a page's browser title.

use anyhow::Result;

use super::{Cli, check::report_unknown_fields, load_config};
use crate::theme::{SystemClock, ThemeConfiguration};

pub fn run(cli: &Cli, page_title: &str) -> Result<()> {
    let (path, loaded) = load_config(cli)?;
    report_unknown_fields(&path, &loaded.unknown_fields, false)?;

    // Footer year does not affect the title.
    let theme = ThemeConfiguration::from_config(&loaded.config, &SystemClock)?;
    theme.diagnostics().print_warnings();
    println!("{}", theme.compose_title(page_title));
    Ok(())
}
