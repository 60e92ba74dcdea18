//! `export` command: print the theme in the host renderer's schema.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use super::{Cli, check::report_unknown_fields, load_config};
use crate::schema::HostTheme;
use crate::theme::{Clock, FixedClock, SystemClock, ThemeConfiguration};
use crate::{debug, log};

pub fn run(cli: &Cli, year: Option<u16>, output: Option<&Path>) -> Result<()> {
    let (path, loaded) = load_config(cli)?;
    report_unknown_fields(&path, &loaded.unknown_fields, false)?;

    let clock: Box<dyn Clock> = match year {
        Some(year) => Box::new(FixedClock(year)),
        None => Box::new(SystemClock),
    };
    debug!("export"; "footer year {}", clock.current_year());

    let theme = ThemeConfiguration::from_config(&loaded.config, clock.as_ref())?;
    theme.diagnostics().print_warnings();
    let json = export_json(&theme)?;

    match output {
        Some(output) => {
            fs::write(output, &json)
                .with_context(|| format!("Failed to write '{}'", output.display()))?;
            log!("export"; "wrote {}", output.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Host-schema JSON for a built theme.
pub fn export_json(theme: &ThemeConfiguration) -> Result<String> {
    Ok(HostTheme::from_theme(theme).to_json_pretty()?)
}
