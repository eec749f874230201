//! `cpekit parse` command handler

use std::io::Write;

use serde::Serialize;
use tracing::info;

use cpekit_core::{Cpe, ParserConfig, detect, parse_with};

use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Parsed-record report.
#[derive(Serialize)]
pub struct ParseReport {
    /// Detected dialect ("2.2" or "2.3").
    pub dialect: String,
    /// The structured record.
    pub cpe: Cpe,
}

impl Render for ParseReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "Dialect: CPE {}", self.dialect)?;
        for (name, value) in self.cpe.fields() {
            if !value.is_empty() {
                writeln!(w, "{name:>10}: {value}")?;
            }
        }
        Ok(())
    }
}

/// Execute the `parse` command.
pub fn execute(
    cpe_string: &str,
    parser: &ParserConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let dialect = detect(cpe_string, parser)?;
    let cpe = parse_with(cpe_string, parser)?;
    info!(dialect = %dialect, cpe = %cpe, "parsed cpe string");

    let report = ParseReport {
        dialect: dialect.to_string(),
        cpe,
    };
    writer.render(&report)?;
    Ok(())
}
