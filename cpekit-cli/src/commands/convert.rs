//! `cpekit convert` command handler

use std::io::Write;

use serde::Serialize;
use tracing::info;

use cpekit_core::{ParserConfig, detect, parse_with, to_uri_string};

use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Conversion result report.
#[derive(Serialize)]
pub struct ConvertReport {
    /// Dialect of the input string ("2.2" or "2.3").
    pub source_dialect: String,
    /// The CPE 2.2 URI rendering.
    pub uri: String,
}

impl Render for ConvertReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{}", self.uri)
    }
}

/// Execute the `convert` command.
///
/// CPE 2.3-only fields (swEdition/targetSw/targetHw/other) are not
/// re-packed into the 2.2 edition field and are dropped by the 2.2
/// rendering.
pub fn execute(
    cpe_string: &str,
    parser: &ParserConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let dialect = detect(cpe_string, parser)?;
    let cpe = parse_with(cpe_string, parser)?;
    let uri = to_uri_string(&cpe)?;
    info!(source_dialect = %dialect, uri = %uri, "converted cpe string");

    let report = ConvertReport {
        source_dialect: dialect.to_string(),
        uri,
    };
    writer.render(&report)?;
    Ok(())
}
