//! `cpekit validate` command handler

use std::io::Write;

use serde::Serialize;

use cpekit_core::{ParserConfig, detect, parse_with};

use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Validity report.
#[derive(Serialize)]
pub struct ValidateReport {
    /// Whether the string parsed successfully.
    pub valid: bool,
    /// Detected dialect, when the prefix matched either form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    /// Failure message for invalid input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Render for ValidateReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        if self.valid {
            match &self.dialect {
                Some(dialect) => writeln!(w, "valid (CPE {dialect})"),
                None => writeln!(w, "valid"),
            }
        } else {
            match &self.error {
                Some(error) => writeln!(w, "invalid: {error}"),
                None => writeln!(w, "invalid"),
            }
        }
    }
}

/// Execute the `validate` command.
///
/// Renders a report either way; invalid input additionally surfaces the
/// parse error so the process exits nonzero.
pub fn execute(
    cpe_string: &str,
    parser: &ParserConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let dialect = detect(cpe_string, parser).ok();

    match parse_with(cpe_string, parser) {
        Ok(_) => {
            let report = ValidateReport {
                valid: true,
                dialect: dialect.map(|d| d.to_string()),
                error: None,
            };
            writer.render(&report)?;
            Ok(())
        }
        Err(err) => {
            let report = ValidateReport {
                valid: false,
                dialect: dialect.map(|d| d.to_string()),
                error: Some(err.to_string()),
            };
            writer.render(&report)?;
            Err(CliError::Cpe(err))
        }
    }
}
