pub mod json;
pub mod md;
pub mod sarif;

use crate::error::ReadabilityError;
use crate::types::report::BatchReport;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

pub fn render(report: &BatchReport, format: OutputFormat) -> Result<String, ReadabilityError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ReadabilityError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Sarif => sarif::to_sarif(report).map_err(ReadabilityError::Json),
    }
}
