//! Error type for chart generation.

use kundli_time::TimeError;
use thiserror::Error;

/// Errors surfaced to the caller of [`generate_chart`](crate::generate_chart).
///
/// Only invalid input fails a chart. An unknown place or an unavailable
/// ascendant degrades the result instead; see
/// [`ChartQuality`](crate::ChartQuality).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// A required birth field was missing or empty.
    #[error("invalid birth data: {0}")]
    Validation(String),
    /// Date or time did not parse, or the local time does not exist.
    #[error("invalid birth data: {0}")]
    Time(#[from] TimeError),
    /// Configuration failed to parse or is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ChartError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::Validation(format!("{field} is required"))
    }
}
