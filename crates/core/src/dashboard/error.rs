//! View error types.

use thiserror::Error;
use venturehub_shared::AppError;

use crate::display::FormatError;

/// Errors raised while building or driving a dashboard view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Chart key not offered by the view.
    #[error("Unknown chart: {0}")]
    UnknownChart(String),

    /// The view rotates its charts on a timer only.
    #[error("This view does not support chart selection")]
    SelectionUnsupported,

    /// Path not linked from any dashboard.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Series labels and values do not line up.
    #[error("Series {series} has {labels} labels but {values} values")]
    SeriesMismatch {
        /// Series name.
        series: &'static str,
        /// Label count.
        labels: usize,
        /// Value count.
        values: usize,
    },

    /// Snapshot value cannot be displayed.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl From<ViewError> for AppError {
    fn from(err: ViewError) -> Self {
        Self::Validation(err.to_string())
    }
}
