// Dashboard errors
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("row {index} is out of range for {len} sites")]
    RowOutOfRange { index: usize, len: usize },

    #[error("failed to serialize chart data: {0}")]
    Render(#[from] serde_json::Error),
}
