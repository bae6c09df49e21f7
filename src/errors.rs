use thiserror::Error;

/// Error type that captures common finance-store failures.
///
/// Clamping and unknown-id lookups are deliberately *not* errors: the stores
/// treat those as silent no-ops. Only precondition rejections (an invalid
/// goal or earning that must not be inserted) surface here, alongside the
/// IO/serde failures of the config layer.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),
    #[error("Invalid earning: {0}")]
    InvalidEarning(String),
}
