use thiserror::Error;

/// Errors surfaced to the terminal driver.
///
/// The simulation itself never fails; these come from the terminal, the log
/// file, or a bad environment setting.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid setting {key}={value:?}: {reason}")]
    InvalidSetting {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
