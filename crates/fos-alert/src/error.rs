//! Alert errors

/// Alert error
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("Settings unavailable: {0}")]
    SettingsUnavailable(String),

    #[error("Invalid settings URL: {0}")]
    InvalidSettingsUrl(#[from] url::ParseError),

    #[error("Already waiting for the app to return from settings")]
    AlreadyAwaiting,

    #[error("No action {0} in dialog")]
    NoSuchAction(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
