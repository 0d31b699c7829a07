/// Error type shared by all vLens services and assemblers.
///
/// Every failure resolves to one of these classes; none is fatal to the
/// caller, which is expected to surface the message and clear any loading
/// state tied to the failed operation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External API error: {0}")]
    ExternalApiError(String),

    /// A response body that did not match the documented shape. Raised at the
    /// parse boundary so that undefined-style payloads never reach the
    /// derivation layer.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Wallet-side failures: user rejection, missing connection, broadcast
    /// errors. Surfaced as a blocking message, no retry.
    #[error("Wallet error: {0}")]
    WalletError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::MalformedResponse(err.to_string())
        } else {
            AppError::ExternalApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::ConfigError(format!("Invalid URL: {}", err))
    }
}
