use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Stripe {operation} request failed (HTTP {status}): {message}")]
    StripeApiError {
        operation: &'static str,
        status: u16,
        message: String,
    },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
