//! Flow Error Types

use thiserror::Error;

/// Result type alias for flow operations
pub type Result<T> = std::result::Result<T, FlowError>;

/// Checkout flow errors
#[derive(Error, Debug)]
pub enum FlowError {
    /// Domain error from the billing core
    #[error(transparent)]
    Core(#[from] billing_core::BillingError),

    /// Payment gateway handoff failed
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl FlowError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, FlowError::Gateway(_))
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            FlowError::Core(e) => e.user_message(),
            FlowError::Gateway(_) => "Payment processing failed. Please try again.",
            FlowError::Other(_) => "An error occurred processing your request.",
        }
    }
}

impl From<anyhow::Error> for FlowError {
    fn from(err: anyhow::Error) -> Self {
        FlowError::Other(err.to_string())
    }
}
