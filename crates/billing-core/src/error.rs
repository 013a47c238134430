//! Error Types

use thiserror::Error;

/// Result type alias for billing operations
pub type Result<T> = std::result::Result<T, BillingError>;

/// Billing domain errors
#[derive(Error, Debug)]
pub enum BillingError {
    /// Required form fields missing or empty
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Checkout entered without a selected plan in session context
    #[error("No plan in session context")]
    MissingSessionContext,

    /// Plan name not present in the catalog
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    /// Country outside the supported list
    #[error("Unsupported country: {0}")]
    UnsupportedCountry(String),

    /// Catalog failed an invariant check at construction
    #[error("Catalog invariant violated: {0}")]
    CatalogInvariant(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl BillingError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            BillingError::Validation(_) => "Please fill all required fields",
            BillingError::MissingSessionContext => "Select a plan before checking out.",
            BillingError::UnknownPlan(_) => "That plan is not available.",
            BillingError::UnsupportedCountry(_) => "We can't bill that country yet.",
            BillingError::Config(_) => "Service configuration error.",
            _ => "An error occurred processing your request.",
        }
    }
}

impl From<anyhow::Error> for BillingError {
    fn from(err: anyhow::Error) -> Self {
        BillingError::Other(err.to_string())
    }
}
