//! Checkout Address
//!
//! The mutable billing-address form backing one checkout session. Created
//! empty, mutated field-by-field, read once at submit time, and discarded
//! when the session ends.

use serde::{Deserialize, Serialize};

use crate::country;
use crate::error::{BillingError, Result};

/// Aggregate rejection message surfaced when validation fails
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill all required fields";

/// Named fields of the billing address form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    FullName,
    Country,
    AddressLine1,
    AddressLine2,
    City,
    PostalCode,
}

impl AddressField {
    pub fn as_str(&self) -> &str {
        match self {
            AddressField::FullName => "full_name",
            AddressField::Country => "country",
            AddressField::AddressLine1 => "address_line1",
            AddressField::AddressLine2 => "address_line2",
            AddressField::City => "city",
            AddressField::PostalCode => "postal_code",
        }
    }
}

/// Result of validating the billing form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    Valid,
    Invalid,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The aggregate rejection signal, if invalid
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid => Some(REQUIRED_FIELDS_MESSAGE),
        }
    }
}

/// Billing address collected during checkout
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutAddress {
    pub full_name: String,
    pub country: String,
    pub address_line1: String,
    /// Apt., suite, unit number, etc. (optional)
    pub address_line2: String,
    pub city: String,
    pub postal_code: String,
}

impl CheckoutAddress {
    /// Create an empty address for a new checkout session
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named field. Free text everywhere except `Country`, which
    /// must come from the supported set.
    pub fn set_field(&mut self, field: AddressField, value: impl Into<String>) -> Result<()> {
        let value = value.into();

        if field == AddressField::Country && !country::is_supported(&value) {
            return Err(BillingError::UnsupportedCountry(value));
        }

        match field {
            AddressField::FullName => self.full_name = value,
            AddressField::Country => self.country = value,
            AddressField::AddressLine1 => self.address_line1 = value,
            AddressField::AddressLine2 => self.address_line2 = value,
            AddressField::City => self.city = value,
            AddressField::PostalCode => self.postal_code = value,
        }

        Ok(())
    }

    /// Validate the form: all required fields non-empty after trimming.
    /// `address_line2` is optional. The country is re-checked against the
    /// supported set here so validation holds even for addresses that were
    /// not built through `set_field`.
    pub fn validate(&self) -> ValidationResult {
        let required = [
            &self.full_name,
            &self.country,
            &self.address_line1,
            &self.city,
            &self.postal_code,
        ];

        if required.iter().any(|f| f.trim().is_empty()) {
            return ValidationResult::Invalid;
        }

        if !country::is_supported(&self.country) {
            return ValidationResult::Invalid;
        }

        ValidationResult::Valid
    }
}
