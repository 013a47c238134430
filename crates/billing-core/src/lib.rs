//! # billing-core
//!
//! Core billing domain for the QR generator's subscription surface:
//! the plan catalog, the checkout billing address with its validation
//! rules, and the session context carried from plan selection into
//! checkout.
//!
//! This crate is purely synchronous data and rules. The asynchronous
//! checkout flow (plan selector, form submission, gateway handoff) lives
//! in `billing-flow` and is built entirely on these types.

pub mod address;
pub mod catalog;
pub mod country;
pub mod error;
pub mod plan;
pub mod session;

pub use address::{AddressField, CheckoutAddress, ValidationResult, REQUIRED_FIELDS_MESSAGE};
pub use catalog::{PlanCatalog, PAYMENT_METHODS, PLAN_FEATURES};
pub use country::SUPPORTED_COUNTRIES;
pub use error::{BillingError, Result};
pub use plan::{Plan, PlanName};
pub use session::{AuthContext, CheckoutSessionId, SessionContext};
