//! # billing-flow
//!
//! The checkout state machine for the QR generator's billing surface:
//! plan selection, billing form collection and validation, and the
//! asynchronous handoff to a payment gateway.
//!
//! ```text
//! ┌──────────────┐  buy (pending…)  ┌───────────────┐  submit (…)  ┌──────────────┐
//! │ PlanSelector │─────────────────▶│ CheckoutForm  │─────────────▶│   Gateway    │
//! │  (catalog)   │  SessionContext  │ (validation)  │ notification │   handoff    │
//! └──────────────┘                  └───────────────┘              └──────────────┘
//! ```
//!
//! The two asynchronous transitions go through the [`GatewayHandoff`]
//! trait, so tests inject an immediately-resolving or held stand-in
//! instead of waiting on real delays. Navigation and notifications are
//! external collaborators behind the [`Router`] and [`Notifier`] traits.
//! A shared [`SessionToken`] guards deferred completions against acting
//! on a session the user already left.

mod checkout;
mod config;
mod controller;
mod error;
mod gateway;
mod notify;
mod router;
mod selector;
mod token;

pub use checkout::{CheckoutForm, SubmitOutcome};
pub use config::{FlowConfig, DEFAULT_PURCHASE_DELAY, DEFAULT_SUBMIT_DELAY};
pub use controller::CheckoutFlow;
pub use error::{FlowError, Result};
pub use gateway::{GatewayHandoff, InstantGateway, ManualGateway, SimulatedGateway};
pub use notify::{MemoryNotifier, Notification, Notifier, Severity};
pub use router::{MemoryRouter, Route, Router};
pub use selector::{PlanSelector, PurchaseOutcome};
pub use token::SessionToken;
