//! Checkout Form
//!
//! Collects and validates the billing address for a selected plan, then
//! drives the submit transition. Entering checkout without a plan in
//! session context is an invalid entry path and redirects back to the
//! plan selector instead of rendering a broken form.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use billing_core::{
    AddressField, BillingError, CheckoutAddress, Plan, SessionContext, ValidationResult,
    PLAN_FEATURES, REQUIRED_FIELDS_MESSAGE,
};

use crate::error::Result;
use crate::gateway::GatewayHandoff;
use crate::notify::{Notification, Notifier};
use crate::router::{Route, Router};
use crate::token::SessionToken;

/// Outcome of a submit request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Handoff completed; the "processing started" notification fired
    Processing,

    /// Validation failed; the rejection notification fired, nothing changed
    Rejected,

    /// A submission was already in flight; the request was ignored
    InFlight,

    /// The session was left before the handoff completed; the deferred
    /// transition was discarded
    Cancelled,
}

/// Billing form for one checkout session
pub struct CheckoutForm {
    context: SessionContext,
    address: RwLock<CheckoutAddress>,
    submitting: AtomicBool,
    gateway: Arc<dyn GatewayHandoff>,
    notifier: Arc<dyn Notifier>,
    token: SessionToken,
}

impl std::fmt::Debug for CheckoutForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutForm")
            .field("context", &self.context)
            .field("address", &self.address)
            .field("submitting", &self.submitting)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl CheckoutForm {
    /// Open the checkout form for a session.
    ///
    /// Hard contract: without session context (e.g. direct navigation to
    /// the checkout path) this redirects back to the plan selector and
    /// returns `MissingSessionContext` — nothing is rendered.
    pub fn initialize(
        context: Option<SessionContext>,
        gateway: Arc<dyn GatewayHandoff>,
        notifier: Arc<dyn Notifier>,
        router: &dyn Router,
        token: SessionToken,
    ) -> Result<Self> {
        let Some(context) = context else {
            tracing::warn!("Checkout entered without a plan, redirecting to billing");
            router.navigate(Route::Billing, None);
            return Err(BillingError::MissingSessionContext.into());
        };

        tracing::info!(
            session = %context.id,
            plan = %context.plan.name,
            authenticated = context.auth.is_authenticated(),
            "Checkout opened"
        );

        Ok(Self {
            context,
            address: RwLock::new(CheckoutAddress::new()),
            submitting: AtomicBool::new(false),
            gateway,
            notifier,
            token,
        })
    }

    /// The plan being purchased
    pub fn plan(&self) -> &Plan {
        &self.context.plan
    }

    /// Snapshot of the billing address as entered so far
    pub fn address(&self) -> CheckoutAddress {
        self.address.read().unwrap().clone()
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Feature list for the summary view
    pub fn features(&self) -> &'static [&'static str] {
        PLAN_FEATURES
    }

    /// Renewal sentence for the summary view
    pub fn renewal_notice(&self) -> String {
        format!(
            "The selected plan provides access to Online QR Generator and renews every {} at {} until canceled. Cancel anytime directly from your account.",
            self.context.plan.name.renewal_period(),
            self.context.plan.price_detail,
        )
    }

    /// Set a billing address field
    pub fn set_field(&self, field: AddressField, value: impl Into<String>) -> Result<()> {
        self.address.write().unwrap().set_field(field, value)?;
        Ok(())
    }

    /// Validate the form without submitting it
    pub fn validate(&self) -> ValidationResult {
        self.address.read().unwrap().validate()
    }

    /// Submit the billing form.
    ///
    /// Invalid forms fire exactly one rejection notification and mutate
    /// nothing; entered values stay on screen. Valid forms flip the
    /// submitting flag for the duration of the gateway handoff and finish
    /// with exactly one "processing started" notification — the terminal
    /// observable effect of the flow. Re-invocations while submitting are
    /// ignored.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        if self.is_submitting() {
            tracing::debug!(session = %self.context.id, "Submission already in flight, ignoring request");
            return Ok(SubmitOutcome::InFlight);
        }

        let validation = self.validate();
        if !validation.is_valid() {
            tracing::info!(session = %self.context.id, "Billing form rejected by validation");
            self.notifier
                .notify(Notification::destructive(REQUIRED_FIELDS_MESSAGE));
            return Ok(SubmitOutcome::Rejected);
        }

        if self.submitting.swap(true, Ordering::SeqCst) {
            return Ok(SubmitOutcome::InFlight);
        }

        let address = self.address();
        tracing::info!(
            session = %self.context.id,
            plan = %self.context.plan.name,
            "Submitting billing form"
        );

        let handoff = self
            .gateway
            .begin_submission(&self.context.plan, &address)
            .await;

        self.submitting.store(false, Ordering::SeqCst);

        if self.token.is_cancelled() {
            tracing::debug!(session = %self.context.id, "Session left mid-handoff, discarding stale submit completion");
            return Ok(SubmitOutcome::Cancelled);
        }

        if let Err(e) = handoff {
            tracing::warn!(session = %self.context.id, error = %e, "Submission handoff failed");
            return Err(e);
        }

        tracing::info!(session = %self.context.id, "Processing started, handing off to payment gateway");
        self.notifier.notify(
            Notification::info("Payment processing")
                .with_description("Redirecting to payment gateway..."),
        );

        Ok(SubmitOutcome::Processing)
    }
}
