//! Submission Controller
//!
//! Thin coordinator gluing the plan selector's and checkout form's
//! asynchronous transitions to their busy indicators and navigation and
//! notification effects. Owns no state of its own beyond the shared
//! session token; its one job is the invariant that at most one
//! asynchronous transition (purchase OR submit) is in flight per session.

use std::sync::{Arc, RwLock};

use billing_core::{AuthContext, BillingError, Plan, PlanCatalog, PlanName, SessionContext};

use crate::checkout::{CheckoutForm, SubmitOutcome};
use crate::error::Result;
use crate::gateway::GatewayHandoff;
use crate::notify::Notifier;
use crate::router::Router;
use crate::selector::{PlanSelector, PurchaseOutcome};
use crate::token::SessionToken;

/// One billing session: plan selection through gateway handoff
pub struct CheckoutFlow {
    selector: Arc<PlanSelector>,
    form: RwLock<Option<Arc<CheckoutForm>>>,
    gateway: Arc<dyn GatewayHandoff>,
    router: Arc<dyn Router>,
    notifier: Arc<dyn Notifier>,
    token: SessionToken,
}

impl CheckoutFlow {
    pub fn new(
        catalog: PlanCatalog,
        auth: AuthContext,
        gateway: Arc<dyn GatewayHandoff>,
        router: Arc<dyn Router>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let token = SessionToken::new();
        let selector = Arc::new(PlanSelector::new(
            catalog,
            auth,
            gateway.clone(),
            router.clone(),
            token.clone(),
        ));

        Self {
            selector,
            form: RwLock::new(None),
            gateway,
            router,
            notifier,
            token,
        }
    }

    /// The plan selection surface
    pub fn selector(&self) -> &PlanSelector {
        &self.selector
    }

    /// The catalog in display order
    pub fn plans(&self) -> &[Plan] {
        self.selector.list_plans()
    }

    /// The open checkout form, if the flow has reached checkout
    pub fn form(&self) -> Option<Arc<CheckoutForm>> {
        self.form.read().unwrap().clone()
    }

    /// Whether any asynchronous transition is in flight
    pub fn is_busy(&self) -> bool {
        self.selector.pending_plan().is_some()
            || self.form().is_some_and(|f| f.is_submitting())
    }

    /// Buy a plan: run the purchase transition and, on completion, open
    /// the checkout form with the handed-off session context.
    pub async fn buy(&self, name: PlanName) -> Result<PurchaseOutcome> {
        if self.is_busy() {
            tracing::debug!(plan = %name, "Flow busy, ignoring purchase request");
            return Ok(PurchaseOutcome::AlreadyPending);
        }

        let outcome = self.selector.initiate_purchase(name).await?;

        if let PurchaseOutcome::CheckoutOpened(context) = &outcome {
            let form = CheckoutForm::initialize(
                Some(context.clone()),
                self.gateway.clone(),
                self.notifier.clone(),
                self.router.as_ref(),
                self.token.clone(),
            )?;
            *self.form.write().unwrap() = Some(Arc::new(form));
        }

        Ok(outcome)
    }

    /// Enter checkout directly (e.g. from a restored navigation), with or
    /// without session context. Missing context redirects back to billing.
    pub fn enter_checkout(&self, context: Option<SessionContext>) -> Result<Arc<CheckoutForm>> {
        let form = Arc::new(CheckoutForm::initialize(
            context,
            self.gateway.clone(),
            self.notifier.clone(),
            self.router.as_ref(),
            self.token.clone(),
        )?);
        *self.form.write().unwrap() = Some(form.clone());
        Ok(form)
    }

    /// Submit the open checkout form
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        if self.selector.pending_plan().is_some() {
            tracing::debug!("Purchase pending, ignoring submit request");
            return Ok(SubmitOutcome::InFlight);
        }

        let form = self
            .form()
            .ok_or(BillingError::MissingSessionContext)?;
        form.submit().await
    }

    /// Leave the billing surface. Cancels the session token so any
    /// dangling handoff completion is discarded, and drops the form.
    pub fn leave(&self) {
        tracing::info!("Leaving billing surface, cancelling session");
        self.token.cancel();
        *self.form.write().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowError;
    use crate::gateway::{InstantGateway, ManualGateway};
    use crate::notify::{MemoryNotifier, Severity};
    use crate::router::{MemoryRouter, Route};
    use billing_core::{AddressField, ValidationResult, REQUIRED_FIELDS_MESSAGE};
    use std::time::Duration;

    struct Harness {
        flow: Arc<CheckoutFlow>,
        router: Arc<MemoryRouter>,
        notifier: Arc<MemoryNotifier>,
    }

    fn harness(gateway: Arc<dyn GatewayHandoff>) -> Harness {
        let router = Arc::new(MemoryRouter::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let flow = Arc::new(CheckoutFlow::new(
            PlanCatalog::default(),
            AuthContext::for_user("user-42"),
            gateway,
            router.clone(),
            notifier.clone(),
        ));
        Harness { flow, router, notifier }
    }

    #[tokio::test]
    async fn test_happy_path_annually() {
        let h = harness(Arc::new(InstantGateway));

        // User selects Annually; after the handoff, checkout opens with it.
        let outcome = h.flow.buy(PlanName::Annually).await.unwrap();
        assert!(matches!(outcome, PurchaseOutcome::CheckoutOpened(_)));
        assert_eq!(h.router.last().unwrap().0, Route::Checkout);

        let form = h.flow.form().expect("checkout form should be open");
        assert_eq!(form.plan().name, PlanName::Annually);

        form.set_field(AddressField::FullName, "Jane Doe").unwrap();
        form.set_field(AddressField::Country, "Pakistan").unwrap();
        form.set_field(AddressField::AddressLine1, "123 Main St").unwrap();
        form.set_field(AddressField::City, "Lahore").unwrap();
        form.set_field(AddressField::PostalCode, "54000").unwrap();
        assert_eq!(form.validate(), ValidationResult::Valid);

        let outcome = h.flow.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Processing);
        assert!(!form.is_submitting());
        assert!(!h.flow.is_busy());

        let notifications = h.notifier.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "Payment processing");
    }

    #[tokio::test]
    async fn test_empty_country_is_rejected() {
        let h = harness(Arc::new(InstantGateway));
        h.flow.buy(PlanName::Annually).await.unwrap();

        let form = h.flow.form().unwrap();
        form.set_field(AddressField::FullName, "Jane Doe").unwrap();
        form.set_field(AddressField::AddressLine1, "123 Main St").unwrap();
        form.set_field(AddressField::City, "Lahore").unwrap();
        form.set_field(AddressField::PostalCode, "54000").unwrap();
        assert_eq!(form.validate(), ValidationResult::Invalid);

        let outcome = h.flow.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(!form.is_submitting());

        let notifications = h.notifier.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].severity, Severity::Destructive);
        assert_eq!(notifications[0].title, REQUIRED_FIELDS_MESSAGE);
    }

    #[tokio::test]
    async fn test_busy_flow_ignores_further_requests() {
        let gateway = Arc::new(ManualGateway::new());
        let h = harness(gateway.clone());

        let flow = h.flow.clone();
        let handle = tokio::spawn(async move { flow.buy(PlanName::Monthly).await });
        while h.flow.selector().pending_plan().is_none() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        assert!(h.flow.is_busy());

        let outcome = h.flow.buy(PlanName::Quarterly).await.unwrap();
        assert_eq!(outcome, PurchaseOutcome::AlreadyPending);

        // Submit is gated too: one async transition per session.
        let outcome = h.flow.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::InFlight);

        gateway.release();
        let outcome = handle.await.unwrap().unwrap();
        assert!(matches!(outcome, PurchaseOutcome::CheckoutOpened(_)));
        assert!(!h.flow.is_busy());
    }

    #[tokio::test]
    async fn test_leave_discards_dangling_purchase() {
        let gateway = Arc::new(ManualGateway::new());
        let h = harness(gateway.clone());

        let flow = h.flow.clone();
        let handle = tokio::spawn(async move { flow.buy(PlanName::Annually).await });
        while h.flow.selector().pending_plan().is_none() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        h.flow.leave();
        gateway.release();

        let outcome = handle.await.unwrap().unwrap();
        assert_eq!(outcome, PurchaseOutcome::Cancelled);
        assert!(h.flow.form().is_none());
        assert!(h.router.is_empty());
        assert!(h.notifier.is_empty());
    }

    #[tokio::test]
    async fn test_direct_checkout_entry_without_plan_redirects() {
        let h = harness(Arc::new(InstantGateway));

        let err = h.flow.enter_checkout(None).unwrap_err();
        assert!(matches!(
            err,
            FlowError::Core(BillingError::MissingSessionContext)
        ));
        assert_eq!(h.router.last(), Some((Route::Billing, None)));
        assert!(h.flow.form().is_none());
    }

    #[tokio::test]
    async fn test_submit_without_checkout_is_an_error() {
        let h = harness(Arc::new(InstantGateway));
        let err = h.flow.submit().await.unwrap_err();
        assert!(matches!(
            err,
            FlowError::Core(BillingError::MissingSessionContext)
        ));
    }
}
