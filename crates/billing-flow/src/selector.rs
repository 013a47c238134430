//! Plan Selector
//!
//! Renders the catalog and drives the "buy" transition: at most one
//! purchase may be pending at a time, the pending plan shows a busy
//! indicator, and completion hands the selected plan to checkout as
//! session context via the router.

use std::sync::{Arc, RwLock};

use billing_core::{AuthContext, Plan, PlanCatalog, PlanName, SessionContext};

use crate::error::Result;
use crate::gateway::GatewayHandoff;
use crate::router::{Route, Router};
use crate::token::SessionToken;

/// Outcome of a purchase request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Handoff completed; checkout was opened with this session context
    CheckoutOpened(SessionContext),

    /// Another purchase was already pending; the request was ignored
    AlreadyPending,

    /// The session was left before the handoff completed; the deferred
    /// transition was discarded
    Cancelled,
}

/// Plan selection surface
pub struct PlanSelector {
    catalog: PlanCatalog,
    auth: AuthContext,
    pending: RwLock<Option<PlanName>>,
    gateway: Arc<dyn GatewayHandoff>,
    router: Arc<dyn Router>,
    token: SessionToken,
}

impl PlanSelector {
    pub fn new(
        catalog: PlanCatalog,
        auth: AuthContext,
        gateway: Arc<dyn GatewayHandoff>,
        router: Arc<dyn Router>,
        token: SessionToken,
    ) -> Self {
        Self {
            catalog,
            auth,
            pending: RwLock::new(None),
            gateway,
            router,
            token,
        }
    }

    /// The catalog in display order
    pub fn list_plans(&self) -> &[Plan] {
        self.catalog.plans()
    }

    /// The plan currently in the "buy" transition, if any
    pub fn pending_plan(&self) -> Option<PlanName> {
        *self.pending.read().unwrap()
    }

    /// Whether this plan's purchase control should show its busy indicator
    pub fn is_pending(&self, name: PlanName) -> bool {
        self.pending_plan() == Some(name)
    }

    /// Start the purchase of a plan.
    ///
    /// A single purchase may be in flight per session, enforced globally
    /// and not per plan: while one is pending, every further request is
    /// ignored, including re-requests of the pending plan itself. On
    /// completion the selected plan is handed to checkout as session
    /// context, unless the session token was cancelled meanwhile.
    pub async fn initiate_purchase(&self, name: PlanName) -> Result<PurchaseOutcome> {
        let plan = self
            .catalog
            .get(name)
            .ok_or_else(|| billing_core::BillingError::UnknownPlan(name.to_string()))?
            .clone();

        {
            let mut pending = self.pending.write().unwrap();
            if pending.is_some() {
                tracing::debug!(plan = %name, "Purchase already pending, ignoring request");
                return Ok(PurchaseOutcome::AlreadyPending);
            }
            *pending = Some(name);
        }

        tracing::info!(
            plan = %name,
            authenticated = self.auth.is_authenticated(),
            "Purchase initiated"
        );

        let handoff = self.gateway.begin_purchase(&plan).await;

        // The pending window ends with the handoff, whatever its outcome.
        *self.pending.write().unwrap() = None;

        if self.token.is_cancelled() {
            tracing::debug!(plan = %name, "Session left mid-handoff, discarding stale purchase completion");
            return Ok(PurchaseOutcome::Cancelled);
        }

        if let Err(e) = handoff {
            tracing::warn!(plan = %name, error = %e, "Purchase handoff failed");
            return Err(e);
        }

        let context = SessionContext::new(plan, self.auth.clone());
        tracing::info!(plan = %name, session = %context.id, "Purchase handoff complete, opening checkout");
        self.router.navigate(Route::Checkout, Some(context.clone()));

        Ok(PurchaseOutcome::CheckoutOpened(context))
    }
}
