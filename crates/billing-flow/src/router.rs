//! Router Collaborator
//!
//! Navigation is an external collaborator: the flow hands it a destination
//! and optional session context and never looks back. The selected plan
//! travels as in-memory context, never as URL state.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use billing_core::SessionContext;

/// Destinations the flow navigates between
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Billing,
    Checkout,
}

impl Route {
    pub fn path(&self) -> &str {
        match self {
            Route::Billing => "/billing",
            Route::Checkout => "/checkout",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Navigation collaborator trait
pub trait Router: Send + Sync {
    /// Move to a destination, optionally carrying session context
    fn navigate(&self, route: Route, context: Option<SessionContext>);
}

/// In-memory router that records navigations (for tests and demos)
#[derive(Default)]
pub struct MemoryRouter {
    log: RwLock<Vec<(Route, Option<SessionContext>)>>,
}

impl MemoryRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded navigations, oldest first
    pub fn navigations(&self) -> Vec<(Route, Option<SessionContext>)> {
        self.log.read().unwrap().clone()
    }

    /// The most recent navigation, if any
    pub fn last(&self) -> Option<(Route, Option<SessionContext>)> {
        self.log.read().unwrap().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.log.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Router for MemoryRouter {
    fn navigate(&self, route: Route, context: Option<SessionContext>) {
        tracing::debug!(route = %route, has_context = context.is_some(), "Navigating");
        self.log.write().unwrap().push((route, context));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_core::{AuthContext, Plan, PlanName};

    #[test]
    fn test_routes_have_paths() {
        assert_eq!(Route::Billing.path(), "/billing");
        assert_eq!(Route::Checkout.path(), "/checkout");
    }

    #[test]
    fn test_memory_router_records() {
        let router = MemoryRouter::new();
        assert!(router.is_empty());

        let plan = Plan::new(PlanName::Monthly, "a", "b", "c");
        let context = SessionContext::new(plan, AuthContext::anonymous());
        router.navigate(Route::Checkout, Some(context.clone()));
        router.navigate(Route::Billing, None);

        assert_eq!(router.len(), 2);
        assert_eq!(router.navigations()[0].0, Route::Checkout);
        assert_eq!(router.last(), Some((Route::Billing, None)));
    }
}
