//! Session Context
//!
//! In-memory data carried from the plan selector into checkout. Never
//! serialized into URLs or persisted; the selected plan travels by value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::plan::Plan;

/// Unique checkout session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckoutSessionId(String);

impl CheckoutSessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CheckoutSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CheckoutSessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Explicit authentication context.
///
/// Passed into both the plan selector and the checkout form instead of
/// living in ambient global state, so a deployment can gate checkout on
/// authentication without rewiring the flow. Not enforced here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Identity-provider user ID, when signed in
    pub user_id: Option<String>,
}

impl AuthContext {
    /// Context for an anonymous visitor
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// Context for a signed-in user
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Session context handed from plan selection to checkout
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Unique identifier for this checkout session
    pub id: CheckoutSessionId,

    /// The plan being purchased
    pub plan: Plan,

    /// Who is purchasing (explicit, never ambient)
    pub auth: AuthContext,

    /// When the purchase was initiated
    pub started_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(plan: Plan, auth: AuthContext) -> Self {
        Self {
            id: CheckoutSessionId::new(),
            plan,
            auth,
            started_at: Utc::now(),
        }
    }
}
