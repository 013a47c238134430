//! Gateway Handoff Seam
//!
//! The two asynchronous transitions in the flow (purchase initiation and
//! form submission) go through this trait, so the simulated latency can be
//! swapped for a real gateway client, an immediately-resolving stand-in in
//! tests, or a held one for asserting in-flight state.

use async_trait::async_trait;
use tokio::sync::Notify;

use billing_core::{CheckoutAddress, Plan};

use crate::config::FlowConfig;
use crate::error::Result;

/// Strategy trait for the payment gateway handoff
///
/// Implement this to plug in a real gateway. The flow works exclusively
/// through this interface and never assumes how long a handoff takes.
#[async_trait]
pub trait GatewayHandoff: Send + Sync {
    /// Begin gateway initiation for a plan purchase
    async fn begin_purchase(&self, plan: &Plan) -> Result<()>;

    /// Begin payment processing for a completed billing form
    async fn begin_submission(&self, plan: &Plan, address: &CheckoutAddress) -> Result<()>;

    /// Gateway name (for logs)
    fn name(&self) -> &str;
}

/// Simulated gateway with fixed latency per transition
///
/// Stands in for real gateway calls during development. Never fails.
pub struct SimulatedGateway {
    config: FlowConfig,
}

impl SimulatedGateway {
    pub fn new(config: FlowConfig) -> Self {
        Self { config }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(FlowConfig::default())
    }
}

#[async_trait]
impl GatewayHandoff for SimulatedGateway {
    async fn begin_purchase(&self, plan: &Plan) -> Result<()> {
        tracing::debug!(plan = %plan.name, delay_ms = self.config.purchase_delay.as_millis() as u64, "Simulating purchase handoff");
        tokio::time::sleep(self.config.purchase_delay).await;
        Ok(())
    }

    async fn begin_submission(&self, plan: &Plan, _address: &CheckoutAddress) -> Result<()> {
        tracing::debug!(plan = %plan.name, delay_ms = self.config.submit_delay.as_millis() as u64, "Simulating submission handoff");
        tokio::time::sleep(self.config.submit_delay).await;
        Ok(())
    }

    fn name(&self) -> &str {
        "SimulatedGateway"
    }
}

/// Gateway stand-in that resolves immediately (for tests and demos)
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantGateway;

#[async_trait]
impl GatewayHandoff for InstantGateway {
    async fn begin_purchase(&self, _plan: &Plan) -> Result<()> {
        Ok(())
    }

    async fn begin_submission(&self, _plan: &Plan, _address: &CheckoutAddress) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "InstantGateway"
    }
}

/// Gateway stand-in that holds each handoff until released
///
/// Lets tests observe the pending/submitting window deterministically
/// instead of racing a real delay.
#[derive(Debug, Default)]
pub struct ManualGateway {
    gate: Notify,
}

impl ManualGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Release one held handoff (or the next one to arrive)
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl GatewayHandoff for ManualGateway {
    async fn begin_purchase(&self, _plan: &Plan) -> Result<()> {
        self.gate.notified().await;
        Ok(())
    }

    async fn begin_submission(&self, _plan: &Plan, _address: &CheckoutAddress) -> Result<()> {
        self.gate.notified().await;
        Ok(())
    }

    fn name(&self) -> &str {
        "ManualGateway"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_core::{PlanCatalog, PlanName};
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_instant_gateway_resolves() {
        let catalog = PlanCatalog::default();
        let plan = catalog.get(PlanName::Monthly).unwrap();
        assert!(InstantGateway.begin_purchase(plan).await.is_ok());
        assert!(InstantGateway
            .begin_submission(plan, &CheckoutAddress::new())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_simulated_gateway_waits() {
        let config = FlowConfig {
            purchase_delay: Duration::from_millis(20),
            submit_delay: Duration::from_millis(20),
        };
        let gateway = SimulatedGateway::new(config);
        let catalog = PlanCatalog::default();
        let plan = catalog.get(PlanName::Annually).unwrap();

        let start = Instant::now();
        gateway.begin_purchase(plan).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_manual_gateway_holds_until_released() {
        use std::sync::Arc;

        let gateway = Arc::new(ManualGateway::new());
        let catalog = PlanCatalog::default();
        let plan = catalog.get(PlanName::Quarterly).unwrap().clone();

        let g = gateway.clone();
        let handle = tokio::spawn(async move { g.begin_purchase(&plan).await });

        // Give the task a chance to park on the gate.
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(!handle.is_finished());

        gateway.release();
        handle.await.unwrap().unwrap();
    }
}
