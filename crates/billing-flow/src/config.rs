//! Flow Configuration
//!
//! Delays for the simulated gateway transitions. The reference values stand
//! in for real gateway latency; they are placeholders, not contract values,
//! but must stay nonzero so the busy states remain observable.

use std::time::Duration;

use billing_core::BillingError;

use crate::error::Result;

/// Default delay before the purchase handoff completes
pub const DEFAULT_PURCHASE_DELAY: Duration = Duration::from_millis(1200);

/// Default delay before the form submission completes
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Timing configuration for the simulated gateway
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowConfig {
    /// Latency of the plan purchase handoff
    pub purchase_delay: Duration,

    /// Latency of the billing form submission
    pub submit_delay: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            purchase_delay: DEFAULT_PURCHASE_DELAY,
            submit_delay: DEFAULT_SUBMIT_DELAY,
        }
    }
}

impl FlowConfig {
    /// Read delay overrides from the environment.
    ///
    /// `BILLING_PURCHASE_DELAY_MS` and `BILLING_SUBMIT_DELAY_MS`, in
    /// milliseconds. Missing variables fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            purchase_delay: parse_delay(
                "BILLING_PURCHASE_DELAY_MS",
                std::env::var("BILLING_PURCHASE_DELAY_MS").ok(),
                DEFAULT_PURCHASE_DELAY,
            )?,
            submit_delay: parse_delay(
                "BILLING_SUBMIT_DELAY_MS",
                std::env::var("BILLING_SUBMIT_DELAY_MS").ok(),
                DEFAULT_SUBMIT_DELAY,
            )?,
        })
    }
}

fn parse_delay(name: &str, raw: Option<String>, default: Duration) -> Result<Duration> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let millis: u64 = raw
        .trim()
        .parse()
        .map_err(|_| BillingError::Config(format!("{name} is not a valid millisecond count: {raw}")))?;

    if millis == 0 {
        return Err(BillingError::Config(format!("{name} must be nonzero")).into());
    }

    Ok(Duration::from_millis(millis))
}
