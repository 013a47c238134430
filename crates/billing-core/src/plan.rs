//! Subscription Plans
//!
//! Plan records carry display pricing only. Prices are pre-formatted
//! localized strings; no arithmetic is ever performed on them.

use serde::{Deserialize, Serialize};

use crate::error::{BillingError, Result};

/// Subscription plan tiers (closed set)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanName {
    Monthly,
    Annually,
    Quarterly,
}

impl PlanName {
    pub fn as_str(&self) -> &str {
        match self {
            PlanName::Monthly => "Monthly",
            PlanName::Annually => "Annually",
            PlanName::Quarterly => "Quarterly",
        }
    }

    /// Parse from string, rejecting anything outside the closed set
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(PlanName::Monthly),
            "annually" => Ok(PlanName::Annually),
            "quarterly" => Ok(PlanName::Quarterly),
            _ => Err(BillingError::UnknownPlan(s.to_string())),
        }
    }

    /// Human-readable renewal period for the checkout summary sentence
    pub fn renewal_period(&self) -> &str {
        match self {
            PlanName::Monthly => "1 month",
            PlanName::Annually => "1 year",
            PlanName::Quarterly => "3 months",
        }
    }
}

impl std::fmt::Display for PlanName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A purchasable subscription plan with display pricing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan tier
    pub name: PlanName,

    /// Localized display price (e.g., "Rs 5,578 PKR")
    pub price: String,

    /// Alternate-currency equivalent (e.g., "(19.95 USD/mo)")
    pub price_detail: String,

    /// Human-readable billing cadence (e.g., "Invoiced every year")
    pub interval: String,

    /// Whether this plan gets the "most popular" emphasis
    pub is_featured: bool,

    /// Discount badge text, present only on the featured plan
    pub discount_label: Option<String>,
}

impl Plan {
    /// Create a regular (non-featured) plan
    pub fn new(
        name: PlanName,
        price: impl Into<String>,
        price_detail: impl Into<String>,
        interval: impl Into<String>,
    ) -> Self {
        Self {
            name,
            price: price.into(),
            price_detail: price_detail.into(),
            interval: interval.into(),
            is_featured: false,
            discount_label: None,
        }
    }

    /// Create the featured plan with its discount badge
    pub fn featured(
        name: PlanName,
        price: impl Into<String>,
        price_detail: impl Into<String>,
        interval: impl Into<String>,
        discount_label: impl Into<String>,
    ) -> Self {
        Self {
            name,
            price: price.into(),
            price_detail: price_detail.into(),
            interval: interval.into(),
            is_featured: true,
            discount_label: Some(discount_label.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_name_parse() {
        assert_eq!(PlanName::parse("Annually").unwrap(), PlanName::Annually);
        assert_eq!(PlanName::parse("monthly").unwrap(), PlanName::Monthly);
        assert!(matches!(
            PlanName::parse("weekly"),
            Err(BillingError::UnknownPlan(_))
        ));
    }

    #[test]
    fn test_renewal_periods() {
        assert_eq!(PlanName::Monthly.renewal_period(), "1 month");
        assert_eq!(PlanName::Annually.renewal_period(), "1 year");
        assert_eq!(PlanName::Quarterly.renewal_period(), "3 months");
    }

    #[test]
    fn test_featured_plan_carries_discount() {
        let plan = Plan::featured(
            PlanName::Annually,
            "Rs 5,578 PKR",
            "(19.95 USD/mo)",
            "Invoiced every year",
            "60%",
        );
        assert!(plan.is_featured);
        assert_eq!(plan.discount_label.as_deref(), Some("60%"));
    }
}
