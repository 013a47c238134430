//! Plan Catalog
//!
//! The fixed, ordered set of offerable plans plus the feature list shown
//! identically on the pricing and checkout summary views. Pure data; the
//! catalog is never mutated after construction.

use serde::{Deserialize, Serialize};

use crate::error::{BillingError, Result};
use crate::plan::{Plan, PlanName};

/// Capabilities included with every plan
pub const PLAN_FEATURES: &[&str] = &[
    "Create unlimited dynamic QR codes",
    "Access a variety of QR types",
    "Unlimited modifications of QR codes",
    "Unlimited scans",
    "Multiple QR code download formats",
    "Unlimited users",
    "Premium customer support",
    "Cancel at anytime",
];

/// Payment methods advertised on the checkout summary
pub const PAYMENT_METHODS: &[&str] = &["VISA", "AMEX", "G Pay", "Mastercard"];

/// Ordered collection of offerable plans
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Build a catalog, enforcing its invariants:
    /// plan names unique, exactly one featured plan, discount badge only
    /// on the featured plan.
    pub fn new(plans: Vec<Plan>) -> Result<Self> {
        if plans.is_empty() {
            return Err(BillingError::CatalogInvariant("catalog is empty".into()));
        }

        for (i, plan) in plans.iter().enumerate() {
            if plans[..i].iter().any(|p| p.name == plan.name) {
                return Err(BillingError::CatalogInvariant(format!(
                    "duplicate plan name: {}",
                    plan.name
                )));
            }
            if plan.discount_label.is_some() && !plan.is_featured {
                return Err(BillingError::CatalogInvariant(format!(
                    "discount badge on non-featured plan: {}",
                    plan.name
                )));
            }
        }

        let featured = plans.iter().filter(|p| p.is_featured).count();
        if featured != 1 {
            return Err(BillingError::CatalogInvariant(format!(
                "expected exactly one featured plan, found {featured}"
            )));
        }

        tracing::debug!(plans = plans.len(), "Plan catalog constructed");
        Ok(Self { plans })
    }

    /// Plans in display order
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Look up a plan by name
    pub fn get(&self, name: PlanName) -> Option<&Plan> {
        self.plans.iter().find(|p| p.name == name)
    }

    /// The single featured ("most popular") plan
    pub fn featured(&self) -> &Plan {
        // Invariant enforced at construction: exactly one featured plan.
        self.plans
            .iter()
            .find(|p| p.is_featured)
            .unwrap_or(&self.plans[0])
    }

    /// Feature list shared by the pricing and summary views
    pub fn features(&self) -> &'static [&'static str] {
        PLAN_FEATURES
    }
}

impl Default for PlanCatalog {
    /// The reference catalog: Monthly, Annually (featured, 60% off),
    /// Quarterly.
    fn default() -> Self {
        Self {
            plans: vec![
                Plan::new(
                    PlanName::Monthly,
                    "Rs 13,967 PKR",
                    "(49.95 USD/mo)",
                    "Invoiced every month",
                ),
                Plan::featured(
                    PlanName::Annually,
                    "Rs 5,578 PKR",
                    "(19.95 USD/mo)",
                    "Invoiced every year",
                    "60%",
                ),
                Plan::new(
                    PlanName::Quarterly,
                    "Rs 8,374 PKR",
                    "(29.95 USD/mo)",
                    "Invoiced each quarter",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = PlanCatalog::default();
        let names: Vec<PlanName> = catalog.plans().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![PlanName::Monthly, PlanName::Annually, PlanName::Quarterly]
        );
    }

    #[test]
    fn test_default_catalog_featured() {
        let catalog = PlanCatalog::default();
        let featured = catalog.featured();
        assert_eq!(featured.name, PlanName::Annually);
        assert_eq!(featured.discount_label.as_deref(), Some("60%"));

        // Exactly one featured plan
        assert_eq!(catalog.plans().iter().filter(|p| p.is_featured).count(), 1);
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = PlanCatalog::default();
        assert_eq!(
            catalog.get(PlanName::Quarterly).unwrap().price,
            "Rs 8,374 PKR"
        );
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let plans = vec![
            Plan::featured(PlanName::Monthly, "a", "b", "c", "10%"),
            Plan::new(PlanName::Monthly, "a", "b", "c"),
        ];
        assert!(matches!(
            PlanCatalog::new(plans),
            Err(BillingError::CatalogInvariant(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_featured_count() {
        let none_featured = vec![Plan::new(PlanName::Monthly, "a", "b", "c")];
        assert!(PlanCatalog::new(none_featured).is_err());

        let two_featured = vec![
            Plan::featured(PlanName::Monthly, "a", "b", "c", "10%"),
            Plan::featured(PlanName::Annually, "a", "b", "c", "60%"),
        ];
        assert!(PlanCatalog::new(two_featured).is_err());
    }

    #[test]
    fn test_rejects_discount_on_regular_plan() {
        let mut plan = Plan::new(PlanName::Monthly, "a", "b", "c");
        plan.discount_label = Some("60%".into());
        let plans = vec![plan, Plan::featured(PlanName::Annually, "a", "b", "c", "60%")];
        assert!(PlanCatalog::new(plans).is_err());
    }

    #[test]
    fn test_feature_list_is_fixed() {
        assert_eq!(PLAN_FEATURES.len(), 8);
        assert_eq!(PlanCatalog::default().features(), PLAN_FEATURES);
    }
}
