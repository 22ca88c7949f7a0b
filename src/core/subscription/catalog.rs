//! Public plan offers and prices

use super::types::{BillingCycle, PlanTier};
use serde::Serialize;

/// A plan as advertised on the pricing page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOffer {
    pub tier: PlanTier,
    pub name: &'static str,
    pub description: &'static str,
    pub monthly_price: f64,
    pub annual_price: f64,
    pub popular: bool,
}

impl PlanOffer {
    pub fn price(&self, cycle: BillingCycle) -> f64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Annual => self.annual_price,
        }
    }

    /// What a year costs on the annual price versus twelve monthly payments
    pub fn annual_savings(&self) -> f64 {
        let savings = self.monthly_price * 12.0 - self.annual_price;
        (savings * 100.0).round() / 100.0
    }
}

/// Plan catalog
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    offers: Vec<PlanOffer>,
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self {
            offers: vec![
                PlanOffer {
                    tier: PlanTier::Free,
                    name: "Free",
                    description: "For casual students",
                    monthly_price: 0.0,
                    annual_price: 0.0,
                    popular: false,
                },
                PlanOffer {
                    tier: PlanTier::Premium,
                    name: "Premium",
                    description: "For dedicated students",
                    monthly_price: 9.99,
                    annual_price: 99.99,
                    popular: true,
                },
                PlanOffer {
                    tier: PlanTier::Academic,
                    name: "Academic",
                    description: "For serious academic achievers",
                    monthly_price: 19.99,
                    annual_price: 199.99,
                    popular: false,
                },
            ],
        }
    }
}

impl PlanCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offers(&self) -> &[PlanOffer] {
        &self.offers
    }

    pub fn offer(&self, tier: PlanTier) -> Option<&PlanOffer> {
        self.offers.iter().find(|offer| offer.tier == tier)
    }

    /// Price of a tier for a cycle; `None` for tiers with no public offer
    pub fn price(&self, tier: PlanTier, cycle: BillingCycle) -> Option<f64> {
        self.offer(tier).map(|offer| offer.price(cycle))
    }
}
