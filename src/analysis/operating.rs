use serde::{Deserialize, Serialize};

use super::energy::EnergyBalance;
use super::feed::FeedBalance;
use crate::models::{FarmParameters, DAYS_PER_YEAR};

/// Operating costs, USD. Annual unless produced by [`OperatingCosts::daily`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingCosts {
    pub feed: f64,
    pub labor: f64,
    pub veterinary: f64,
    pub utilities: f64,
    pub marketing: f64,
    pub greenhouse_operations: f64,
    pub maintenance: f64,
    /// Grid electricity bought to cover a biogas shortfall
    pub electricity_purchase: f64,
}

impl OperatingCosts {
    pub fn compute(params: &FarmParameters, feed: &FeedBalance, energy: &EnergyBalance) -> Self {
        let costs = &params.costs;
        let herd_scale = params.herd_scale();
        let greenhouse_scale = params.greenhouse_scale();

        Self {
            feed: feed.purchase_cost_usd(params),
            // One crew shared between herd and greenhouse
            labor: costs.labor * (herd_scale + greenhouse_scale) / 2.0,
            veterinary: params.herd.cows as f64 * costs.veterinary_per_head,
            utilities: costs.utilities * herd_scale,
            marketing: costs.marketing * herd_scale,
            greenhouse_operations: costs.greenhouse_operations * greenhouse_scale,
            maintenance: costs.maintenance * herd_scale,
            electricity_purchase: energy.purchase_usd_per_year(),
        }
    }

    pub fn total(&self) -> f64 {
        self.feed
            + self.labor
            + self.veterinary
            + self.utilities
            + self.marketing
            + self.greenhouse_operations
            + self.maintenance
            + self.electricity_purchase
    }

    /// The same breakdown spread over one day.
    pub fn daily(&self) -> Self {
        Self {
            feed: self.feed / DAYS_PER_YEAR,
            labor: self.labor / DAYS_PER_YEAR,
            veterinary: self.veterinary / DAYS_PER_YEAR,
            utilities: self.utilities / DAYS_PER_YEAR,
            marketing: self.marketing / DAYS_PER_YEAR,
            greenhouse_operations: self.greenhouse_operations / DAYS_PER_YEAR,
            maintenance: self.maintenance / DAYS_PER_YEAR,
            electricity_purchase: self.electricity_purchase / DAYS_PER_YEAR,
        }
    }

    /// Labelled line items in display order.
    pub fn items(&self) -> [(&'static str, f64); 8] {
        [
            ("Feed", self.feed),
            ("Labor", self.labor),
            ("Veterinary", self.veterinary),
            ("Utilities", self.utilities),
            ("Marketing", self.marketing),
            ("Greenhouse Operations", self.greenhouse_operations),
            ("Maintenance", self.maintenance),
            ("Electricity Purchase", self.electricity_purchase),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::LandAllocation;

    fn costs_for(params: &FarmParameters) -> OperatingCosts {
        let land = LandAllocation::compute(params);
        let feed = FeedBalance::compute(params, &land);
        let energy = EnergyBalance::compute(params);
        OperatingCosts::compute(params, &feed, &energy)
    }

    #[test]
    fn test_baseline_costs() {
        let c = costs_for(&FarmParameters::default());
        assert!((c.feed - 2295.0).abs() < 1e-6);
        assert!((c.labor - 36_000.0).abs() < 1e-6);
        assert!((c.veterinary - 3000.0).abs() < 1e-6);
        assert!((c.greenhouse_operations - 10_000.0).abs() < 1e-6);
        assert_eq!(c.electricity_purchase, 0.0);
        assert!((c.total() - 64_295.0).abs() < 1e-6);
    }

    #[test]
    fn test_labor_averages_herd_and_greenhouse_scale() {
        let mut params = FarmParameters::default();
        params.herd.cows = 120;
        params.land.greenhouse_ha = 1.5;
        let c = costs_for(&params);
        // (2.0 + 1.0) / 2 * 36000
        assert!((c.labor - 54_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_daily_is_annual_over_365() {
        let c = costs_for(&FarmParameters::default());
        let d = c.daily();
        assert!((d.total() * 365.0 - c.total()).abs() < 1e-6);
        assert!((d.labor - 36_000.0 / 365.0).abs() < 1e-9);
    }

    #[test]
    fn test_electricity_shortfall_costed() {
        let mut params = FarmParameters::default();
        params.land.greenhouse_ha = 8.0;
        params.energy.greenhouse_kwh_per_ha_year = 20000.0;
        let c = costs_for(&params);
        assert!(c.electricity_purchase > 0.0);
    }

    #[test]
    fn test_feed_price_monotonic() {
        let mut params = FarmParameters::default();
        let mut last = costs_for(&params).total();
        for price in [0.12, 0.15, 0.2, 0.3] {
            params.feed.purchased_feed_usd_per_kg = price;
            let total = costs_for(&params).total();
            assert!(total >= last);
            last = total;
        }
    }
}
