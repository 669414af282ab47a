use serde::{Deserialize, Serialize};

use super::energy::EnergyBalance;
use crate::models::{FarmParameters, GreenhouseProduct, DAYS_PER_YEAR};

/// Daily dairy output after the milk is split between products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DairyOutput {
    pub milk_l_per_day: f64,
    pub raw_milk_l_per_day: f64,
    pub cheese_milk_l_per_day: f64,
    pub cream_milk_l_per_day: f64,
    pub cheese_kg_per_day: f64,
    pub cream_kg_per_day: f64,
    pub raw_milk_usd_per_day: f64,
    pub cheese_usd_per_day: f64,
    pub cream_usd_per_day: f64,
}

impl DairyOutput {
    pub fn compute(params: &FarmParameters) -> Self {
        let dairy = &params.dairy;
        let split = &dairy.allocation;

        let milk_l_per_day = params.herd.cows as f64 * params.herd.milk_yield_l_per_cow_day;
        let raw_milk_l_per_day = milk_l_per_day * split.raw_milk_fraction();
        let cheese_milk_l_per_day = milk_l_per_day * split.cheese_fraction();
        let cream_milk_l_per_day = milk_l_per_day * split.cream_fraction();

        let cheese_kg_per_day = cheese_milk_l_per_day * dairy.cheese_yield_kg_per_l;
        let cream_kg_per_day = cream_milk_l_per_day * dairy.cream_yield_kg_per_l;

        Self {
            milk_l_per_day,
            raw_milk_l_per_day,
            cheese_milk_l_per_day,
            cream_milk_l_per_day,
            cheese_kg_per_day,
            cream_kg_per_day,
            raw_milk_usd_per_day: raw_milk_l_per_day * params.herd.milk_price_usd_per_l,
            cheese_usd_per_day: cheese_kg_per_day * dairy.cheese_price_usd_per_kg,
            cream_usd_per_day: cream_kg_per_day * dairy.cream_price_usd_per_kg,
        }
    }

    pub fn usd_per_day(&self) -> f64 {
        self.raw_milk_usd_per_day + self.cheese_usd_per_day + self.cream_usd_per_day
    }
}

/// Daily greenhouse harvest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreenhouseOutput {
    pub product: GreenhouseProduct,
    pub kg_per_day: f64,
    pub usd_per_day: f64,
}

impl GreenhouseOutput {
    pub fn compute(params: &FarmParameters) -> Self {
        let g = &params.greenhouse;
        let kg_per_day = params.land.greenhouse_ha * g.yield_t_per_ha() * 1000.0 / DAYS_PER_YEAR;
        Self {
            product: g.product,
            kg_per_day,
            usd_per_day: kg_per_day * g.price_usd_per_kg(),
        }
    }
}

/// Annual revenue per stream, USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    pub raw_milk: f64,
    pub cheese: f64,
    pub cream: f64,
    pub greenhouse: f64,
    pub electricity: f64,
}

impl RevenueBreakdown {
    pub fn from_outputs(
        params: &FarmParameters,
        dairy: &DairyOutput,
        greenhouse: &GreenhouseOutput,
        energy: &EnergyBalance,
    ) -> Self {
        let split = &params.dairy.allocation;
        let dairy_params = &params.dairy;
        // Annual volumes first, then price, so each stream is
        // volume x 365 x unit price
        Self {
            raw_milk: dairy.milk_l_per_day * split.raw_milk_fraction() * DAYS_PER_YEAR
                * params.herd.milk_price_usd_per_l,
            cheese: dairy.cheese_kg_per_day * DAYS_PER_YEAR * dairy_params.cheese_price_usd_per_kg,
            cream: dairy.cream_kg_per_day * DAYS_PER_YEAR * dairy_params.cream_price_usd_per_kg,
            greenhouse: greenhouse.kg_per_day * DAYS_PER_YEAR * params.greenhouse.price_usd_per_kg(),
            electricity: energy.surplus_kwh_per_day * DAYS_PER_YEAR
                * params.energy.electricity_sell_usd_per_kwh,
        }
    }

    pub fn dairy(&self) -> f64 {
        self.raw_milk + self.cheese + self.cream
    }

    pub fn total(&self) -> f64 {
        self.dairy() + self.greenhouse + self.electricity
    }

    /// Labelled revenue streams in display order.
    pub fn items(&self) -> [(&'static str, f64); 5] {
        [
            ("Raw Milk", self.raw_milk),
            ("Cheese", self.cheese),
            ("Cream", self.cream),
            ("Greenhouse Crop", self.greenhouse),
            ("Surplus Electricity", self.electricity),
        ]
    }
}
