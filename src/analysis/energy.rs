use serde::{Deserialize, Serialize};

use crate::models::{FarmParameters, DAYS_PER_YEAR};

/// Daily manure-to-electricity chain and the farm's electricity account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBalance {
    pub manure_kg_per_day: f64,
    pub volatile_solids_kg_per_day: f64,
    pub biogas_m3_per_day: f64,
    /// Energy content of the biogas before conversion
    pub biogas_energy_kwh_per_day: f64,
    pub produced_kwh_per_day: f64,
    pub consumed_kwh_per_day: f64,
    /// Electricity exported; zero whenever `shortfall_kwh_per_day` is positive
    pub surplus_kwh_per_day: f64,
    /// Electricity imported; zero whenever `surplus_kwh_per_day` is positive
    pub shortfall_kwh_per_day: f64,
    pub sale_usd_per_day: f64,
    pub purchase_usd_per_day: f64,
}

impl EnergyBalance {
    pub fn compute(params: &FarmParameters) -> Self {
        let cows = params.herd.cows as f64;
        let e = &params.energy;

        let manure_kg_per_day = cows * e.manure_kg_per_cow_day;
        let volatile_solids_kg_per_day = manure_kg_per_day * e.volatile_solids_fraction;
        let biogas_m3_per_day = volatile_solids_kg_per_day * e.biogas_m3_per_kg_vs;
        let biogas_energy_kwh_per_day = biogas_m3_per_day * e.energy_kwh_per_m3;
        let produced_kwh_per_day = biogas_energy_kwh_per_day * e.electrical_efficiency;

        let consumed_kwh_per_day = cows * e.farm_kwh_per_cow_year / DAYS_PER_YEAR
            + params.land.greenhouse_ha * e.greenhouse_kwh_per_ha_year / DAYS_PER_YEAR;

        let surplus_kwh_per_day = (produced_kwh_per_day - consumed_kwh_per_day).max(0.0);
        let shortfall_kwh_per_day = (consumed_kwh_per_day - produced_kwh_per_day).max(0.0);

        Self {
            manure_kg_per_day,
            volatile_solids_kg_per_day,
            biogas_m3_per_day,
            biogas_energy_kwh_per_day,
            produced_kwh_per_day,
            consumed_kwh_per_day,
            surplus_kwh_per_day,
            shortfall_kwh_per_day,
            sale_usd_per_day: surplus_kwh_per_day * e.electricity_sell_usd_per_kwh,
            purchase_usd_per_day: shortfall_kwh_per_day * e.electricity_buy_usd_per_kwh,
        }
    }

    pub fn sale_usd_per_year(&self) -> f64 {
        self.sale_usd_per_day * DAYS_PER_YEAR
    }

    pub fn purchase_usd_per_year(&self) -> f64 {
        self.purchase_usd_per_day * DAYS_PER_YEAR
    }

    pub fn is_self_sufficient(&self) -> bool {
        self.shortfall_kwh_per_day == 0.0
    }
}
