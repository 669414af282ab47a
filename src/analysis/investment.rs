use serde::{Deserialize, Serialize};

use crate::models::FarmParameters;

/// Up-front capital requirement, USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentBreakdown {
    pub cows: f64,
    pub greenhouse: f64,
    pub infrastructure: f64,
    pub bioenergy_plant: f64,
    pub equipment: f64,
    pub initial_supplies: f64,
}

impl InvestmentBreakdown {
    pub fn compute(params: &FarmParameters) -> Self {
        let costs = &params.costs;
        let herd_scale = params.herd_scale();

        Self {
            cows: params.herd.cows as f64 * costs.cow_purchase_per_head,
            greenhouse: params.land.greenhouse_ha * costs.greenhouse_construction_per_ha,
            infrastructure: costs.infrastructure * herd_scale,
            bioenergy_plant: costs.bioenergy_plant * herd_scale,
            equipment: costs.equipment * herd_scale,
            initial_supplies: costs.initial_supplies * herd_scale,
        }
    }

    pub fn total(&self) -> f64 {
        self.cows
            + self.greenhouse
            + self.infrastructure
            + self.bioenergy_plant
            + self.equipment
            + self.initial_supplies
    }

    /// Labelled line items in display order.
    pub fn items(&self) -> [(&'static str, f64); 6] {
        [
            ("Cows", self.cows),
            ("Greenhouse Construction", self.greenhouse),
            ("Infrastructure", self.infrastructure),
            ("Bioenergy Plant", self.bioenergy_plant),
            ("Equipment", self.equipment),
            ("Initial Supplies", self.initial_supplies),
        ]
    }
}
