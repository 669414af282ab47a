use serde::{Deserialize, Serialize};

use super::land::LandAllocation;
use crate::models::FarmParameters;

/// Annual dry-matter feed balance, in kg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedBalance {
    pub required_kg: f64,
    pub pasture_kg: f64,
    pub crop_kg: f64,
    pub supplied_kg: f64,
    /// Gap covered by bought-in feed
    pub purchased_kg: f64,
}

impl FeedBalance {
    /// Balance the herd's requirement against what the allocated land
    /// actually grows. Uses the available feed-crop area, not the area
    /// full self-sufficiency would need.
    pub fn compute(params: &FarmParameters, land: &LandAllocation) -> Self {
        let required_kg = params.herd.cows as f64 * params.feed.feed_dm_kg_per_cow_year;
        let pasture_kg = land.pasture_ha * params.feed.grassland_yield_kg_dm_per_ha;
        let crop_kg = land.feed_crop_ha * params.feed.feed_crop_yield_kg_dm_per_ha;
        let supplied_kg = pasture_kg + crop_kg;
        let purchased_kg = (required_kg - supplied_kg).max(0.0);

        Self {
            required_kg,
            pasture_kg,
            crop_kg,
            supplied_kg,
            purchased_kg,
        }
    }

    pub fn purchase_cost_usd(&self, params: &FarmParameters) -> f64 {
        self.purchased_kg * params.feed.purchased_feed_usd_per_kg
    }

    pub fn is_self_sufficient(&self) -> bool {
        self.purchased_kg == 0.0
    }
}
