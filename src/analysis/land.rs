use serde::{Deserialize, Serialize};

use crate::models::{FarmParameters, BUILDINGS_HA};

/// How the deeded land is split between pasture, feed crops, greenhouse
/// and buildings, and how much the herd would need for full feed
/// self-sufficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandAllocation {
    pub deeded_land_ha: f64,
    /// Pasture the herd's grazing share would use if grassland were unlimited
    pub pasture_demand_ha: f64,
    /// Pasture actually grazed (capped by available grassland)
    pub pasture_ha: f64,
    /// Deeded land left over for feed crops
    pub feed_crop_ha: f64,
    /// Feed-crop area needed to close the ration after pasture
    pub required_feed_crop_ha: f64,
    pub greenhouse_ha: f64,
    pub buildings_ha: f64,
    /// Land needed for full self-sufficiency
    pub total_required_ha: f64,
}

impl LandAllocation {
    pub fn compute(params: &FarmParameters) -> Self {
        let cows = params.herd.cows as f64;
        let feed = &params.feed;
        let land = &params.land;

        let pasture_demand_ha =
            cows * feed.feed_dm_kg_per_cow_year * feed.grazing_share / feed.grassland_yield_kg_dm_per_ha;
        let pasture_ha = land.grassland_ha.min(pasture_demand_ha);

        let feed_crop_ha =
            (land.deeded_land_ha - pasture_ha - land.greenhouse_ha - BUILDINGS_HA).max(0.0);

        let feed_required_kg = cows * feed.feed_dm_kg_per_cow_year;
        let pasture_feed_kg = pasture_ha * feed.grassland_yield_kg_dm_per_ha;
        let required_feed_crop_ha =
            (feed_required_kg - pasture_feed_kg).max(0.0) / feed.feed_crop_yield_kg_dm_per_ha;

        let total_required_ha =
            pasture_ha + required_feed_crop_ha + land.greenhouse_ha + BUILDINGS_HA;

        Self {
            deeded_land_ha: land.deeded_land_ha,
            pasture_demand_ha,
            pasture_ha,
            feed_crop_ha,
            required_feed_crop_ha,
            greenhouse_ha: land.greenhouse_ha,
            buildings_ha: BUILDINGS_HA,
            total_required_ha,
        }
    }

    /// Whether the deeded land can grow the whole ration.
    pub fn is_self_sufficient(&self) -> bool {
        self.total_required_ha <= self.deeded_land_ha
    }

    /// Hectares missing for full self-sufficiency (zero when sufficient).
    pub fn shortfall_ha(&self) -> f64 {
        (self.total_required_ha - self.deeded_land_ha).max(0.0)
    }
}
