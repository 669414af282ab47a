use serde::{Deserialize, Serialize};

use super::dairy::DairyAllocation;
use super::product::GreenhouseProduct;
use crate::error::FarmError;

/// Herd size the scaled capital and operating costs are quoted against.
pub const REFERENCE_HERD_SIZE: f64 = 60.0;
/// Greenhouse area the scaled greenhouse costs are quoted against (ha).
pub const REFERENCE_GREENHOUSE_HA: f64 = 1.5;
/// Barn, milking parlour and digester footprint (ha).
pub const BUILDINGS_HA: f64 = 1.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Herd size and milk production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HerdParams {
    pub cows: u32,
    /// Litres per cow per day
    pub milk_yield_l_per_cow_day: f64,
    /// USD per litre of raw milk
    pub milk_price_usd_per_l: f64,
}

impl Default for HerdParams {
    fn default() -> Self {
        Self {
            cows: 60,
            milk_yield_l_per_cow_day: 25.0,
            milk_price_usd_per_l: 0.4,
        }
    }
}

/// How milk is split between products and what each conversion is worth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DairyParams {
    pub allocation: DairyAllocation,
    /// kg of cheese per litre of milk
    pub cheese_yield_kg_per_l: f64,
    pub cheese_price_usd_per_kg: f64,
    /// kg of cream per litre of milk
    pub cream_yield_kg_per_l: f64,
    pub cream_price_usd_per_kg: f64,
}

impl Default for DairyParams {
    fn default() -> Self {
        Self {
            allocation: DairyAllocation::default(),
            cheese_yield_kg_per_l: 0.1,
            cheese_price_usd_per_kg: 5.0,
            cream_yield_kg_per_l: 0.1,
            cream_price_usd_per_kg: 3.0,
        }
    }
}

/// Land holdings in hectares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandParams {
    /// Total deeded land, including greenhouse and buildings
    pub deeded_land_ha: f64,
    /// Grassland available for grazing or hay
    pub grassland_ha: f64,
    /// Soilless greenhouse footprint
    pub greenhouse_ha: f64,
}

impl Default for LandParams {
    fn default() -> Self {
        Self {
            deeded_land_ha: 50.0,
            grassland_ha: 35.0,
            greenhouse_ha: 1.5,
        }
    }
}

/// Dry-matter feed requirement and supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedParams {
    /// kg dry matter per cow per year
    pub feed_dm_kg_per_cow_year: f64,
    /// kg dry matter per hectare of grassland per year
    pub grassland_yield_kg_dm_per_ha: f64,
    /// kg dry matter per hectare of feed crop (silage maize etc.) per year
    pub feed_crop_yield_kg_dm_per_ha: f64,
    /// Fraction of the ration the herd is meant to take from pasture
    pub grazing_share: f64,
    /// USD per kg dry matter of bought-in feed
    pub purchased_feed_usd_per_kg: f64,
}

impl Default for FeedParams {
    fn default() -> Self {
        Self {
            feed_dm_kg_per_cow_year: 6570.0,
            grassland_yield_kg_dm_per_ha: 5250.0,
            feed_crop_yield_kg_dm_per_ha: 15000.0,
            grazing_share: 0.5,
            purchased_feed_usd_per_kg: 0.1,
        }
    }
}

/// Greenhouse crop selection. Yield and price fall back to the catalog
/// values of the chosen product when left unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreenhouseParams {
    pub product: GreenhouseProduct,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yield_t_per_ha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_usd_per_kg: Option<f64>,
}

impl GreenhouseParams {
    pub fn for_product(product: GreenhouseProduct) -> Self {
        Self {
            product,
            yield_t_per_ha: None,
            price_usd_per_kg: None,
        }
    }

    /// Tonnes per hectare per year.
    pub fn yield_t_per_ha(&self) -> f64 {
        self.yield_t_per_ha
            .unwrap_or_else(|| self.product.default_yield_t_per_ha())
    }

    /// USD per kg.
    pub fn price_usd_per_kg(&self) -> f64 {
        self.price_usd_per_kg
            .unwrap_or_else(|| self.product.default_price_usd_per_kg())
    }
}

/// Manure-to-biogas chain and the farm's electricity account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyParams {
    pub manure_kg_per_cow_day: f64,
    /// Volatile solids as a fraction of fresh manure (total solids x VS share)
    pub volatile_solids_fraction: f64,
    pub biogas_m3_per_kg_vs: f64,
    pub energy_kwh_per_m3: f64,
    /// Generator efficiency from biogas energy to electricity
    pub electrical_efficiency: f64,
    pub farm_kwh_per_cow_year: f64,
    pub greenhouse_kwh_per_ha_year: f64,
    pub electricity_sell_usd_per_kwh: f64,
    pub electricity_buy_usd_per_kwh: f64,
}

impl Default for EnergyParams {
    fn default() -> Self {
        Self {
            manure_kg_per_cow_day: 40.0,
            // 12% total solids, 80% of which volatile
            volatile_solids_fraction: 0.096,
            biogas_m3_per_kg_vs: 0.3,
            energy_kwh_per_m3: 6.0,
            electrical_efficiency: 0.35,
            farm_kwh_per_cow_year: 500.0,
            greenhouse_kwh_per_ha_year: 5000.0,
            electricity_sell_usd_per_kwh: 0.1,
            electricity_buy_usd_per_kwh: 0.15,
        }
    }
}

/// Display currency. Only used to render amounts; the model works in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencySettings {
    pub usd_to_local: f64,
    pub local_code: String,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            usd_to_local: 40.0,
            local_code: "TRY".to_string(),
        }
    }
}

impl CurrencySettings {
    pub fn to_local(&self, usd: f64) -> f64 {
        usd * self.usd_to_local
    }
}

/// Unit capital and operating costs in USD.
///
/// Entries marked "per reference herd" scale linearly with `cows / 60`;
/// greenhouse operations scale with `greenhouse_ha / 1.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSchedule {
    pub cow_purchase_per_head: f64,
    pub greenhouse_construction_per_ha: f64,
    /// per reference herd
    pub infrastructure: f64,
    /// per reference herd
    pub bioenergy_plant: f64,
    /// per reference herd
    pub equipment: f64,
    /// per reference herd
    pub initial_supplies: f64,
    /// Annual labor bill at reference herd and greenhouse size
    pub labor: f64,
    pub veterinary_per_head: f64,
    /// per reference herd
    pub utilities: f64,
    /// per reference herd
    pub marketing: f64,
    /// per reference greenhouse
    pub greenhouse_operations: f64,
    /// per reference herd
    pub maintenance: f64,
}

impl Default for CostSchedule {
    fn default() -> Self {
        Self {
            cow_purchase_per_head: 1500.0,
            greenhouse_construction_per_ha: 50000.0,
            infrastructure: 80000.0,
            bioenergy_plant: 50000.0,
            equipment: 30000.0,
            initial_supplies: 10000.0,
            labor: 36000.0,
            veterinary_per_head: 50.0,
            utilities: 5000.0,
            marketing: 3000.0,
            greenhouse_operations: 10000.0,
            maintenance: 5000.0,
        }
    }
}

/// Complete input set for one evaluation of the farm model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmParameters {
    pub herd: HerdParams,
    pub dairy: DairyParams,
    pub land: LandParams,
    pub feed: FeedParams,
    pub greenhouse: GreenhouseParams,
    pub energy: EnergyParams,
    pub currency: CurrencySettings,
    pub costs: CostSchedule,
}

impl FarmParameters {
    /// Herd size relative to the 60-cow reference farm.
    pub fn herd_scale(&self) -> f64 {
        self.herd.cows as f64 / REFERENCE_HERD_SIZE
    }

    /// Greenhouse area relative to the 1.5 ha reference greenhouse.
    pub fn greenhouse_scale(&self) -> f64 {
        self.land.greenhouse_ha / REFERENCE_GREENHOUSE_HA
    }

    /// Check the parameter set before evaluation.
    ///
    /// The dairy split is checked first so a bad split is always reported
    /// as [`FarmError::InvalidDairyAllocation`].
    pub fn validate(&self) -> Result<(), FarmError> {
        self.dairy.allocation.validate()?;

        let non_negative = [
            ("herd.milk_yield_l_per_cow_day", self.herd.milk_yield_l_per_cow_day),
            ("herd.milk_price_usd_per_l", self.herd.milk_price_usd_per_l),
            ("dairy.cheese_yield_kg_per_l", self.dairy.cheese_yield_kg_per_l),
            ("dairy.cheese_price_usd_per_kg", self.dairy.cheese_price_usd_per_kg),
            ("dairy.cream_yield_kg_per_l", self.dairy.cream_yield_kg_per_l),
            ("dairy.cream_price_usd_per_kg", self.dairy.cream_price_usd_per_kg),
            ("land.deeded_land_ha", self.land.deeded_land_ha),
            ("land.grassland_ha", self.land.grassland_ha),
            ("land.greenhouse_ha", self.land.greenhouse_ha),
            ("feed.feed_dm_kg_per_cow_year", self.feed.feed_dm_kg_per_cow_year),
            ("feed.purchased_feed_usd_per_kg", self.feed.purchased_feed_usd_per_kg),
            ("greenhouse.yield_t_per_ha", self.greenhouse.yield_t_per_ha()),
            ("greenhouse.price_usd_per_kg", self.greenhouse.price_usd_per_kg()),
            ("energy.manure_kg_per_cow_day", self.energy.manure_kg_per_cow_day),
            ("energy.biogas_m3_per_kg_vs", self.energy.biogas_m3_per_kg_vs),
            ("energy.energy_kwh_per_m3", self.energy.energy_kwh_per_m3),
            ("energy.farm_kwh_per_cow_year", self.energy.farm_kwh_per_cow_year),
            ("energy.greenhouse_kwh_per_ha_year", self.energy.greenhouse_kwh_per_ha_year),
            ("energy.electricity_sell_usd_per_kwh", self.energy.electricity_sell_usd_per_kwh),
            ("energy.electricity_buy_usd_per_kwh", self.energy.electricity_buy_usd_per_kwh),
            ("currency.usd_to_local", self.currency.usd_to_local),
            ("costs.cow_purchase_per_head", self.costs.cow_purchase_per_head),
            ("costs.greenhouse_construction_per_ha", self.costs.greenhouse_construction_per_ha),
            ("costs.infrastructure", self.costs.infrastructure),
            ("costs.bioenergy_plant", self.costs.bioenergy_plant),
            ("costs.equipment", self.costs.equipment),
            ("costs.initial_supplies", self.costs.initial_supplies),
            ("costs.labor", self.costs.labor),
            ("costs.veterinary_per_head", self.costs.veterinary_per_head),
            ("costs.utilities", self.costs.utilities),
            ("costs.marketing", self.costs.marketing),
            ("costs.greenhouse_operations", self.costs.greenhouse_operations),
            ("costs.maintenance", self.costs.maintenance),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FarmError::ValidationError(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let positive = [
            ("feed.grassland_yield_kg_dm_per_ha", self.feed.grassland_yield_kg_dm_per_ha),
            ("feed.feed_crop_yield_kg_dm_per_ha", self.feed.feed_crop_yield_kg_dm_per_ha),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FarmError::ValidationError(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let fractions = [
            ("feed.grazing_share", self.feed.grazing_share),
            ("energy.volatile_solids_fraction", self.energy.volatile_solids_fraction),
            ("energy.electrical_efficiency", self.energy.electrical_efficiency),
        ];
        for (name, value) in fractions {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(FarmError::ValidationError(format!(
                    "{name} must be in 0.0..=1.0, got {value}"
                )));
            }
        }

        if self.energy.electricity_buy_usd_per_kwh < self.energy.electricity_sell_usd_per_kwh {
            return Err(FarmError::ValidationError(format!(
                "electricity purchase price ({}) must not be below the sell price ({})",
                self.energy.electricity_buy_usd_per_kwh, self.energy.electricity_sell_usd_per_kwh
            )));
        }

        Ok(())
    }
}
