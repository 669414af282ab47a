use serde::{Deserialize, Serialize};

use super::parameters::FarmParameters;
use crate::error::FarmError;

/// Three-level choice offered for uncertain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetTier {
    Low,
    Mid,
    High,
}

impl std::fmt::Display for PresetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetTier::Low => write!(f, "low"),
            PresetTier::Mid => write!(f, "mid"),
            PresetTier::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for PresetTier {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "l" => Ok(PresetTier::Low),
            "mid" | "m" | "medium" => Ok(PresetTier::Mid),
            "high" | "h" => Ok(PresetTier::High),
            _ => Err(FarmError::ParseError(format!(
                "Unknown preset tier: '{s}'. Use low, mid or high"
            ))),
        }
    }
}

/// Low/mid/high values for one tunable constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresetRange {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl PresetRange {
    pub const fn new(low: f64, mid: f64, high: f64) -> Self {
        Self { low, mid, high }
    }

    pub fn value(&self, tier: PresetTier) -> f64 {
        match tier {
            PresetTier::Low => self.low,
            PresetTier::Mid => self.mid,
            PresetTier::High => self.high,
        }
    }
}

/// A preset tier or a custom value, as written in a scenario file:
/// `milk_yield = "high"` or `milk_yield = 27.5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Setting {
    Preset(PresetTier),
    Custom(f64),
}

impl Setting {
    pub fn resolve(&self, range: &PresetRange) -> f64 {
        match self {
            Setting::Preset(tier) => range.value(*tier),
            Setting::Custom(v) => *v,
        }
    }
}

/// Constants that can be set from a preset tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tunable {
    MilkYield,
    MilkPrice,
    FeedPerCow,
    GrasslandYield,
    FeedCropYield,
    FeedCost,
    Manure,
    VolatileSolids,
    BiogasYield,
    EnergyContent,
    ElectricalEfficiency,
    ElectricitySellPrice,
    ElectricityBuyPrice,
}

impl Tunable {
    pub const ALL: [Tunable; 13] = [
        Tunable::MilkYield,
        Tunable::MilkPrice,
        Tunable::FeedPerCow,
        Tunable::GrasslandYield,
        Tunable::FeedCropYield,
        Tunable::FeedCost,
        Tunable::Manure,
        Tunable::VolatileSolids,
        Tunable::BiogasYield,
        Tunable::EnergyContent,
        Tunable::ElectricalEfficiency,
        Tunable::ElectricitySellPrice,
        Tunable::ElectricityBuyPrice,
    ];

    /// Key used in scenario files.
    pub fn key(&self) -> &'static str {
        match self {
            Tunable::MilkYield => "milk_yield",
            Tunable::MilkPrice => "milk_price",
            Tunable::FeedPerCow => "feed_per_cow",
            Tunable::GrasslandYield => "grassland_yield",
            Tunable::FeedCropYield => "feed_crop_yield",
            Tunable::FeedCost => "feed_cost",
            Tunable::Manure => "manure",
            Tunable::VolatileSolids => "volatile_solids",
            Tunable::BiogasYield => "biogas_yield",
            Tunable::EnergyContent => "energy_content",
            Tunable::ElectricalEfficiency => "electrical_efficiency",
            Tunable::ElectricitySellPrice => "electricity_sell_price",
            Tunable::ElectricityBuyPrice => "electricity_buy_price",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Tunable::MilkYield => "L/cow/day",
            Tunable::MilkPrice => "USD/L",
            Tunable::FeedPerCow => "kg DM/cow/yr",
            Tunable::GrasslandYield | Tunable::FeedCropYield => "kg DM/ha/yr",
            Tunable::FeedCost => "USD/kg DM",
            Tunable::Manure => "kg/cow/day",
            Tunable::VolatileSolids => "fraction",
            Tunable::BiogasYield => "m3/kg VS",
            Tunable::EnergyContent => "kWh/m3",
            Tunable::ElectricalEfficiency => "fraction",
            Tunable::ElectricitySellPrice | Tunable::ElectricityBuyPrice => "USD/kWh",
        }
    }

    pub fn range(&self) -> PresetRange {
        match self {
            Tunable::MilkYield => PresetRange::new(20.0, 25.0, 30.0),
            Tunable::MilkPrice => PresetRange::new(0.35, 0.40, 0.45),
            Tunable::FeedPerCow => PresetRange::new(6000.0, 6570.0, 7200.0),
            Tunable::GrasslandYield => PresetRange::new(4500.0, 5250.0, 6000.0),
            Tunable::FeedCropYield => PresetRange::new(12000.0, 15000.0, 18000.0),
            Tunable::FeedCost => PresetRange::new(0.08, 0.10, 0.12),
            Tunable::Manure => PresetRange::new(35.0, 40.0, 45.0),
            Tunable::VolatileSolids => PresetRange::new(0.08, 0.096, 0.11),
            Tunable::BiogasYield => PresetRange::new(0.25, 0.30, 0.35),
            Tunable::EnergyContent => PresetRange::new(5.5, 6.0, 6.5),
            Tunable::ElectricalEfficiency => PresetRange::new(0.30, 0.35, 0.40),
            Tunable::ElectricitySellPrice => PresetRange::new(0.08, 0.10, 0.12),
            Tunable::ElectricityBuyPrice => PresetRange::new(0.12, 0.15, 0.18),
        }
    }

    /// Write a resolved value into the matching parameter field.
    pub fn apply(&self, params: &mut FarmParameters, value: f64) {
        match self {
            Tunable::MilkYield => params.herd.milk_yield_l_per_cow_day = value,
            Tunable::MilkPrice => params.herd.milk_price_usd_per_l = value,
            Tunable::FeedPerCow => params.feed.feed_dm_kg_per_cow_year = value,
            Tunable::GrasslandYield => params.feed.grassland_yield_kg_dm_per_ha = value,
            Tunable::FeedCropYield => params.feed.feed_crop_yield_kg_dm_per_ha = value,
            Tunable::FeedCost => params.feed.purchased_feed_usd_per_kg = value,
            Tunable::Manure => params.energy.manure_kg_per_cow_day = value,
            Tunable::VolatileSolids => params.energy.volatile_solids_fraction = value,
            Tunable::BiogasYield => params.energy.biogas_m3_per_kg_vs = value,
            Tunable::EnergyContent => params.energy.energy_kwh_per_m3 = value,
            Tunable::ElectricalEfficiency => params.energy.electrical_efficiency = value,
            Tunable::ElectricitySellPrice => params.energy.electricity_sell_usd_per_kwh = value,
            Tunable::ElectricityBuyPrice => params.energy.electricity_buy_usd_per_kwh = value,
        }
    }
}

impl std::fmt::Display for Tunable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Tunable {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        Tunable::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| FarmError::ParseError(format!("Unknown preset constant: '{s}'")))
    }
}
