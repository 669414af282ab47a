use serde::Serialize;

use super::parameters::FarmParameters;

/// Form metadata for one numeric input: bounds, default and step.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    #[serde(skip)]
    read: fn(&FarmParameters) -> f64,
}

impl FieldSpec {
    /// Current value of this field in a parameter set.
    pub fn value(&self, params: &FarmParameters) -> f64 {
        (self.read)(params)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A field whose value lies outside its form range.
#[derive(Debug, Clone, Serialize)]
pub struct FieldIssue {
    pub key: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} = {} is outside the usual range {}..={}",
            self.key, self.value, self.min, self.max
        )
    }
}

macro_rules! field {
    ($key:expr, $label:expr, $unit:expr, $min:expr, $max:expr, $default:expr, $step:expr, |$p:ident| $read:expr) => {
        FieldSpec {
            key: $key,
            label: $label,
            unit: $unit,
            min: $min,
            max: $max,
            default: $default,
            step: $step,
            read: |$p: &FarmParameters| $read,
        }
    };
}

/// All form fields in display order.
pub fn field_specs() -> Vec<FieldSpec> {
    vec![
        field!("herd.cows", "Number of Cows", "head", 10.0, 500.0, 60.0, 10.0, |p| p.herd.cows as f64),
        field!("herd.milk_yield_l_per_cow_day", "Milk Yield", "L/cow/day", 10.0, 40.0, 25.0, 1.0, |p| p.herd.milk_yield_l_per_cow_day),
        field!("herd.milk_price_usd_per_l", "Milk Price", "USD/L", 0.1, 1.5, 0.4, 0.01, |p| p.herd.milk_price_usd_per_l),
        field!("dairy.allocation.raw_milk_percent", "Raw Milk Share", "%", 0.0, 100.0, 100.0, 5.0, |p| p.dairy.allocation.raw_milk_percent),
        field!("dairy.allocation.cheese_percent", "Cheese Share", "%", 0.0, 100.0, 0.0, 5.0, |p| p.dairy.allocation.cheese_percent),
        field!("dairy.allocation.cream_percent", "Cream Share", "%", 0.0, 100.0, 0.0, 5.0, |p| p.dairy.allocation.cream_percent),
        field!("dairy.cheese_yield_kg_per_l", "Cheese Yield", "kg/L", 0.05, 0.2, 0.1, 0.01, |p| p.dairy.cheese_yield_kg_per_l),
        field!("dairy.cheese_price_usd_per_kg", "Cheese Price", "USD/kg", 1.0, 20.0, 5.0, 0.5, |p| p.dairy.cheese_price_usd_per_kg),
        field!("dairy.cream_yield_kg_per_l", "Cream Yield", "kg/L", 0.05, 0.2, 0.1, 0.01, |p| p.dairy.cream_yield_kg_per_l),
        field!("dairy.cream_price_usd_per_kg", "Cream Price", "USD/kg", 1.0, 15.0, 3.0, 0.5, |p| p.dairy.cream_price_usd_per_kg),
        field!("land.deeded_land_ha", "Deeded Land", "ha", 10.0, 200.0, 50.0, 5.0, |p| p.land.deeded_land_ha),
        field!("land.grassland_ha", "Grassland Area", "ha", 0.0, 200.0, 35.0, 5.0, |p| p.land.grassland_ha),
        field!("land.greenhouse_ha", "Greenhouse Area", "ha", 0.5, 10.0, 1.5, 0.5, |p| p.land.greenhouse_ha),
        field!("feed.feed_dm_kg_per_cow_year", "Feed Requirement", "kg DM/cow/yr", 5000.0, 8000.0, 6570.0, 10.0, |p| p.feed.feed_dm_kg_per_cow_year),
        field!("feed.grassland_yield_kg_dm_per_ha", "Grassland Yield", "kg DM/ha/yr", 3000.0, 8000.0, 5250.0, 250.0, |p| p.feed.grassland_yield_kg_dm_per_ha),
        field!("feed.feed_crop_yield_kg_dm_per_ha", "Feed Crop Yield", "kg DM/ha/yr", 8000.0, 20000.0, 15000.0, 500.0, |p| p.feed.feed_crop_yield_kg_dm_per_ha),
        field!("feed.grazing_share", "Grazing Share of Ration", "fraction", 0.0, 1.0, 0.5, 0.05, |p| p.feed.grazing_share),
        field!("feed.purchased_feed_usd_per_kg", "Purchased Feed Cost", "USD/kg DM", 0.05, 0.3, 0.1, 0.01, |p| p.feed.purchased_feed_usd_per_kg),
        field!("greenhouse.yield_t_per_ha", "Crop Yield", "t/ha/yr", 10.0, 200.0, 100.0, 5.0, |p| p.greenhouse.yield_t_per_ha()),
        field!("greenhouse.price_usd_per_kg", "Crop Price", "USD/kg", 0.05, 5.0, 0.125, 0.01, |p| p.greenhouse.price_usd_per_kg()),
        field!("energy.manure_kg_per_cow_day", "Manure", "kg/cow/day", 20.0, 60.0, 40.0, 1.0, |p| p.energy.manure_kg_per_cow_day),
        field!("energy.volatile_solids_fraction", "Volatile Solids Fraction", "fraction", 0.05, 0.15, 0.096, 0.001, |p| p.energy.volatile_solids_fraction),
        field!("energy.biogas_m3_per_kg_vs", "Biogas Yield", "m3/kg VS", 0.2, 0.5, 0.3, 0.01, |p| p.energy.biogas_m3_per_kg_vs),
        field!("energy.energy_kwh_per_m3", "Biogas Energy Content", "kWh/m3", 5.0, 7.0, 6.0, 0.1, |p| p.energy.energy_kwh_per_m3),
        field!("energy.electrical_efficiency", "Electrical Efficiency", "fraction", 0.25, 0.45, 0.35, 0.01, |p| p.energy.electrical_efficiency),
        field!("energy.farm_kwh_per_cow_year", "Farm Electricity Demand", "kWh/cow/yr", 200.0, 1000.0, 500.0, 50.0, |p| p.energy.farm_kwh_per_cow_year),
        field!("energy.greenhouse_kwh_per_ha_year", "Greenhouse Electricity Demand", "kWh/ha/yr", 1000.0, 20000.0, 5000.0, 500.0, |p| p.energy.greenhouse_kwh_per_ha_year),
        field!("energy.electricity_sell_usd_per_kwh", "Electricity Sell Price", "USD/kWh", 0.05, 0.3, 0.1, 0.01, |p| p.energy.electricity_sell_usd_per_kwh),
        field!("energy.electricity_buy_usd_per_kwh", "Electricity Purchase Price", "USD/kWh", 0.05, 0.5, 0.15, 0.01, |p| p.energy.electricity_buy_usd_per_kwh),
        field!("currency.usd_to_local", "Exchange Rate", "local/USD", 1.0, 100.0, 40.0, 0.5, |p| p.currency.usd_to_local),
    ]
}

/// Fields whose values fall outside their form range. These are worth a
/// warning but the model still evaluates them.
pub fn out_of_range_fields(params: &FarmParameters) -> Vec<FieldIssue> {
    field_specs()
        .into_iter()
        .filter_map(|spec| {
            let value = spec.value(params);
            if spec.contains(value) {
                None
            } else {
                Some(FieldIssue {
                    key: spec.key,
                    value,
                    min: spec.min,
                    max: spec.max,
                })
            }
        })
        .collect()
}
