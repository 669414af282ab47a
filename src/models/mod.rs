mod dairy;
mod fields;
mod parameters;
mod preset;
mod product;

pub use dairy::DairyAllocation;
pub use fields::{field_specs, out_of_range_fields, FieldIssue, FieldSpec};
pub use parameters::{
    CostSchedule, CurrencySettings, DairyParams, EnergyParams, FarmParameters, FeedParams,
    GreenhouseParams, HerdParams, LandParams, BUILDINGS_HA, DAYS_PER_YEAR,
    REFERENCE_GREENHOUSE_HA, REFERENCE_HERD_SIZE,
};
pub use preset::{PresetRange, PresetTier, Setting, Tunable};
pub use product::GreenhouseProduct;
