use serde::{Deserialize, Serialize};

use crate::error::FarmError;

const ALLOCATION_TOLERANCE: f64 = 1e-6;

/// Share of the daily milk volume routed to each dairy product, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DairyAllocation {
    pub raw_milk_percent: f64,
    pub cheese_percent: f64,
    pub cream_percent: f64,
}

impl DairyAllocation {
    pub fn new(raw_milk_percent: f64, cheese_percent: f64, cream_percent: f64) -> Self {
        Self {
            raw_milk_percent,
            cheese_percent,
            cream_percent,
        }
    }

    pub fn total(&self) -> f64 {
        self.raw_milk_percent + self.cheese_percent + self.cream_percent
    }

    /// The three shares must each lie in 0..=100 and sum to exactly 100.
    /// A bad split is rejected, never rescaled.
    ///
    /// ```
    /// use integrated_farm_calculator::models::DairyAllocation;
    ///
    /// assert!(DairyAllocation::new(60.0, 30.0, 10.0).validate().is_ok());
    /// assert!(DairyAllocation::new(60.0, 30.0, 9.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), FarmError> {
        for (name, value) in [
            ("raw_milk_percent", self.raw_milk_percent),
            ("cheese_percent", self.cheese_percent),
            ("cream_percent", self.cream_percent),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(FarmError::ValidationError(format!(
                    "{name} must be in 0..=100, got {value}"
                )));
            }
        }
        let total = self.total();
        if (total - 100.0).abs() > ALLOCATION_TOLERANCE {
            return Err(FarmError::InvalidDairyAllocation { total });
        }
        Ok(())
    }

    pub fn raw_milk_fraction(&self) -> f64 {
        self.raw_milk_percent / 100.0
    }

    pub fn cheese_fraction(&self) -> f64 {
        self.cheese_percent / 100.0
    }

    pub fn cream_fraction(&self) -> f64 {
        self.cream_percent / 100.0
    }
}

impl Default for DairyAllocation {
    fn default() -> Self {
        Self::new(100.0, 0.0, 0.0)
    }
}
