//! Scenario files: one versioned TOML schema holding the parameter set,
//! the land policy and any preset selections.
//!
//! ```toml
//! schema_version = 1
//! name = "Hillside dairy"
//! land_policy = "advisory"
//!
//! [parameters.herd]
//! cows = 80
//!
//! [parameters.greenhouse]
//! product = "strawberry"
//!
//! [presets]
//! milk_yield = "high"
//! feed_cost = 0.12
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{evaluate, FarmReport, LandPolicy};
use crate::error::FarmError;
use crate::models::{FarmParameters, Setting, Tunable};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub schema_version: u32,
    pub name: String,
    pub land_policy: LandPolicy,
    pub parameters: FarmParameters,
    /// Preset tier or custom value per tunable constant, keyed by
    /// [`Tunable::key`]. Applied on top of `parameters`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub presets: BTreeMap<String, Setting>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            name: "Integrated Farm".to_string(),
            land_policy: LandPolicy::default(),
            parameters: FarmParameters::default(),
            presets: BTreeMap::new(),
        }
    }
}

impl ScenarioConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, FarmError> {
        let config: ScenarioConfig = toml::from_str(content)?;
        config.check_version()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, FarmError> {
        let config: ScenarioConfig = serde_json::from_str(content)?;
        config.check_version()?;
        Ok(config)
    }

    /// Load a scenario from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FarmError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        debug!(path = %path.display(), "loading scenario");
        match ext.as_str() {
            "json" => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, FarmError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject schema versions this build does not understand.
    pub fn check_version(&self) -> Result<(), FarmError> {
        if self.schema_version == 0 || self.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(FarmError::ValidationError(format!(
                "Unsupported scenario schema version {} (this build reads up to {})",
                self.schema_version, CURRENT_SCHEMA_VERSION
            )));
        }
        Ok(())
    }

    /// Set a preset selection for one constant, replacing any earlier one.
    pub fn with_preset(mut self, tunable: Tunable, setting: Setting) -> Self {
        self.presets.insert(tunable.key().to_string(), setting);
        self
    }

    /// Apply the preset selections to the parameter set and return the
    /// values the model will run with.
    pub fn resolve(&self) -> Result<FarmParameters, FarmError> {
        self.check_version()?;
        let mut params = self.parameters.clone();
        for (key, setting) in &self.presets {
            let tunable: Tunable = key.parse()?;
            let value = setting.resolve(&tunable.range());
            debug!(constant = %tunable, value, "resolved preset");
            tunable.apply(&mut params, value);
        }
        Ok(params)
    }

    /// Resolve the scenario and run the model under its land policy.
    pub fn evaluate(&self) -> Result<FarmReport, FarmError> {
        let params = self.resolve()?;
        evaluate(&params, self.land_policy)
    }
}
