//! Viability model for an integrated farm: a dairy herd, a soilless
//! greenhouse and a manure biogas plant sharing one piece of deeded land.
//!
//! ```
//! use integrated_farm_calculator::{evaluate, FarmParameters, LandPolicy};
//!
//! let report = evaluate(&FarmParameters::default(), LandPolicy::Advisory).unwrap();
//! assert_eq!(report.total_investment, 335_000.0);
//! assert!(report.is_profitable());
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

#[cfg(feature = "web")]
pub mod web;

pub use analysis::{evaluate, FarmAnalyzer, FarmReport, LandPolicy};
pub use config::ScenarioConfig;
pub use error::FarmError;
pub use io::{ParameterReader, ReportWriter};
pub use models::{DairyAllocation, FarmParameters, GreenhouseProduct};
