use thiserror::Error;

/// Errors that can occur while configuring or evaluating a farm scenario.
#[derive(Error, Debug)]
pub enum FarmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Dairy allocation must sum to 100%, got {total}%")]
    InvalidDairyAllocation { total: f64 },

    #[error(
        "Deeded land insufficient for feed self-sufficiency: need {required_ha:.1} ha, provided {available_ha:.1} ha"
    )]
    InsufficientLand { required_ha: f64, available_ha: f64 },
}

impl From<rust_xlsxwriter::XlsxError> for FarmError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        FarmError::Excel(e.to_string())
    }
}

impl From<toml::ser::Error> for FarmError {
    fn from(e: toml::ser::Error) -> Self {
        FarmError::ParseError(e.to_string())
    }
}

impl FarmError {
    /// True for errors caused by the scenario itself rather than by I/O.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            FarmError::ValidationError(_)
                | FarmError::ParseError(_)
                | FarmError::InvalidDairyAllocation { .. }
                | FarmError::Toml(_)
        )
    }
}
