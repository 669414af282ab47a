use std::path::Path;

use crate::analysis::FarmReport;
use crate::error::FarmError;
use crate::models::FarmParameters;

/// Read a parameter set from a JSON file and validate it.
///
/// Missing groups and fields fall back to their defaults.
pub fn read_parameters_json(path: impl AsRef<Path>) -> Result<FarmParameters, FarmError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_parameters(&content)
}

fn parse_parameters(content: &str) -> Result<FarmParameters, FarmError> {
    let params: FarmParameters = serde_json::from_str(content)?;
    params.validate()?;
    Ok(params)
}

/// Write an evaluated report to a JSON file.
pub fn write_report_json(
    report: &FarmReport,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), FarmError> {
    let content = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}

/// Read a report previously written by [`write_report_json`].
pub fn read_report_json(path: impl AsRef<Path>) -> Result<FarmReport, FarmError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{evaluate, LandPolicy};
    use crate::models::GreenhouseProduct;

    #[test]
    fn test_read_parameters_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(
            &path,
            r#"{"herd": {"cows": 90}, "greenhouse": {"product": "cucumber"}}"#,
        )
        .unwrap();

        let loaded = read_parameters_json(&path).unwrap();
        assert_eq!(loaded.herd.cows, 90);
        assert_eq!(loaded.greenhouse.product, GreenhouseProduct::Cucumber);
        assert_eq!(loaded.costs, FarmParameters::default().costs);
    }

    #[test]
    fn test_partial_parameters_use_defaults() {
        let params = parse_parameters(r#"{"herd": {"cows": 120}}"#).unwrap();
        assert_eq!(params.herd.cows, 120);
        assert_eq!(params.land.deeded_land_ha, 50.0);
        assert_eq!(params.greenhouse.product, GreenhouseProduct::Tomato);
    }

    #[test]
    fn test_invalid_allocation_rejected() {
        let data = r#"{"dairy": {"allocation": {"raw_milk_percent": 50, "cheese_percent": 20, "cream_percent": 20}}}"#;
        let err = parse_parameters(data).unwrap_err();
        assert!(matches!(err, FarmError::InvalidDairyAllocation { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_parameters("{not json").unwrap_err();
        assert!(matches!(err, FarmError::Json(_)));
    }

    #[test]
    fn test_report_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let report = evaluate(&FarmParameters::default(), LandPolicy::Advisory).unwrap();
        write_report_json(&report, &path, false).unwrap();
        let loaded = read_report_json(&path).unwrap();
        assert_eq!(loaded.total_investment, report.total_investment);
        assert_eq!(loaded.projections.len(), 5);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_parameters_json("/nonexistent/params.json").unwrap_err();
        assert!(matches!(err, FarmError::Io(_)));
    }
}
