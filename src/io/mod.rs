mod csv_io;
mod excel_io;
mod json_io;

use std::path::Path;

use crate::analysis::FarmReport;
use crate::error::FarmError;
use crate::models::FarmParameters;

pub use csv_io::{write_projection_csv, write_report_csv};
pub use excel_io::write_report_excel;
pub use json_io::{read_parameters_json, read_report_json, write_report_json};

/// Trait for reading a parameter set from a file.
pub trait ParameterReader {
    fn read(&self, path: &Path) -> Result<FarmParameters, FarmError>;
}

/// Trait for writing an evaluated report to a file.
pub trait ReportWriter {
    fn write(&self, report: &FarmReport, path: &Path) -> Result<(), FarmError>;
}

/// CSV report writer (flattened breakdown).
pub struct CsvFormat;

impl ReportWriter for CsvFormat {
    fn write(&self, report: &FarmReport, path: &Path) -> Result<(), FarmError> {
        write_report_csv(report, path)
    }
}

/// JSON format reader/writer.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl ParameterReader for JsonFormat {
    fn read(&self, path: &Path) -> Result<FarmParameters, FarmError> {
        read_parameters_json(path)
    }
}

impl ReportWriter for JsonFormat {
    fn write(&self, report: &FarmReport, path: &Path) -> Result<(), FarmError> {
        write_report_json(report, path, self.pretty)
    }
}

/// Excel (.xlsx) report writer.
pub struct ExcelFormat;

impl ReportWriter for ExcelFormat {
    fn write(&self, report: &FarmReport, path: &Path) -> Result<(), FarmError> {
        write_report_excel(report, path)
    }
}

/// Pick a report writer from the file extension (`json`, `csv`, `xlsx`).
pub fn writer_for_path(path: &Path) -> Result<Box<dyn ReportWriter>, FarmError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "json" => Ok(Box::new(JsonFormat { pretty: true })),
        "csv" => Ok(Box::new(CsvFormat)),
        "xlsx" => Ok(Box::new(ExcelFormat)),
        _ => Err(FarmError::ParseError(format!(
            "Unsupported export format '{}'. Use .json, .csv or .xlsx",
            path.display()
        ))),
    }
}
