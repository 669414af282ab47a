use std::path::Path;

use serde::Serialize;

use crate::analysis::{FarmReport, FinancialProjection};
use crate::error::FarmError;

/// One line of the flattened report.
#[derive(Debug, Serialize)]
struct BreakdownRow<'a> {
    section: &'a str,
    item: &'a str,
    usd: f64,
    local: f64,
    currency: &'a str,
}

fn breakdown_rows(report: &FarmReport) -> Vec<BreakdownRow<'_>> {
    let c = &report.currency;
    let row = |section: &'static str, item: &'static str, usd: f64| BreakdownRow {
        section,
        item,
        usd,
        local: c.to_local(usd),
        currency: &c.local_code,
    };

    let mut rows = Vec::new();
    for (item, usd) in report.investment.items() {
        rows.push(row("investment", item, usd));
    }
    for (item, usd) in report.operating_costs.items() {
        rows.push(row("operating_cost", item, usd));
    }
    for (item, usd) in report.revenue.items() {
        rows.push(row("revenue", item, usd));
    }
    rows.push(row("summary", "Total Investment", report.total_investment));
    rows.push(row("summary", "Total Operating Cost", report.total_operating_cost));
    rows.push(row("summary", "Total Revenue", report.total_revenue));
    rows.push(row("summary", "Annual Profit", report.annual_profit));
    rows
}

/// Write the investment, cost and revenue breakdown as CSV.
///
/// Columns: section, item, usd, local, currency.
pub fn write_report_csv(report: &FarmReport, path: impl AsRef<Path>) -> Result<(), FarmError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for row in breakdown_rows(report) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the multi-year projection as CSV.
///
/// Columns: year, revenue, cost, profit.
pub fn write_projection_csv(
    projections: &[FinancialProjection],
    path: impl AsRef<Path>,
) -> Result<(), FarmError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for p in projections {
        wtr.serialize(p)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{evaluate, LandPolicy};
    use crate::models::FarmParameters;

    fn sample_report() -> FarmReport {
        evaluate(&FarmParameters::default(), LandPolicy::Advisory).unwrap()
    }

    #[test]
    fn test_breakdown_rows_cover_all_sections() {
        let report = sample_report();
        let rows = breakdown_rows(&report);
        assert_eq!(rows.len(), 6 + 8 + 5 + 4);
        assert!(rows.iter().any(|r| r.section == "investment" && r.item == "Bioenergy Plant"));
        let profit = rows.iter().find(|r| r.item == "Annual Profit").unwrap();
        assert_eq!(profit.usd, report.annual_profit);
        assert_eq!(profit.local, report.annual_profit * 40.0);
    }

    #[test]
    fn test_write_report_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_report_csv(&sample_report(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "section,item,usd,local,currency");
        assert!(content.contains("investment,Cows,90000.0,3600000.0,TRY"));
        assert!(content.contains("operating_cost,Feed,2295"));
    }

    #[test]
    fn test_write_projection_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projection.csv");
        let report = sample_report();
        write_projection_csv(&report.projections, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let loaded: Vec<FinancialProjection> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(loaded.len(), 5);
        assert_eq!(loaded[0].year, 1);
        assert_eq!(loaded[4].year, 5);
        assert!((loaded[0].revenue - report.total_revenue).abs() < 1e-6);
    }

    #[test]
    fn test_projection_csv_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projection.csv");
        write_projection_csv(&[], &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.is_empty() || content.starts_with("year"));
    }
}
