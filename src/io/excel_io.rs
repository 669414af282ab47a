use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::analysis::FarmReport;
use crate::error::FarmError;
use crate::models::CurrencySettings;

fn write_headers(ws: &mut Worksheet, headers: &[&str], bold: &Format) -> Result<(), FarmError> {
    for (col, header) in headers.iter().enumerate() {
        ws.write_string_with_format(0, col as u16, *header, bold)?;
        ws.set_column_width(col as u16, if col == 0 { 28 } else { 18 })?;
    }
    Ok(())
}

/// Item, USD and local-currency columns, with a bold total row.
fn write_money_sheet(
    workbook: &mut Workbook,
    name: &str,
    items: &[(&str, f64)],
    total: f64,
    currency: &CurrencySettings,
    bold: &Format,
) -> Result<(), FarmError> {
    let ws = workbook.add_worksheet();
    ws.set_name(name)?;
    write_headers(ws, &["Item", "USD", currency.local_code.as_str()], bold)?;

    let mut row: u32 = 1;
    for (item, usd) in items {
        ws.write_string(row, 0, *item)?;
        ws.write_number(row, 1, *usd)?;
        ws.write_number(row, 2, currency.to_local(*usd))?;
        row += 1;
    }
    ws.write_string_with_format(row, 0, "Total", bold)?;
    ws.write_number_with_format(row, 1, total, bold)?;
    ws.write_number_with_format(row, 2, currency.to_local(total), bold)?;
    Ok(())
}

/// Daily quantities and their USD value. Purchases are shown as positive amounts.
fn daily_rows(report: &FarmReport) -> Vec<(String, f64, &'static str, Option<f64>)> {
    let d = &report.dairy;
    let e = &report.energy;
    vec![
        ("Milk Produced".to_string(), d.milk_l_per_day, "L/day", None),
        ("Raw Milk Sold".to_string(), d.raw_milk_l_per_day, "L/day", Some(d.raw_milk_usd_per_day)),
        ("Cheese".to_string(), d.cheese_kg_per_day, "kg/day", Some(d.cheese_usd_per_day)),
        ("Cream".to_string(), d.cream_kg_per_day, "kg/day", Some(d.cream_usd_per_day)),
        (
            report.greenhouse.product.to_string(),
            report.greenhouse.kg_per_day,
            "kg/day",
            Some(report.greenhouse.usd_per_day),
        ),
        ("Electricity Produced".to_string(), e.produced_kwh_per_day, "kWh/day", None),
        ("Electricity Consumed".to_string(), e.consumed_kwh_per_day, "kWh/day", None),
        ("Surplus Electricity".to_string(), e.surplus_kwh_per_day, "kWh/day", Some(e.sale_usd_per_day)),
        (
            "Electricity Purchased".to_string(),
            e.shortfall_kwh_per_day,
            "kWh/day",
            Some(e.purchase_usd_per_day),
        ),
    ]
}

/// Write an evaluated report to an Excel (.xlsx) workbook.
///
/// Sheets: Summary, Investment, Operating Costs, Revenue, Daily Products,
/// Projection.
pub fn write_report_excel(report: &FarmReport, path: impl AsRef<Path>) -> Result<(), FarmError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let c = &report.currency;

    {
        let ws = workbook.add_worksheet();
        ws.set_name("Summary")?;
        write_headers(ws, &["Metric", "USD", c.local_code.as_str()], &bold)?;
        let rows = [
            ("Initial Investment", report.total_investment),
            ("Annual Operating Costs", report.total_operating_cost),
            ("Annual Revenue", report.total_revenue),
            ("Annual Profit", report.annual_profit),
        ];
        let mut row: u32 = 1;
        for (name, usd) in rows {
            ws.write_string(row, 0, name)?;
            ws.write_number(row, 1, usd)?;
            ws.write_number(row, 2, c.to_local(usd))?;
            row += 1;
        }
        ws.write_string(row, 0, "Payback Period (years)")?;
        match report.payback_years {
            Some(years) => ws.write_number(row, 1, years)?,
            None => ws.write_string(row, 1, "never")?,
        };
        if let Some(warning) = &report.warning {
            ws.write_string(row + 2, 0, warning)?;
        }
    }

    write_money_sheet(
        &mut workbook,
        "Investment",
        &report.investment.items(),
        report.total_investment,
        c,
        &bold,
    )?;
    write_money_sheet(
        &mut workbook,
        "Operating Costs",
        &report.operating_costs.items(),
        report.total_operating_cost,
        c,
        &bold,
    )?;
    write_money_sheet(
        &mut workbook,
        "Revenue",
        &report.revenue.items(),
        report.total_revenue,
        c,
        &bold,
    )?;

    {
        let ws = workbook.add_worksheet();
        ws.set_name("Daily Products")?;
        write_headers(ws, &["Product", "Quantity", "Unit", "USD/day"], &bold)?;
        let rows = daily_rows(report);
        for (i, (name, qty, unit, usd)) in rows.into_iter().enumerate() {
            let row = i as u32 + 1;
            ws.write_string(row, 0, &name)?;
            ws.write_number(row, 1, qty)?;
            ws.write_string(row, 2, unit)?;
            if let Some(usd) = usd {
                ws.write_number(row, 3, usd)?;
            }
        }
    }

    {
        let ws = workbook.add_worksheet();
        ws.set_name("Projection")?;
        write_headers(ws, &["Year", "Revenue (USD)", "Costs (USD)", "Profit (USD)"], &bold)?;
        for (i, p) in report.projections.iter().enumerate() {
            let row = i as u32 + 1;
            ws.write_number(row, 0, p.year as f64)?;
            ws.write_number(row, 1, p.revenue)?;
            ws.write_number(row, 2, p.cost)?;
            ws.write_number(row, 3, p.profit)?;
        }
    }

    workbook.save(path.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{evaluate, LandPolicy};
    use crate::models::FarmParameters;

    #[test]
    fn test_write_report_excel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        let report = evaluate(&FarmParameters::default(), LandPolicy::Advisory).unwrap();

        write_report_excel(&report, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.len() > 100);
        // xlsx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_write_report_excel_without_profit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loss.xlsx");
        let mut params = FarmParameters::default();
        params.costs.labor = 1_000_000.0;
        let report = evaluate(&params, LandPolicy::Advisory).unwrap();
        assert!(report.payback_years.is_none());

        write_report_excel(&report, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_daily_rows_are_positive_under_energy_deficit() {
        let mut params = FarmParameters::default();
        params.land.greenhouse_ha = 6.0;
        let report = evaluate(&params, LandPolicy::Advisory).unwrap();
        assert!(report.energy.purchase_usd_per_day > 0.0);

        let rows = daily_rows(&report);
        let (_, _, _, purchased) = rows
            .iter()
            .find(|(name, ..)| name == "Electricity Purchased")
            .unwrap();
        assert_eq!(*purchased, Some(report.energy.purchase_usd_per_day));
        for (name, qty, _, usd) in &rows {
            assert!(*qty >= 0.0, "{name} quantity is negative");
            assert!(usd.unwrap_or(0.0) >= 0.0, "{name} value is negative");
        }
    }

    #[test]
    fn test_write_report_excel_bad_path() {
        let report = evaluate(&FarmParameters::default(), LandPolicy::Advisory).unwrap();
        let result = write_report_excel(&report, "/nonexistent/dir/report.xlsx");
        assert!(result.is_err());
    }
}
