use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use super::currency::{format_local, format_number, format_payback, format_usd};
use crate::analysis::{FarmReport, FinancialProjection};
use crate::models::{field_specs, CurrencySettings, FarmParameters, GreenhouseProduct, DAYS_PER_YEAR};

fn new_table<T: Into<comfy_table::Row>>(header: T) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn section_title(output: &mut String, title: &str, width: usize) {
    output.push_str(&format!("\n{}\n", title.bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(width)));
}

/// Format the headline financial results in USD and the local currency.
pub fn format_financial_summary(report: &FarmReport) -> String {
    let mut output = String::new();
    section_title(&mut output, "Basic Financial Results", 60);

    let c = &report.currency;
    let mut table = new_table(vec![
        "Metric".to_string(),
        "USD".to_string(),
        c.local_code.clone(),
    ]);

    let rows = [
        ("Initial Investment", report.total_investment),
        ("Annual Operating Costs", report.total_operating_cost),
        ("Annual Revenue", report.total_revenue),
        ("Annual Profit", report.annual_profit),
    ];
    for (name, usd) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format_usd(usd)),
            Cell::new(format_local(usd, c)),
        ]);
    }
    let payback = format_payback(report.payback_years);
    table.add_row(vec![
        Cell::new("Payback Period"),
        Cell::new(&payback),
        Cell::new(&payback),
    ]);

    output.push_str(&format!("{table}"));
    output
}

/// Print the headline financial results.
pub fn print_financial_summary(report: &FarmReport) {
    print!("{}", format_financial_summary(report));
}

/// Format land use and the dry-matter feed balance.
pub fn format_land_feed_table(report: &FarmReport) -> String {
    let mut output = String::new();
    section_title(&mut output, "Land Allocation & Feed Balance", 60);

    let land = &report.land;
    let feed = &report.feed;
    let mut table = new_table(vec!["Item", "Value", "Unit"]);

    let rows = [
        ("Deeded Land", land.deeded_land_ha, 1, "ha"),
        ("Pasture Used", land.pasture_ha, 1, "ha"),
        ("Feed Crops", land.feed_crop_ha, 1, "ha"),
        ("Greenhouse", land.greenhouse_ha, 1, "ha"),
        ("Buildings", land.buildings_ha, 1, "ha"),
        ("Required for Self-Sufficiency", land.total_required_ha, 1, "ha"),
        ("Feed Required", feed.required_kg, 0, "kg DM/yr"),
        ("Feed from Pasture", feed.pasture_kg, 0, "kg DM/yr"),
        ("Feed from Crops", feed.crop_kg, 0, "kg DM/yr"),
        ("Feed Purchased", feed.purchased_kg, 0, "kg DM/yr"),
    ];
    for (name, value, decimals, unit) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format_number(value, decimals)),
            Cell::new(unit),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print land use and feed balance.
pub fn print_land_feed_table(report: &FarmReport) {
    print!("{}", format_land_feed_table(report));
}

/// Format the capital investment breakdown.
pub fn format_investment_table(report: &FarmReport) -> String {
    let mut output = String::new();
    section_title(&mut output, "Initial Investment Breakdown", 60);

    let c = &report.currency;
    let mut table = new_table(vec!["Item".to_string(), "USD".to_string(), c.local_code.clone()]);
    for (name, usd) in report.investment.items() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format_usd(usd)),
            Cell::new(format_local(usd, c)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(format_usd(report.total_investment)),
        Cell::new(format_local(report.total_investment, c)),
    ]);

    output.push_str(&format!("{table}"));
    output
}

/// Print the capital investment breakdown.
pub fn print_investment_table(report: &FarmReport) {
    print!("{}", format_investment_table(report));
}

/// Format annual and daily operating costs.
pub fn format_cost_table(report: &FarmReport) -> String {
    let mut output = String::new();
    section_title(&mut output, "Annual Operating Costs Breakdown", 70);

    let c = &report.currency;
    let mut table = new_table(vec![
        "Category".to_string(),
        "USD/year".to_string(),
        format!("{}/year", c.local_code),
        "USD/day".to_string(),
    ]);
    let daily = report.daily_costs.items();
    for ((name, annual), (_, per_day)) in report.operating_costs.items().into_iter().zip(daily) {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format_usd(annual)),
            Cell::new(format_local(annual, c)),
            Cell::new(format_usd(per_day)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(format_usd(report.total_operating_cost)),
        Cell::new(format_local(report.total_operating_cost, c)),
        Cell::new(format_usd(report.total_operating_cost / DAYS_PER_YEAR)),
    ]);

    output.push_str(&format!("{table}"));
    output
}

/// Print annual and daily operating costs.
pub fn print_cost_table(report: &FarmReport) {
    print!("{}", format_cost_table(report));
}

/// Format annual revenue per stream.
pub fn format_revenue_table(report: &FarmReport) -> String {
    let mut output = String::new();
    section_title(&mut output, "Annual Revenue Breakdown", 60);

    let c = &report.currency;
    let mut table = new_table(vec![
        "Source".to_string(),
        "USD/year".to_string(),
        format!("{}/year", c.local_code),
    ]);
    for (name, usd) in report.revenue.items() {
        let name = if name == "Greenhouse Crop" {
            report.greenhouse.product.to_string()
        } else {
            name.to_string()
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format_usd(usd)),
            Cell::new(format_local(usd, c)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(format_usd(report.total_revenue)),
        Cell::new(format_local(report.total_revenue, c)),
    ]);

    output.push_str(&format!("{table}"));
    output
}

/// Print annual revenue per stream.
pub fn print_revenue_table(report: &FarmReport) {
    print!("{}", format_revenue_table(report));
}

/// Format daily physical output and its value.
pub fn format_daily_products_table(report: &FarmReport) -> String {
    let mut output = String::new();
    section_title(&mut output, "Daily Products", 70);

    let c = &report.currency;
    let d = &report.dairy;
    let e = &report.energy;
    let mut table = new_table(vec![
        "Product".to_string(),
        "Quantity".to_string(),
        "Unit".to_string(),
        "USD/day".to_string(),
        format!("{}/day", c.local_code),
    ]);

    let money = |usd: Option<f64>| match usd {
        Some(v) => (format_usd(v), format_local(v, c)),
        None => ("-".to_string(), "-".to_string()),
    };

    let rows: Vec<(String, f64, &str, Option<f64>)> = vec![
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
    ];

    for (name, qty, unit, usd) in rows {
        let (usd_text, local_text) = money(usd);
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format_number(qty, 2)),
            Cell::new(unit),
            Cell::new(usd_text),
            Cell::new(local_text),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print daily physical output and its value.
pub fn print_daily_products_table(report: &FarmReport) {
    print!("{}", format_daily_products_table(report));
}

/// Format the multi-year financial projection.
pub fn format_projection_table(projections: &[FinancialProjection], currency: &CurrencySettings) -> String {
    let mut output = String::new();
    section_title(&mut output, "Financial Projections", 70);

    let mut table = new_table(vec![
        "Year".to_string(),
        "Revenue (USD)".to_string(),
        "Costs (USD)".to_string(),
        "Profit (USD)".to_string(),
        format!("Profit ({})", currency.local_code),
    ]);

    for p in projections {
        let profit = if p.profit < 0.0 {
            format_usd(p.profit).red().to_string()
        } else {
            format_usd(p.profit)
        };
        table.add_row(vec![
            Cell::new(format!("{}", p.year)),
            Cell::new(format_usd(p.revenue)),
            Cell::new(format_usd(p.cost)),
            Cell::new(profit),
            Cell::new(format_local(p.profit, currency)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the multi-year financial projection.
pub fn print_projection_table(projections: &[FinancialProjection], currency: &CurrencySettings) {
    print!("{}", format_projection_table(projections, currency));
}

/// Format the greenhouse product catalog.
pub fn format_product_catalog() -> String {
    let mut output = String::new();
    section_title(&mut output, "Greenhouse Products", 50);

    let mut table = new_table(vec!["Product", "Yield (t/ha/yr)", "Price (USD/kg)", "Revenue (USD/ha/yr)"]);
    for p in GreenhouseProduct::ALL {
        let revenue_per_ha = p.default_yield_t_per_ha() * 1000.0 * p.default_price_usd_per_kg();
        table.add_row(vec![
            Cell::new(p.to_string()),
            Cell::new(format!("{:.0}", p.default_yield_t_per_ha())),
            Cell::new(format!("{:.3}", p.default_price_usd_per_kg())),
            Cell::new(format_usd(revenue_per_ha)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the greenhouse product catalog.
pub fn print_product_catalog() {
    print!("{}", format_product_catalog());
}

/// Format the form field ranges alongside the current values.
pub fn format_field_table(params: &FarmParameters) -> String {
    let mut output = String::new();
    section_title(&mut output, "Input Fields", 80);

    let mut table = new_table(vec!["Field", "Label", "Unit", "Min", "Max", "Default", "Step", "Current"]);
    for spec in field_specs() {
        let value = spec.value(params);
        let current = if spec.contains(value) {
            format!("{value}")
        } else {
            format!("{value}").yellow().to_string()
        };
        table.add_row(vec![
            Cell::new(spec.key),
            Cell::new(spec.label),
            Cell::new(spec.unit),
            Cell::new(format!("{}", spec.min)),
            Cell::new(format!("{}", spec.max)),
            Cell::new(format!("{}", spec.default)),
            Cell::new(format!("{}", spec.step)),
            Cell::new(current),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the form field ranges.
pub fn print_field_table(params: &FarmParameters) {
    print!("{}", format_field_table(params));
}
