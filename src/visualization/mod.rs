mod charts;
mod currency;
mod narrative;
mod tables;

pub use charts::{
    format_projection_chart, format_share_chart, print_projection_chart, print_share_chart,
};
pub use currency::{format_local, format_number, format_payback, format_usd};
pub use narrative::{feed_status, format_narrative, print_narrative};
pub use tables::{
    format_cost_table, print_cost_table,
    format_daily_products_table, print_daily_products_table,
    format_field_table, print_field_table,
    format_financial_summary, print_financial_summary,
    format_investment_table, print_investment_table,
    format_land_feed_table, print_land_feed_table,
    format_product_catalog, print_product_catalog,
    format_projection_table, print_projection_table,
    format_revenue_table, print_revenue_table,
};

use crate::analysis::FarmReport;
use crate::models::FarmParameters;

/// Render the complete report: tables, share charts, projection and summary.
pub fn format_full_report(params: &FarmParameters, report: &FarmReport) -> String {
    let mut output = String::new();
    output.push_str(&format_financial_summary(report));
    output.push_str(&format_land_feed_table(report));
    output.push_str(&format_investment_table(report));
    output.push_str(&format_cost_table(report));
    output.push_str(&format_revenue_table(report));
    output.push_str(&format_daily_products_table(report));
    output.push_str(&format_share_chart("Cost Distribution", &report.operating_costs.items()));
    output.push_str(&format_share_chart("Revenue Distribution", &report.revenue.items()));
    output.push_str(&format_projection_table(&report.projections, &report.currency));
    output.push_str(&format_projection_chart(&report.projections));
    output.push_str(&format_narrative(params, report));
    output
}

/// Print the complete report.
pub fn print_full_report(params: &FarmParameters, report: &FarmReport) {
    print!("{}", format_full_report(params, report));
}
