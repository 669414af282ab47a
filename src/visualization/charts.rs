use colored::Colorize;

use super::currency::format_usd;
use crate::analysis::FinancialProjection;

const BAR_WIDTH: usize = 40;

fn bar(value: f64, max: f64) -> String {
    let len = if max > 0.0 && value > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    "\u{2588}".repeat(len)
}

/// Format a horizontal bar chart of each item's share of the total.
///
/// Items with a zero or negative amount are left out, so an all-raw-milk
/// dairy split does not show empty cheese and cream rows.
pub fn format_share_chart(title: &str, items: &[(&str, f64)]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", title.bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let shown: Vec<&(&str, f64)> = items.iter().filter(|(_, v)| *v > 0.0).collect();
    let total: f64 = shown.iter().map(|(_, v)| v).sum();
    if shown.is_empty() || total <= 0.0 {
        output.push_str("  No data available.\n");
        return output;
    }

    let max = shown.iter().map(|(_, v)| *v).fold(0.0f64, f64::max);
    let label_width = shown.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    for (name, value) in shown {
        let share = value / total * 100.0;
        output.push_str(&format!(
            "  {:<width$}  {:>6.1}%  {}\n",
            name,
            share,
            bar(*value, max).green(),
            width = label_width
        ));
    }

    output.push('\n');
    output
}

/// Print a share-of-total bar chart.
pub fn print_share_chart(title: &str, items: &[(&str, f64)]) {
    print!("{}", format_share_chart(title, items));
}

/// Format yearly profit as a bar chart, losses in red.
pub fn format_projection_chart(projections: &[FinancialProjection]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Profit Projection".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if projections.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    let max = projections
        .iter()
        .map(|p| p.profit.abs())
        .fold(0.0f64, f64::max);

    output.push_str(&format!("  {:>4}  {:>16}  Profit\n", "Year", "USD"));
    output.push_str(&format!("  {}\n", "-".repeat(70)));

    for p in projections {
        let b = bar(p.profit.abs(), max);
        let b = if p.profit < 0.0 { b.red() } else { b.green() };
        output.push_str(&format!("  {:>4}  {:>16}  {}\n", p.year, format_usd(p.profit), b));
    }

    output.push('\n');
    output
}

/// Print yearly profit as a bar chart.
pub fn print_projection_chart(projections: &[FinancialProjection]) {
    print!("{}", format_projection_chart(projections));
}
