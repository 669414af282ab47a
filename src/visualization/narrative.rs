use colored::Colorize;

use super::currency::{format_local, format_number, format_payback, format_usd};
use crate::analysis::FarmReport;
use crate::models::FarmParameters;

/// Sentence describing whether the herd's ration is grown on the farm.
pub fn feed_status(params: &FarmParameters, report: &FarmReport) -> String {
    if report.feed.is_self_sufficient() {
        "Self-sufficient in feed.".to_string()
    } else {
        format!(
            "Requires purchasing {} kg of feed annually at {}.",
            format_number(report.feed.purchased_kg, 0),
            format_usd(report.feed.purchase_cost_usd(params))
        )
    }
}

fn energy_status(report: &FarmReport) -> String {
    let e = &report.energy;
    if e.is_self_sufficient() {
        format!(
            "The farm is energy self-sufficient via biogas, selling {} kWh/day of surplus electricity.",
            format_number(e.surplus_kwh_per_day, 1)
        )
    } else {
        format!(
            "Biogas covers only part of the farm's electricity; {} kWh/day is bought from the grid.",
            format_number(e.shortfall_kwh_per_day, 1)
        )
    }
}

/// Plain-language summary of one evaluation, with the usual risks and
/// mitigations attached.
pub fn format_narrative(params: &FarmParameters, report: &FarmReport) -> String {
    let c = &report.currency;
    let product = report.greenhouse.product.to_string().to_lowercase();

    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Summary and Insights".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    output.push_str(&format!(
        "The integrated farm with {} cows, a {} ha soilless greenhouse growing {}, {} ha of grassland \
         and {} ha of deeded land requires an initial investment of {} ({}).\n",
        params.herd.cows,
        params.land.greenhouse_ha,
        product,
        params.land.grassland_ha,
        params.land.deeded_land_ha,
        format_usd(report.total_investment),
        format_local(report.total_investment, c),
    ));
    output.push_str(&format!(
        "It generates an annual revenue of {} ({}) from dairy, {} and surplus electricity, with \
         operating costs of {} ({}), yielding an annual profit of {} ({}).\n",
        format_usd(report.total_revenue),
        format_local(report.total_revenue, c),
        product,
        format_usd(report.total_operating_cost),
        format_local(report.total_operating_cost, c),
        format_usd(report.annual_profit),
        format_local(report.annual_profit, c),
    ));
    output.push_str(&format!(
        "The payback period is {}.\n",
        format_payback(report.payback_years)
    ));
    output.push_str(&format!("{}\n", feed_status(params, report)));
    if let Some(warning) = &report.warning {
        output.push_str(&format!("{}\n", warning.yellow()));
    }
    output.push_str(&format!(
        "Risks include milk and {product} price fluctuations (about 10%), disease outbreaks such as \
         foot-and-mouth disease, and seasonal feed shortages with winter yields dropping 10-15%. \
         Mitigations include long-term buyer contracts, biosecurity and silage storage.\n"
    ));
    output.push_str(&format!("{}\n", energy_status(report)));
    output
}

/// Print the plain-language summary.
pub fn print_narrative(params: &FarmParameters, report: &FarmReport) {
    print!("{}", format_narrative(params, report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{evaluate, LandPolicy};

    #[test]
    fn test_feed_status_purchasing() {
        let params = FarmParameters::default();
        let report = evaluate(&params, LandPolicy::Advisory).unwrap();
        let status = feed_status(&params, &report);
        assert_eq!(
            status,
            "Requires purchasing 22,950 kg of feed annually at $2,295.00."
        );
    }

    #[test]
    fn test_feed_status_self_sufficient() {
        let mut params = FarmParameters::default();
        params.land.deeded_land_ha = 80.0;
        params.land.grassland_ha = 40.0;
        let report = evaluate(&params, LandPolicy::Advisory).unwrap();
        assert_eq!(feed_status(&params, &report), "Self-sufficient in feed.");
    }

    #[test]
    fn test_narrative_mentions_key_figures() {
        let params = FarmParameters::default();
        let report = evaluate(&params, LandPolicy::Advisory).unwrap();
        let text = format_narrative(&params, &report);
        assert!(text.contains("60 cows"));
        assert!(text.contains("$335,000.00"));
        assert!(text.contains("13,400,000.00 TRY"));
        assert!(text.contains("tomato"));
        assert!(text.contains("Risks include"));
        assert!(text.contains("energy self-sufficient"));
        assert!(text.contains("Deeded land insufficient"));
    }

    #[test]
    fn test_narrative_grid_purchase() {
        let mut params = FarmParameters::default();
        params.energy.greenhouse_kwh_per_ha_year = 20_000.0;
        let report = evaluate(&params, LandPolicy::Advisory).unwrap();
        let text = format_narrative(&params, &report);
        assert!(text.contains("bought from the grid"));
    }
}
