use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::energy::EnergyBalance;
use super::feed::FeedBalance;
use super::investment::InvestmentBreakdown;
use super::land::LandAllocation;
use super::operating::OperatingCosts;
use super::projection::{project_finances, FinancialProjection, ProjectionRates, PROJECTION_YEARS};
use super::revenue::{DairyOutput, GreenhouseOutput, RevenueBreakdown};
use crate::error::FarmError;
use crate::models::{CurrencySettings, FarmParameters};

/// What to do when the deeded land cannot grow the herd's whole ration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandPolicy {
    /// Evaluate anyway; purchased feed covers the gap and the report
    /// carries a warning.
    #[default]
    Advisory,
    /// Refuse to evaluate with [`FarmError::InsufficientLand`].
    Strict,
}

impl std::fmt::Display for LandPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LandPolicy::Advisory => write!(f, "advisory"),
            LandPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for LandPolicy {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "advisory" | "warn" => Ok(LandPolicy::Advisory),
            "strict" | "error" => Ok(LandPolicy::Strict),
            _ => Err(FarmError::ParseError(format!(
                "Unknown land policy: '{s}'. Use advisory or strict"
            ))),
        }
    }
}

/// Everything derived from one evaluation of the farm model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmReport {
    pub land: LandAllocation,
    pub feed: FeedBalance,
    pub investment: InvestmentBreakdown,
    /// Annual operating costs
    pub operating_costs: OperatingCosts,
    pub daily_costs: OperatingCosts,
    pub dairy: DairyOutput,
    pub greenhouse: GreenhouseOutput,
    pub energy: EnergyBalance,
    /// Annual revenue
    pub revenue: RevenueBreakdown,
    pub total_investment: f64,
    pub total_operating_cost: f64,
    pub total_revenue: f64,
    pub annual_profit: f64,
    /// Years to recover the investment; `None` when the farm makes no profit
    pub payback_years: Option<f64>,
    pub projections: Vec<FinancialProjection>,
    /// Advisory raised under [`LandPolicy::Advisory`]
    pub warning: Option<String>,
    pub currency: CurrencySettings,
}

impl FarmReport {
    pub fn is_profitable(&self) -> bool {
        self.annual_profit > 0.0
    }

    pub fn daily_revenue(&self) -> f64 {
        self.dairy.usd_per_day() + self.greenhouse.usd_per_day + self.energy.sale_usd_per_day
    }
}

/// Years needed to recover `investment` from `annual_profit`.
///
/// Undefined (`None`) unless profit is strictly positive.
pub fn payback_period(investment: f64, annual_profit: f64) -> Option<f64> {
    if annual_profit > 0.0 {
        Some(investment / annual_profit)
    } else {
        None
    }
}

/// Evaluate the farm model for one parameter set.
///
/// The parameters are validated first; an invalid dairy split or any other
/// bad input returns an error before anything is computed.
pub fn evaluate(params: &FarmParameters, policy: LandPolicy) -> Result<FarmReport, FarmError> {
    params.validate()?;

    let land = LandAllocation::compute(params);
    debug!(
        pasture_ha = land.pasture_ha,
        feed_crop_ha = land.feed_crop_ha,
        required_ha = land.total_required_ha,
        "land allocated"
    );

    let feed = FeedBalance::compute(params, &land);

    let warning = if land.is_self_sufficient() {
        None
    } else {
        match policy {
            LandPolicy::Strict => {
                return Err(FarmError::InsufficientLand {
                    required_ha: land.total_required_ha,
                    available_ha: land.deeded_land_ha,
                });
            }
            LandPolicy::Advisory => {
                let msg = format!(
                    "Deeded land insufficient for full feed self-sufficiency: need {:.1} ha, provided {:.1} ha. \
                     Purchased feed covers the gap of {:.0} kg DM/year.",
                    land.total_required_ha, land.deeded_land_ha, feed.purchased_kg
                );
                warn!("{msg}");
                Some(msg)
            }
        }
    };

    let energy = EnergyBalance::compute(params);
    debug!(
        produced_kwh = energy.produced_kwh_per_day,
        consumed_kwh = energy.consumed_kwh_per_day,
        "energy balance"
    );

    let investment = InvestmentBreakdown::compute(params);
    let operating_costs = OperatingCosts::compute(params, &feed, &energy);
    let dairy = DairyOutput::compute(params);
    let greenhouse = GreenhouseOutput::compute(params);
    let revenue = RevenueBreakdown::from_outputs(params, &dairy, &greenhouse, &energy);

    let total_investment = investment.total();
    let total_operating_cost = operating_costs.total();
    let total_revenue = revenue.total();
    let annual_profit = total_revenue - total_operating_cost;
    let payback_years = payback_period(total_investment, annual_profit);

    let projections = project_finances(
        total_revenue,
        total_operating_cost,
        PROJECTION_YEARS,
        &ProjectionRates::default(),
    );

    debug!(total_revenue, total_operating_cost, annual_profit, "farm evaluated");

    Ok(FarmReport {
        land,
        feed,
        investment,
        daily_costs: operating_costs.daily(),
        operating_costs,
        dairy,
        greenhouse,
        energy,
        revenue,
        total_investment,
        total_operating_cost,
        total_revenue,
        annual_profit,
        payback_years,
        projections,
        warning,
        currency: params.currency.clone(),
    })
}
