mod analyzer;
mod energy;
mod feed;
mod investment;
mod land;
mod operating;
mod projection;
mod report;
mod revenue;

pub use analyzer::FarmAnalyzer;
pub use energy::EnergyBalance;
pub use feed::FeedBalance;
pub use investment::InvestmentBreakdown;
pub use land::LandAllocation;
pub use operating::OperatingCosts;
pub use projection::{
    project_finances, FinancialProjection, ProjectionRates, COST_GROWTH_RATE, PROJECTION_YEARS,
    REVENUE_GROWTH_RATE,
};
pub use report::{evaluate, payback_period, FarmReport, LandPolicy};
pub use revenue::{DairyOutput, GreenhouseOutput, RevenueBreakdown};
