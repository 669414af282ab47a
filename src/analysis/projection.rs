use serde::{Deserialize, Serialize};

/// Annual revenue growth used for the standard projection.
pub const REVENUE_GROWTH_RATE: f64 = 0.02;
/// Annual cost growth used for the standard projection.
pub const COST_GROWTH_RATE: f64 = 0.03;
pub const PROJECTION_YEARS: u32 = 5;

/// Compounding growth rates for revenue and cost, applied independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRates {
    pub revenue_growth: f64,
    pub cost_growth: f64,
}

impl Default for ProjectionRates {
    fn default() -> Self {
        Self {
            revenue_growth: REVENUE_GROWTH_RATE,
            cost_growth: COST_GROWTH_RATE,
        }
    }
}

/// One projected year. Year 1 is the evaluated year itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProjection {
    pub year: u32,
    pub revenue: f64,
    pub cost: f64,
    /// `revenue - cost` for the year; may be negative
    pub profit: f64,
}

/// Project revenue and cost forward for `years` years.
///
/// Year `n` carries `revenue * (1 + g_r)^(n-1)` and `cost * (1 + g_c)^(n-1)`;
/// profit is their difference rather than a compounded value of its own.
///
/// ```
/// use integrated_farm_calculator::analysis::{project_finances, ProjectionRates};
///
/// let years = project_finances(100.0, 50.0, 5, &ProjectionRates::default());
/// assert_eq!(years.len(), 5);
/// assert_eq!(years[0].revenue, 100.0);
/// assert!((years[1].cost - 51.5).abs() < 1e-9);
/// ```
pub fn project_finances(
    base_revenue: f64,
    base_cost: f64,
    years: u32,
    rates: &ProjectionRates,
) -> Vec<FinancialProjection> {
    (1..=years)
        .map(|year| {
            let n = (year - 1) as i32;
            let revenue = base_revenue * (1.0 + rates.revenue_growth).powi(n);
            let cost = base_cost * (1.0 + rates.cost_growth).powi(n);
            FinancialProjection {
                year,
                revenue,
                cost,
                profit: revenue - cost,
            }
        })
        .collect()
}
