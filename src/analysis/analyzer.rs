use crate::analysis::{
    evaluate, project_finances, DairyOutput, EnergyBalance, FarmReport, FeedBalance,
    FinancialProjection, GreenhouseOutput, InvestmentBreakdown, LandAllocation, LandPolicy,
    ProjectionRates,
};
use crate::error::FarmError;
use crate::models::FarmParameters;

/// Unified analysis API over one parameter set.
pub struct FarmAnalyzer<'a> {
    params: &'a FarmParameters,
    policy: LandPolicy,
}

impl<'a> FarmAnalyzer<'a> {
    /// Create an analyzer using the advisory land policy.
    pub fn new(params: &'a FarmParameters) -> Self {
        Self {
            params,
            policy: LandPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LandPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> LandPolicy {
        self.policy
    }

    pub fn land(&self) -> LandAllocation {
        LandAllocation::compute(self.params)
    }

    pub fn feed(&self) -> FeedBalance {
        FeedBalance::compute(self.params, &self.land())
    }

    pub fn energy(&self) -> EnergyBalance {
        EnergyBalance::compute(self.params)
    }

    pub fn investment(&self) -> InvestmentBreakdown {
        InvestmentBreakdown::compute(self.params)
    }

    pub fn dairy(&self) -> DairyOutput {
        DairyOutput::compute(self.params)
    }

    pub fn greenhouse(&self) -> GreenhouseOutput {
        GreenhouseOutput::compute(self.params)
    }

    /// Run the full model.
    pub fn evaluate(&self) -> Result<FarmReport, FarmError> {
        evaluate(self.params, self.policy)
    }

    /// Project the evaluated year forward with custom growth rates.
    pub fn project(
        &self,
        years: u32,
        rates: &ProjectionRates,
    ) -> Result<Vec<FinancialProjection>, FarmError> {
        let report = self.evaluate()?;
        Ok(project_finances(
            report.total_revenue,
            report.total_operating_cost,
            years,
            rates,
        ))
    }
}
