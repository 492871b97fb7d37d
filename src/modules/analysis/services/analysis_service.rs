use tracing::info;

use crate::core::engine::{
    growth_distribution, rank_by, share_with_others, GrowthDistribution, ShareEntry,
};
use crate::core::Result;
use crate::modules::analysis::models::AnalysisIntent;
use crate::modules::countries::models::CountryRevenue;
use crate::modules::countries::repositories::CountryRepository;
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::regions::repositories::RegionRepository;
use crate::modules::revenue::models::YearlyRevenue;
use crate::modules::revenue::repositories::RevenueRepository;

/// Result of dispatching a classified prompt to the matching report.
#[derive(Debug)]
pub enum AnalysisReport {
    TopCountries(Vec<CountryRevenue>),
    RevenueShare(Vec<ShareEntry>),
    CustomerGrowth(GrowthDistribution),
    RegionBreakdown(Vec<ShareEntry>),
    RevenueTrend(Vec<YearlyRevenue>),
    Unsupported { supported: Vec<&'static str> },
}

/// Service dispatching analysis prompts to the report computations
pub struct AnalysisService<Cty, Cust, Reg, Rev>
where
    Cty: CountryRepository,
    Cust: CustomerRepository,
    Reg: RegionRepository,
    Rev: RevenueRepository,
{
    country_repo: Cty,
    customer_repo: Cust,
    region_repo: Reg,
    revenue_repo: Rev,
    /// Configured fallback for the ranked and share reports
    top_limit: usize,
}

impl<Cty, Cust, Reg, Rev> AnalysisService<Cty, Cust, Reg, Rev>
where
    Cty: CountryRepository,
    Cust: CustomerRepository,
    Reg: RegionRepository,
    Rev: RevenueRepository,
{
    pub fn new(
        country_repo: Cty,
        customer_repo: Cust,
        region_repo: Reg,
        revenue_repo: Rev,
        top_limit: usize,
    ) -> Self {
        Self {
            country_repo,
            customer_repo,
            region_repo,
            revenue_repo,
            top_limit,
        }
    }

    /// Classify a prompt and run the matching report.
    pub async fn analyze(&self, prompt: &str) -> Result<(AnalysisIntent, AnalysisReport)> {
        let intent = AnalysisIntent::classify(prompt);
        info!(?intent, "Classified analysis prompt");

        let report = match intent {
            AnalysisIntent::TopCountries => {
                let countries = self.country_repo.fetch_all().await?;
                AnalysisReport::TopCountries(rank_by(&countries, |c| c.revenue, self.top_limit))
            }
            AnalysisIntent::RevenueShare => {
                let countries = self.country_repo.fetch_all().await?;
                AnalysisReport::RevenueShare(share_with_others(
                    &countries,
                    |c| c.revenue,
                    |c| c.country.as_str(),
                    self.top_limit,
                ))
            }
            AnalysisIntent::CustomerGrowth => {
                let customers = self.customer_repo.fetch_all().await?;
                AnalysisReport::CustomerGrowth(growth_distribution(&customers))
            }
            AnalysisIntent::RegionBreakdown => {
                let regions = self.region_repo.fetch_all().await?;
                AnalysisReport::RegionBreakdown(share_with_others(
                    &regions,
                    |r| r.revenue,
                    |r| r.region.as_str(),
                    self.top_limit,
                ))
            }
            AnalysisIntent::RevenueTrend => {
                AnalysisReport::RevenueTrend(self.revenue_repo.fetch_yearly().await?)
            }
            AnalysisIntent::Unknown => AnalysisReport::Unsupported {
                supported: AnalysisIntent::supported_prompts(),
            },
        };

        Ok((intent, report))
    }
}
