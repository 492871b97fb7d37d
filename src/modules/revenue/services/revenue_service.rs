use rust_decimal::Decimal;
use tracing::info;

use crate::core::engine::{growth_distribution, share_with_others};
use crate::core::Result;
use crate::modules::countries::repositories::CountryRepository;
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::revenue::models::{DashboardSummary, YearlyRevenue};
use crate::modules::revenue::repositories::RevenueRepository;

/// Number of countries shown on the dashboard's share widget
const SUMMARY_COUNTRY_LIMIT: usize = 5;

/// Service producing the yearly revenue report and the dashboard summary
pub struct RevenueService<Rev, Cty, Cust>
where
    Rev: RevenueRepository,
    Cty: CountryRepository,
    Cust: CustomerRepository,
{
    revenue_repo: Rev,
    country_repo: Cty,
    customer_repo: Cust,
}

impl<Rev, Cty, Cust> RevenueService<Rev, Cty, Cust>
where
    Rev: RevenueRepository,
    Cty: CountryRepository,
    Cust: CustomerRepository,
{
    pub fn new(revenue_repo: Rev, country_repo: Cty, customer_repo: Cust) -> Self {
        Self {
            revenue_repo,
            country_repo,
            customer_repo,
        }
    }

    /// Yearly revenue trend, oldest year first
    pub async fn yearly_revenue(&self) -> Result<Vec<YearlyRevenue>> {
        self.revenue_repo.fetch_yearly().await
    }

    /// Dashboard landing summary.
    ///
    /// The country and customer sets are independent, so their fetches run
    /// concurrently; the engine work stays purely computational once both
    /// are materialized.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        let (countries, customers) = tokio::try_join!(
            self.country_repo.fetch_all(),
            self.customer_repo.fetch_all(),
        )?;

        info!(
            countries = countries.len(),
            customers = customers.len(),
            "Building dashboard summary"
        );

        let top_countries = share_with_others(
            &countries,
            |c| c.revenue,
            |c| c.country.as_str(),
            SUMMARY_COUNTRY_LIMIT,
        );
        let customer_growth = growth_distribution(&customers);

        let q3_total: Decimal = customers.iter().map(|c| c.q3_revenue).sum();
        let q4_total: Decimal = customers.iter().map(|c| c.q4_revenue).sum();

        Ok(DashboardSummary {
            q3_total,
            q4_total,
            grand_total: q3_total + q4_total,
            top_countries,
            customer_growth,
        })
    }
}
