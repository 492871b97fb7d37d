use tracing::info;

use crate::core::engine::{rank_by, share_with_others, ShareEntry};
use crate::core::{AppError, Result};
use crate::modules::countries::models::CountryRevenue;
use crate::modules::countries::repositories::CountryRepository;

/// Service producing the per-country revenue reports
pub struct CountryService<R: CountryRepository> {
    repo: R,
}

impl<R: CountryRepository> CountryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Top `limit` countries by revenue, descending
    pub async fn top_countries(&self, limit: usize) -> Result<Vec<CountryRevenue>> {
        let countries = self.repo.fetch_all().await?;
        info!(count = countries.len(), limit, "Ranking countries by revenue");
        Ok(rank_by(&countries, |c| c.revenue, limit))
    }

    /// Revenue share of the top `limit` countries, with the rest rolled into
    /// an "Others" entry
    pub async fn revenue_share(&self, limit: usize) -> Result<Vec<ShareEntry>> {
        let countries = self.repo.fetch_all().await?;
        Ok(share_with_others(
            &countries,
            |c| c.revenue,
            |c| c.country.as_str(),
            limit,
        ))
    }

    /// Single-country lookup; absence surfaces as NotFound
    pub async fn country_detail(&self, name: &str) -> Result<CountryRevenue> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("country '{}'", name)))
    }
}
