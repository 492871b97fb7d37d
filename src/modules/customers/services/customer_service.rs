use tracing::info;

use crate::core::engine::{
    filter_and_paginate, growth_distribution, rank_by, FilterSpec, GrowthClass,
    GrowthDistribution, Page,
};
use crate::core::{AppError, Result};
use crate::modules::customers::models::{CustomerRevenue, CustomerSortKey};
use crate::modules::customers::repositories::CustomerRepository;

/// Service producing the customer growth reports
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Filtered, sorted, paginated customer list.
    ///
    /// Filtering runs on raw metric values; the sort key belongs to the
    /// requesting report (variance for the growth view, Q4 revenue for the
    /// revenue view).
    pub async fn list(
        &self,
        spec: FilterSpec,
        sort_key: CustomerSortKey,
    ) -> Result<Page<CustomerRevenue>> {
        let customers = self.repo.fetch_all().await?;
        info!(
            count = customers.len(),
            page = spec.page,
            page_size = spec.page_size,
            "Listing customers"
        );
        Ok(filter_and_paginate(&customers, &spec, |c| {
            sort_key.metric(c)
        }))
    }

    /// Top `limit` customers by combined Q3+Q4 revenue
    pub async fn top_customers(&self, limit: usize) -> Result<Vec<CustomerRevenue>> {
        let customers = self.repo.fetch_all().await?;
        Ok(rank_by(&customers, |c| c.total_revenue, limit))
    }

    /// Growth-distribution statistics over the full customer set
    pub async fn growth_statistics(&self) -> Result<GrowthDistribution> {
        let customers = self.repo.fetch_all().await?;
        Ok(growth_distribution(&customers))
    }

    /// Single-customer detail with its growth classification
    pub async fn customer_detail(&self, name: &str) -> Result<(CustomerRevenue, GrowthClass)> {
        let customer = self
            .repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("customer '{}'", name)))?;

        let class = GrowthClass::from_variance(customer.variance);
        Ok((customer, class))
    }
}
