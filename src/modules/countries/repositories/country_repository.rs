use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::Result;
use crate::modules::countries::models::CountryRevenue;

/// Read-only access to the per-country revenue table
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Fetch the full country revenue set in storage order
    async fn fetch_all(&self) -> Result<Vec<CountryRevenue>>;

    /// Look up a single country by exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<CountryRevenue>>;
}

#[derive(Debug, FromRow)]
struct CountryRevenueRow {
    country: String,
    revenue: Option<Decimal>,
}

impl From<CountryRevenueRow> for CountryRevenue {
    fn from(row: CountryRevenueRow) -> Self {
        // Missing metrics default to zero once, here at the boundary
        CountryRevenue::new(row.country, row.revenue.unwrap_or(Decimal::ZERO))
    }
}

pub struct MySqlCountryRepository {
    pool: MySqlPool,
}

impl MySqlCountryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for MySqlCountryRepository {
    async fn fetch_all(&self) -> Result<Vec<CountryRevenue>> {
        let rows: Vec<CountryRevenueRow> =
            sqlx::query_as("SELECT country, revenue FROM country_revenue")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(CountryRevenue::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<CountryRevenue>> {
        let row: Option<CountryRevenueRow> =
            sqlx::query_as("SELECT country, revenue FROM country_revenue WHERE country = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(CountryRevenue::from))
    }
}
