use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::Result;
use crate::modules::revenue::models::YearlyRevenue;

/// Read-only access to the yearly revenue table
#[async_trait]
pub trait RevenueRepository: Send + Sync {
    /// Fetch all yearly totals, oldest first
    async fn fetch_yearly(&self) -> Result<Vec<YearlyRevenue>>;
}

#[derive(Debug, FromRow)]
struct YearlyRevenueRow {
    year: i32,
    revenue: Option<Decimal>,
}

pub struct MySqlRevenueRepository {
    pool: MySqlPool,
}

impl MySqlRevenueRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevenueRepository for MySqlRevenueRepository {
    async fn fetch_yearly(&self) -> Result<Vec<YearlyRevenue>> {
        let rows: Vec<YearlyRevenueRow> =
            sqlx::query_as("SELECT year, revenue FROM yearly_revenue ORDER BY year ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|row| YearlyRevenue::new(row.year, row.revenue.unwrap_or(Decimal::ZERO)))
            .collect())
    }
}
