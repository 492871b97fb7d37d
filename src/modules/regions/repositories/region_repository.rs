use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::Result;
use crate::modules::regions::models::RegionRevenue;

/// Read-only access to the per-region revenue table
#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<RegionRevenue>>;
}

#[derive(Debug, FromRow)]
struct RegionRevenueRow {
    region: String,
    revenue: Option<Decimal>,
}

pub struct MySqlRegionRepository {
    pool: MySqlPool,
}

impl MySqlRegionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for MySqlRegionRepository {
    async fn fetch_all(&self) -> Result<Vec<RegionRevenue>> {
        let rows: Vec<RegionRevenueRow> =
            sqlx::query_as("SELECT region, revenue FROM region_revenue")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|row| RegionRevenue::new(row.region, row.revenue.unwrap_or(Decimal::ZERO)))
            .collect())
    }
}
