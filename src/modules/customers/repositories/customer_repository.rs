use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::Result;
use crate::modules::customers::models::CustomerRevenue;

/// Read-only access to the per-customer quarterly revenue table
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Fetch the full customer set in storage order
    async fn fetch_all(&self) -> Result<Vec<CustomerRevenue>>;

    /// Look up a single customer by exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<CustomerRevenue>>;
}

#[derive(Debug, FromRow)]
struct CustomerRevenueRow {
    customer: String,
    q3_revenue: Option<Decimal>,
    q4_revenue: Option<Decimal>,
}

impl From<CustomerRevenueRow> for CustomerRevenue {
    fn from(row: CustomerRevenueRow) -> Self {
        CustomerRevenue::new(
            row.customer,
            row.q3_revenue.unwrap_or(Decimal::ZERO),
            row.q4_revenue.unwrap_or(Decimal::ZERO),
        )
    }
}

pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn fetch_all(&self) -> Result<Vec<CustomerRevenue>> {
        let rows: Vec<CustomerRevenueRow> =
            sqlx::query_as("SELECT customer, q3_revenue, q4_revenue FROM customer_revenue")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(CustomerRevenue::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<CustomerRevenue>> {
        let row: Option<CustomerRevenueRow> = sqlx::query_as(
            "SELECT customer, q3_revenue, q4_revenue FROM customer_revenue WHERE customer = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CustomerRevenue::from))
    }
}
