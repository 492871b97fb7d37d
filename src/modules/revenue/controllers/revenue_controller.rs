use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::MySqlPool;

use crate::core::error::AppError;
use crate::core::format::{format_currency, format_percentage};
use crate::core::response::{ApiResponse, ShareEntryView};
use crate::modules::countries::repositories::MySqlCountryRepository;
use crate::modules::customers::repositories::MySqlCustomerRepository;
use crate::modules::revenue::models::{DashboardSummary, YearlyRevenue};
use crate::modules::revenue::repositories::MySqlRevenueRepository;
use crate::modules::revenue::services::RevenueService;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyRevenueResponse {
    pub year: i32,
    pub revenue: String,
}

impl From<YearlyRevenue> for YearlyRevenueResponse {
    fn from(record: YearlyRevenue) -> Self {
        Self {
            year: record.year,
            revenue: format_currency(record.revenue),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryResponse {
    pub generated_at: DateTime<Utc>,
    pub q3_total: String,
    pub q4_total: String,
    pub grand_total: String,
    pub top_countries: Vec<ShareEntryView>,
    pub positive_growth_customers: usize,
    pub negative_growth_customers: usize,
    pub neutral_growth_customers: usize,
    pub positive_growth_percentage: String,
}

impl From<DashboardSummary> for DashboardSummaryResponse {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            generated_at: Utc::now(),
            q3_total: format_currency(summary.q3_total),
            q4_total: format_currency(summary.q4_total),
            grand_total: format_currency(summary.grand_total),
            top_countries: summary
                .top_countries
                .into_iter()
                .map(ShareEntryView::from)
                .collect(),
            positive_growth_customers: summary.customer_growth.positive_count,
            negative_growth_customers: summary.customer_growth.negative_count,
            neutral_growth_customers: summary.customer_growth.neutral_count,
            positive_growth_percentage: format_percentage(
                summary.customer_growth.positive_percentage,
            ),
        }
    }
}

fn service(
    pool: &web::Data<MySqlPool>,
) -> RevenueService<MySqlRevenueRepository, MySqlCountryRepository, MySqlCustomerRepository> {
    let pool = pool.get_ref();
    RevenueService::new(
        MySqlRevenueRepository::new(pool.clone()),
        MySqlCountryRepository::new(pool.clone()),
        MySqlCustomerRepository::new(pool.clone()),
    )
}

/// GET /revenue/yearly
pub async fn yearly_revenue(pool: web::Data<MySqlPool>) -> Result<HttpResponse, AppError> {
    let rows = service(&pool).yearly_revenue().await?;

    let data: Vec<YearlyRevenueResponse> = rows
        .into_iter()
        .map(YearlyRevenueResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Yearly revenue", data)))
}

/// GET /revenue/summary
pub async fn dashboard_summary(pool: web::Data<MySqlPool>) -> Result<HttpResponse, AppError> {
    let summary = service(&pool).dashboard_summary().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Dashboard summary",
        DashboardSummaryResponse::from(summary),
    )))
}

/// Configure routes for the revenue module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/revenue")
            .route("/yearly", web::get().to(yearly_revenue))
            .route("/summary", web::get().to(dashboard_summary)),
    );
}
