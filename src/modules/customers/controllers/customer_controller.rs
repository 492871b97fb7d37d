use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::config::AppConfig;
use crate::core::engine::{FilterSpec, GrowthClass, GrowthDistribution};
use crate::core::error::AppError;
use crate::core::format::{format_currency, format_percentage};
use crate::core::query;
use crate::core::response::{ApiResponse, PagedResponse};
use crate::modules::customers::models::{CustomerRevenue, CustomerSortKey};
use crate::modules::customers::repositories::MySqlCustomerRepository;
use crate::modules::customers::services::CustomerService;

/// Query parameters for the customer list.
///
/// All fields are parsed leniently; malformed values fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListQuery {
    #[serde(default)]
    pub min_q4_revenue: Option<String>,
    #[serde(default)]
    pub positive_growth_only: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub page_size: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    #[serde(default)]
    pub limit: Option<String>,
}

/// Customer row as rendered by the dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRevenueResponse {
    pub customer: String,
    pub q3_revenue: String,
    pub q4_revenue: String,
    pub variance: String,
    pub growth: &'static str,
}

impl CustomerRevenueResponse {
    /// Render a record with an already-computed growth classification.
    pub fn with_class(record: CustomerRevenue, class: GrowthClass) -> Self {
        Self {
            customer: record.customer,
            q3_revenue: format_currency(record.q3_revenue),
            q4_revenue: format_currency(record.q4_revenue),
            variance: format_currency(record.variance),
            growth: class.as_str(),
        }
    }
}

impl From<CustomerRevenue> for CustomerRevenueResponse {
    fn from(record: CustomerRevenue) -> Self {
        let class = GrowthClass::from_variance(record.variance);
        Self::with_class(record, class)
    }
}

/// Growth-distribution statistics as rendered by the dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthStatsResponse {
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub positive_percentage: String,
    pub negative_percentage: String,
    pub neutral_percentage: String,
    pub q3_total: String,
    pub q4_total: String,
}

impl From<GrowthDistribution> for GrowthStatsResponse {
    fn from(dist: GrowthDistribution) -> Self {
        Self {
            positive_count: dist.positive_count,
            negative_count: dist.negative_count,
            neutral_count: dist.neutral_count,
            positive_percentage: format_percentage(dist.positive_percentage),
            negative_percentage: format_percentage(dist.negative_percentage),
            neutral_percentage: format_percentage(dist.neutral_percentage),
            q3_total: format_currency(dist.q3_total),
            q4_total: format_currency(dist.q4_total),
        }
    }
}

fn service(pool: &web::Data<MySqlPool>) -> CustomerService<MySqlCustomerRepository> {
    CustomerService::new(MySqlCustomerRepository::new(pool.get_ref().clone()))
}

/// GET /customers
///
/// Filtered, sorted, paginated customer list with the pagination block.
pub async fn list_customers(
    pool: web::Data<MySqlPool>,
    params: web::Query<CustomerListQuery>,
) -> Result<HttpResponse, AppError> {
    let spec = FilterSpec {
        min_q4_revenue: query::decimal_or_zero(params.min_q4_revenue.as_deref()),
        positive_growth_only: query::flag(params.positive_growth_only.as_deref()),
        page: query::page_or_default(params.page.as_deref()),
        page_size: query::page_size_or_default(params.page_size.as_deref()),
    };
    let sort_key = CustomerSortKey::parse(params.sort_by.as_deref());

    let page = service(&pool).list(spec, sort_key).await?;

    let data: Vec<CustomerRevenueResponse> = page
        .items
        .into_iter()
        .map(CustomerRevenueResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(PagedResponse::ok("Customer list", data, page.info)))
}

/// GET /customers/top
pub async fn top_customers(
    pool: web::Data<MySqlPool>,
    app: web::Data<AppConfig>,
    params: web::Query<TopQuery>,
) -> Result<HttpResponse, AppError> {
    let limit = query::limit_or_default(params.limit.as_deref(), app.default_top_limit);
    let customers = service(&pool).top_customers(limit).await?;

    let data: Vec<CustomerRevenueResponse> = customers
        .into_iter()
        .map(CustomerRevenueResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Top customers by total revenue", data)))
}

/// GET /customers/growth
pub async fn growth_statistics(pool: web::Data<MySqlPool>) -> Result<HttpResponse, AppError> {
    let dist = service(&pool).growth_statistics().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Customer growth distribution",
        GrowthStatsResponse::from(dist),
    )))
}

/// GET /customers/{name}
pub async fn customer_detail(
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    let (customer, class) = service(&pool).customer_detail(&name).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Customer detail",
        CustomerRevenueResponse::with_class(customer, class),
    )))
}

/// Configure routes for the customers module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .route("", web::get().to(list_customers))
            .route("/top", web::get().to(top_customers))
            .route("/growth", web::get().to(growth_statistics))
            .route("/{name}", web::get().to(customer_detail)),
    );
}
