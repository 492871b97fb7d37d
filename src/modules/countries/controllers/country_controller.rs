use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::format::format_currency;
use crate::core::query;
use crate::core::response::{ApiResponse, ShareEntryView};
use crate::modules::countries::models::CountryRevenue;
use crate::modules::countries::repositories::MySqlCountryRepository;
use crate::modules::countries::services::CountryService;

/// Query parameters for top-N country reports
#[derive(Debug, Deserialize)]
pub struct TopQuery {
    /// Parsed leniently: malformed or non-positive values fall back to the
    /// default limit instead of a 400
    #[serde(default)]
    pub limit: Option<String>,
}

/// Country row as rendered by the dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRevenueResponse {
    pub country: String,
    pub revenue: String,
}

impl From<CountryRevenue> for CountryRevenueResponse {
    fn from(record: CountryRevenue) -> Self {
        Self {
            country: record.country,
            revenue: format_currency(record.revenue),
        }
    }
}

fn service(pool: &web::Data<MySqlPool>) -> CountryService<MySqlCountryRepository> {
    CountryService::new(MySqlCountryRepository::new(pool.get_ref().clone()))
}

/// GET /countries
///
/// Top-N countries by yearly revenue.
pub async fn top_countries(
    pool: web::Data<MySqlPool>,
    app: web::Data<AppConfig>,
    query: web::Query<TopQuery>,
) -> Result<HttpResponse, AppError> {
    let limit = query::limit_or_default(query.limit.as_deref(), app.default_top_limit);
    let countries = service(&pool).top_countries(limit).await?;

    let data: Vec<CountryRevenueResponse> = countries
        .into_iter()
        .map(CountryRevenueResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Top countries by revenue", data)))
}

/// GET /countries/share
///
/// Revenue share of the top-N countries with an "Others" rollup.
pub async fn revenue_share(
    pool: web::Data<MySqlPool>,
    app: web::Data<AppConfig>,
    query: web::Query<TopQuery>,
) -> Result<HttpResponse, AppError> {
    let limit = query::limit_or_default(query.limit.as_deref(), app.default_top_limit);
    let shares = service(&pool).revenue_share(limit).await?;

    let data: Vec<ShareEntryView> = shares.into_iter().map(ShareEntryView::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Country revenue share", data)))
}

/// GET /countries/{name}
pub async fn country_detail(
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    let country = service(&pool).country_detail(&name).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Country detail",
        CountryRevenueResponse::from(country),
    )))
}

/// Configure routes for the countries module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/countries")
            .route("", web::get().to(top_countries))
            .route("/share", web::get().to(revenue_share))
            .route("/{name}", web::get().to(country_detail)),
    );
}
