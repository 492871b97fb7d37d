use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::format::format_currency;
use crate::core::query;
use crate::core::response::{ApiResponse, ShareEntryView};
use crate::modules::regions::models::RegionRevenue;
use crate::modules::regions::repositories::MySqlRegionRepository;
use crate::modules::regions::services::RegionService;

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    #[serde(default)]
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRevenueResponse {
    pub region: String,
    pub revenue: String,
}

impl From<RegionRevenue> for RegionRevenueResponse {
    fn from(record: RegionRevenue) -> Self {
        Self {
            region: record.region,
            revenue: format_currency(record.revenue),
        }
    }
}

fn service(pool: &web::Data<MySqlPool>) -> RegionService<MySqlRegionRepository> {
    RegionService::new(MySqlRegionRepository::new(pool.get_ref().clone()))
}

/// GET /regions
pub async fn top_regions(
    pool: web::Data<MySqlPool>,
    app: web::Data<AppConfig>,
    query: web::Query<TopQuery>,
) -> Result<HttpResponse, AppError> {
    let limit = query::limit_or_default(query.limit.as_deref(), app.default_top_limit);
    let regions = service(&pool).top_regions(limit).await?;

    let data: Vec<RegionRevenueResponse> = regions
        .into_iter()
        .map(RegionRevenueResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Top regions by revenue", data)))
}

/// GET /regions/share
pub async fn revenue_share(
    pool: web::Data<MySqlPool>,
    app: web::Data<AppConfig>,
    query: web::Query<TopQuery>,
) -> Result<HttpResponse, AppError> {
    let limit = query::limit_or_default(query.limit.as_deref(), app.default_top_limit);
    let shares = service(&pool).revenue_share(limit).await?;

    let data: Vec<ShareEntryView> = shares.into_iter().map(ShareEntryView::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Region revenue share", data)))
}

/// Configure routes for the regions module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/regions")
            .route("", web::get().to(top_regions))
            .route("/share", web::get().to(revenue_share)),
    );
}
