use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::MySqlPool;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::response::ShareEntryView;
use crate::modules::analysis::models::{AnalysisIntent, AnalysisRequest};
use crate::modules::analysis::services::{AnalysisReport, AnalysisService};
use crate::modules::countries::controllers::country_controller::CountryRevenueResponse;
use crate::modules::countries::repositories::MySqlCountryRepository;
use crate::modules::customers::controllers::customer_controller::GrowthStatsResponse;
use crate::modules::customers::repositories::MySqlCustomerRepository;
use crate::modules::regions::repositories::MySqlRegionRepository;
use crate::modules::revenue::controllers::revenue_controller::YearlyRevenueResponse;
use crate::modules::revenue::repositories::MySqlRevenueRepository;

/// Analysis envelope; carries the classified intent alongside the data
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub message: String,
    pub intent: AnalysisIntent,
    pub data: AnalysisData,
}

/// Payload of an analysis response, one shape per report kind
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalysisData {
    Countries(Vec<CountryRevenueResponse>),
    Shares(Vec<ShareEntryView>),
    Growth(GrowthStatsResponse),
    Trend(Vec<YearlyRevenueResponse>),
    Unsupported {
        #[serde(rename = "supportedPrompts")]
        supported_prompts: Vec<&'static str>,
    },
}

fn service(
    pool: &web::Data<MySqlPool>,
    app: &web::Data<AppConfig>,
) -> AnalysisService<
    MySqlCountryRepository,
    MySqlCustomerRepository,
    MySqlRegionRepository,
    MySqlRevenueRepository,
> {
    let pool = pool.get_ref();
    AnalysisService::new(
        MySqlCountryRepository::new(pool.clone()),
        MySqlCustomerRepository::new(pool.clone()),
        MySqlRegionRepository::new(pool.clone()),
        MySqlRevenueRepository::new(pool.clone()),
        app.default_top_limit,
    )
}

fn render(intent: AnalysisIntent, report: AnalysisReport) -> AnalysisResponse {
    let (message, data) = match report {
        AnalysisReport::TopCountries(countries) => (
            "Top countries by revenue".to_string(),
            AnalysisData::Countries(
                countries
                    .into_iter()
                    .map(CountryRevenueResponse::from)
                    .collect(),
            ),
        ),
        AnalysisReport::RevenueShare(shares) => (
            "Revenue share by country".to_string(),
            AnalysisData::Shares(shares.into_iter().map(ShareEntryView::from).collect()),
        ),
        AnalysisReport::CustomerGrowth(dist) => (
            "Customer growth between Q3 and Q4".to_string(),
            AnalysisData::Growth(GrowthStatsResponse::from(dist)),
        ),
        AnalysisReport::RegionBreakdown(shares) => (
            "Revenue breakdown by region".to_string(),
            AnalysisData::Shares(shares.into_iter().map(ShareEntryView::from).collect()),
        ),
        AnalysisReport::RevenueTrend(years) => (
            "Yearly revenue trend".to_string(),
            AnalysisData::Trend(years.into_iter().map(YearlyRevenueResponse::from).collect()),
        ),
        AnalysisReport::Unsupported { supported } => (
            "I couldn't match that question to a report. Try one of these.".to_string(),
            AnalysisData::Unsupported {
                supported_prompts: supported,
            },
        ),
    };

    AnalysisResponse {
        success: true,
        message,
        intent,
        data,
    }
}

/// POST /analysis
pub async fn analyze(
    pool: web::Data<MySqlPool>,
    app: web::Data<AppConfig>,
    request: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, AppError> {
    let (intent, report) = service(&pool, &app).analyze(&request.prompt).await?;
    Ok(HttpResponse::Ok().json(render(intent, report)))
}

/// Configure routes for the analysis module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/analysis").route("", web::post().to(analyze)));
}
