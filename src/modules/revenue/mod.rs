pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{DashboardSummary, YearlyRevenue};
pub use repositories::RevenueRepository;
pub use services::RevenueService;
