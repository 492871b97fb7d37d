pub mod revenue_service;

pub use revenue_service::RevenueService;
