pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::RegionRevenue;
pub use repositories::RegionRepository;
pub use services::RegionService;
