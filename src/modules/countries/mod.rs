pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::CountryRevenue;
pub use repositories::CountryRepository;
pub use services::CountryService;
