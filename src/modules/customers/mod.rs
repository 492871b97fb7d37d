pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CustomerRevenue, CustomerSortKey};
pub use repositories::CustomerRepository;
pub use services::CustomerService;
