//! SalesPulse Reporting Backend Library
//!
//! This library provides the reporting backend behind the SalesPulse
//! dashboard: pre-aggregated revenue, customer, country, and region
//! analytics served over a REST API.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::analysis;
pub use modules::countries;
pub use modules::customers;
pub use modules::regions;
pub use modules::revenue;
