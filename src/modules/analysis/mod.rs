pub mod controllers;
pub mod models;
pub mod services;

pub use models::AnalysisIntent;
pub use services::{AnalysisReport, AnalysisService};
