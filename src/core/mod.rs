pub mod engine;
pub mod error;
pub mod format;
pub mod query;
pub mod response;

pub use error::{AppError, Result};
pub use response::{ApiResponse, PagedResponse};
