pub mod intent;

pub use intent::{AnalysisIntent, AnalysisRequest};
