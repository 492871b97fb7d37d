pub mod yearly_revenue;

pub use yearly_revenue::{DashboardSummary, YearlyRevenue};
