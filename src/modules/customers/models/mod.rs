pub mod customer_revenue;

pub use customer_revenue::{CustomerRevenue, CustomerSortKey};
