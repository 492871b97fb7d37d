pub mod country_revenue;

pub use country_revenue::CountryRevenue;
