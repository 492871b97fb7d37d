pub mod analysis;
pub mod countries;
pub mod customers;
pub mod health;
pub mod regions;
pub mod revenue;
