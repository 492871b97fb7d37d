pub mod region_repository;

pub use region_repository::{MySqlRegionRepository, RegionRepository};
