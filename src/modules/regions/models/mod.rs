pub mod region_revenue;

pub use region_revenue::RegionRevenue;
