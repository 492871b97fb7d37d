pub mod region_controller;

pub use region_controller::configure;
