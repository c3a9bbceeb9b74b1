//! Occupancy and payment aggregation views

pub mod model;
pub mod repository;

pub use model::{occupancy_rate, BuildingOccupancy, BuildingPaymentSummary};
pub use repository::StatsRepository;
