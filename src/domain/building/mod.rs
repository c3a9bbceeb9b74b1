//! Building aggregate
//!
//! An apartment building owning zero or more rooms.

pub mod model;
pub mod repository;

pub use model::{Building, BuildingData, BuildingFilter};
pub use repository::BuildingRepository;
