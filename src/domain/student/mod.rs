//! Student aggregate
//!
//! Students occupy a bed in a room; the room must belong to the student's
//! building and may not hold more students than its capacity.

pub mod model;
pub mod repository;

pub use model::{Gender, Student, StudentData, StudentFilter};
pub use repository::StudentRepository;
