//! Aggregation views

pub mod handlers;

pub use handlers::*;
