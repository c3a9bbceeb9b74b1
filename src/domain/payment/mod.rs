//! Payment aggregate

pub mod model;
pub mod repository;

pub use model::{Payment, PaymentData, PaymentFilter, PaymentType};
pub use repository::PaymentRepository;
