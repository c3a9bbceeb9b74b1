//! User aggregate
//!
//! Staff accounts: the people who log in and manage the dormitories.

pub mod model;
pub mod repository;

pub use model::{User, UserData, UserFilter, UserRole};
pub use repository::UserRepository;
