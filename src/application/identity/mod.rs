//! Identity module: staff accounts & authentication
//!
//! Contains the `UserService` which orchestrates login, account
//! management and the bootstrap admin account.

pub mod service;

pub use service::{AuthResult, DefaultAdmin, UserInput, UserService};
