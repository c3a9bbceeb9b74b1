//! Credentials: bcrypt password hashes and signed session tokens.

pub mod jwt;
pub mod password;
