pub mod auth;
pub mod buildings;
pub mod health;
pub mod payments;
pub mod rooms;
pub mod stats;
pub mod students;
pub mod users;
