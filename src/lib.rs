//! # Dormitory Management Service
//!
//! Buildings, rooms, resident students and fee payments, with room
//! capacity enforced at admission time.
//!
//! ## Architecture
//!
//! - **domain**: entities, value enums and repository traits
//! - **application**: use cases, referential validation and staff identity
//! - **infrastructure**: SeaORM persistence, migrations, admission control,
//!   store error translation, JWT and password hashing
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: error type, pagination and input helpers

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::http::{create_api_router, AppState};
