//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod building_repository;
mod listing;
pub mod payment_repository;
pub mod repository_provider;
pub mod room_repository;
pub mod stats_repository;
pub mod student_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
