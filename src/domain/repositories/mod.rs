//! Repository traits for the domain layer
//!
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::building::BuildingRepository;
use super::payment::PaymentRepository;
use super::room::RoomRepository;
use super::stats::StatsRepository;
use super::student::StudentRepository;
use super::user::UserRepository;

pub use crate::shared::DomainResult;

/// Provides access to all domain repositories over one store.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let room = repos.rooms().find_by_id(101).await?;
///     let occupancy = repos.stats().building_occupancy().await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn buildings(&self) -> &dyn BuildingRepository;
    fn rooms(&self) -> &dyn RoomRepository;
    fn students(&self) -> &dyn StudentRepository;
    fn payments(&self) -> &dyn PaymentRepository;
    fn users(&self) -> &dyn UserRepository;
    fn stats(&self) -> &dyn StatsRepository;
}
