//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::building::BuildingRepository;
use crate::domain::payment::PaymentRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::room::RoomRepository;
use crate::domain::stats::StatsRepository;
use crate::domain::student::StudentRepository;
use crate::domain::user::UserRepository;

use super::building_repository::SeaOrmBuildingRepository;
use super::payment_repository::SeaOrmPaymentRepository;
use super::room_repository::SeaOrmRoomRepository;
use super::stats_repository::SeaOrmStatsRepository;
use super::student_repository::SeaOrmStudentRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let room = repos.rooms().find_by_id(3).await?;
/// let page = repos.students().list(filter, PageRequest::all()).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    buildings: SeaOrmBuildingRepository,
    rooms: SeaOrmRoomRepository,
    students: SeaOrmStudentRepository,
    payments: SeaOrmPaymentRepository,
    users: SeaOrmUserRepository,
    stats: SeaOrmStatsRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            buildings: SeaOrmBuildingRepository::new(db.clone()),
            rooms: SeaOrmRoomRepository::new(db.clone()),
            students: SeaOrmStudentRepository::new(db.clone()),
            payments: SeaOrmPaymentRepository::new(db.clone()),
            users: SeaOrmUserRepository::new(db.clone()),
            stats: SeaOrmStatsRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn buildings(&self) -> &dyn BuildingRepository {
        &self.buildings
    }

    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn students(&self) -> &dyn StudentRepository {
        &self.students
    }

    fn payments(&self) -> &dyn PaymentRepository {
        &self.payments
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn stats(&self) -> &dyn StatsRepository {
        &self.stats
    }
}
