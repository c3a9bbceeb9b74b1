//! Dormitory use-cases: buildings, rooms, students, payments and the
//! aggregation views.

mod buildings;
mod payments;
mod rooms;
mod stats;
mod students;

use std::sync::Arc;

pub use buildings::BuildingService;
pub use payments::PaymentService;
pub use rooms::RoomService;
pub use stats::StatsService;
pub use students::StudentService;

use crate::application::integrity::ReferentialValidator;
use crate::domain::RepositoryProvider;

/// All dormitory services over one repository provider.
pub struct DormServices {
    pub buildings: BuildingService,
    pub rooms: RoomService,
    pub students: StudentService,
    pub payments: PaymentService,
    pub stats: StatsService,
}

impl DormServices {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        let validator = Arc::new(ReferentialValidator::new(repos.clone()));
        Self {
            buildings: BuildingService::new(repos.clone()),
            rooms: RoomService::new(repos.clone(), validator.clone()),
            students: StudentService::new(repos.clone(), validator.clone()),
            payments: PaymentService::new(repos.clone(), validator),
            stats: StatsService::new(repos),
        }
    }
}
