//! Application layer: use-case orchestration over the domain repositories.

pub mod identity;
pub mod integrity;
pub mod services;

pub use identity::{AuthResult, DefaultAdmin, UserInput, UserService};
pub use integrity::ReferentialValidator;
pub use services::{
    BuildingService, DormServices, PaymentService, RoomService, StatsService, StudentService,
};
