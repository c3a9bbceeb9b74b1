//! Domain layer: dormitory aggregates and repository interfaces

pub mod building;
pub mod payment;
pub mod repositories;
pub mod room;
pub mod stats;
pub mod student;
pub mod user;

// Re-export commonly used types
pub use building::{Building, BuildingData, BuildingFilter, BuildingRepository};
pub use payment::{Payment, PaymentData, PaymentFilter, PaymentRepository, PaymentType};
pub use repositories::{DomainResult, RepositoryProvider};
pub use room::{Room, RoomData, RoomFilter, RoomRepository};
pub use stats::{BuildingOccupancy, BuildingPaymentSummary, StatsRepository};
pub use student::{Gender, Student, StudentData, StudentFilter, StudentRepository};
pub use user::{User, UserData, UserFilter, UserRepository, UserRole};

pub use crate::shared::DomainError;
