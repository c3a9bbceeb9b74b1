//! Database entities module

pub mod building;
pub mod payment;
pub mod room;
pub mod student;
pub mod user;

pub use building::Entity as Building;
pub use payment::Entity as Payment;
pub use room::Entity as Room;
pub use student::Entity as Student;
pub use user::Entity as User;
