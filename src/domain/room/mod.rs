//! Room aggregate

pub mod model;
pub mod repository;

pub use model::{Room, RoomData, RoomFilter};
pub use repository::RoomRepository;
