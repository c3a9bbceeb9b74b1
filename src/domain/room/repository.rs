//! Room repository interface

use async_trait::async_trait;

use super::model::{Room, RoomData, RoomFilter};
use crate::domain::DomainResult;
use crate::shared::{Listing, PageRequest};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>>;
    async fn list(&self, filter: RoomFilter, page: PageRequest) -> DomainResult<Listing<Room>>;
    async fn insert(&self, data: RoomData) -> DomainResult<Room>;
    async fn update(&self, id: i32, data: RoomData) -> DomainResult<Room>;
    /// Students in the room lose their assignment; payments block the delete.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
