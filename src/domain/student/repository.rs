//! Student repository interface

use async_trait::async_trait;

use super::model::{Student, StudentData, StudentFilter};
use crate::domain::DomainResult;
use crate::shared::{Listing, PageRequest};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Student>>;
    async fn list(&self, filter: StudentFilter, page: PageRequest) -> DomainResult<Listing<Student>>;

    /// Persist a new student. Admission into `data.room_id` is decided
    /// atomically with the write: `RoomNotFound` or `RoomFull` on rejection.
    async fn insert(&self, data: StudentData) -> DomainResult<Student>;

    /// Replace every field. Admission is re-checked only when the room
    /// assignment changes.
    async fn update(&self, id: i32, data: StudentData) -> DomainResult<Student>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
