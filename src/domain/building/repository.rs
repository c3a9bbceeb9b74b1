//! Building repository interface

use async_trait::async_trait;

use super::model::{Building, BuildingData, BuildingFilter};
use crate::domain::DomainResult;
use crate::shared::{Listing, PageRequest};

#[async_trait]
pub trait BuildingRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Building>>;
    async fn list(&self, filter: BuildingFilter, page: PageRequest) -> DomainResult<Listing<Building>>;
    async fn insert(&self, data: BuildingData) -> DomainResult<Building>;
    async fn update(&self, id: i32, data: BuildingData) -> DomainResult<Building>;
    /// Rejected while rooms or payments still reference the building.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
