use std::sync::Arc;

use crate::application::integrity::ReferentialValidator;
use crate::domain::{DomainError, DomainResult, RepositoryProvider, Room, RoomData, RoomFilter};
use crate::shared::{Listing, PageRequest};

pub struct RoomService {
    repos: Arc<dyn RepositoryProvider>,
    validator: Arc<ReferentialValidator>,
}

impl RoomService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, validator: Arc<ReferentialValidator>) -> Self {
        Self { repos, validator }
    }

    pub async fn list(&self, filter: RoomFilter, page: PageRequest) -> DomainResult<Listing<Room>> {
        self.repos.rooms().list(filter, page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Room> {
        self.repos
            .rooms()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Room", id))
    }

    pub async fn create(&self, data: RoomData) -> DomainResult<Room> {
        self.validator.check_room(&data).await?;
        self.repos.rooms().insert(data).await
    }

    pub async fn update(&self, id: i32, data: RoomData) -> DomainResult<Room> {
        self.get(id).await?;
        self.validator.check_room(&data).await?;
        self.repos.rooms().update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.rooms().delete(id).await
    }
}
