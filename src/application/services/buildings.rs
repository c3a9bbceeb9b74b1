use std::sync::Arc;

use crate::domain::{
    Building, BuildingData, BuildingFilter, DomainError, DomainResult, RepositoryProvider,
};
use crate::shared::{Listing, PageRequest};

/// Buildings have no cross-entity preconditions; range rules are enforced
/// by the store checks and come back translated.
pub struct BuildingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BuildingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self, filter: BuildingFilter, page: PageRequest) -> DomainResult<Listing<Building>> {
        self.repos.buildings().list(filter, page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Building> {
        self.repos
            .buildings()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Building", id))
    }

    pub async fn create(&self, data: BuildingData) -> DomainResult<Building> {
        self.repos.buildings().insert(data).await
    }

    pub async fn update(&self, id: i32, data: BuildingData) -> DomainResult<Building> {
        self.repos.buildings().update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.buildings().delete(id).await
    }
}
