use async_trait::async_trait;

use super::{User, UserData, UserFilter};
use crate::domain::DomainResult;
use crate::shared::{Listing, PageRequest};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;
    async fn list(&self, filter: UserFilter, page: PageRequest) -> DomainResult<Listing<User>>;
    async fn count(&self) -> DomainResult<u64>;

    /// `data.password_hash` must be present on insert.
    async fn insert(&self, data: UserData) -> DomainResult<User>;
    async fn update(&self, id: i32, data: UserData) -> DomainResult<User>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
