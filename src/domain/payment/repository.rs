//! Payment repository interface

use async_trait::async_trait;

use super::model::{Payment, PaymentData, PaymentFilter};
use crate::domain::DomainResult;
use crate::shared::{Listing, PageRequest};

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Payment>>;
    async fn list(&self, filter: PaymentFilter, page: PageRequest) -> DomainResult<Listing<Payment>>;
    async fn insert(&self, data: PaymentData) -> DomainResult<Payment>;
    async fn update(&self, id: i32, data: PaymentData) -> DomainResult<Payment>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
