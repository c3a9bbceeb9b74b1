use std::sync::Arc;

use crate::application::integrity::ReferentialValidator;
use crate::domain::{
    DomainError, DomainResult, Payment, PaymentData, PaymentFilter, RepositoryProvider,
};
use crate::shared::{Listing, PageRequest};

pub struct PaymentService {
    repos: Arc<dyn RepositoryProvider>,
    validator: Arc<ReferentialValidator>,
}

impl PaymentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, validator: Arc<ReferentialValidator>) -> Self {
        Self { repos, validator }
    }

    pub async fn list(&self, filter: PaymentFilter, page: PageRequest) -> DomainResult<Listing<Payment>> {
        self.repos.payments().list(filter, page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Payment> {
        self.repos
            .payments()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Payment", id))
    }

    pub async fn create(&self, data: PaymentData) -> DomainResult<Payment> {
        self.validator.check_payment(&data).await?;
        self.repos.payments().insert(data).await
    }

    pub async fn update(&self, id: i32, data: PaymentData) -> DomainResult<Payment> {
        self.get(id).await?;
        self.validator.check_payment(&data).await?;
        self.repos.payments().update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.payments().delete(id).await
    }
}
