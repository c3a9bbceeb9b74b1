use std::sync::Arc;

use crate::application::integrity::ReferentialValidator;
use crate::domain::{
    DomainError, DomainResult, RepositoryProvider, Student, StudentData, StudentFilter,
};
use crate::shared::{Listing, PageRequest};

/// Student writes: references are validated first, then the repository
/// performs the capacity-admitted write.
pub struct StudentService {
    repos: Arc<dyn RepositoryProvider>,
    validator: Arc<ReferentialValidator>,
}

impl StudentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, validator: Arc<ReferentialValidator>) -> Self {
        Self { repos, validator }
    }

    pub async fn list(&self, filter: StudentFilter, page: PageRequest) -> DomainResult<Listing<Student>> {
        self.repos.students().list(filter, page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Student> {
        self.repos
            .students()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Student", id))
    }

    pub async fn create(&self, data: StudentData) -> DomainResult<Student> {
        self.validator.check_student(&data).await?;
        self.repos.students().insert(data).await
    }

    pub async fn update(&self, id: i32, data: StudentData) -> DomainResult<Student> {
        self.get(id).await?;
        self.validator.check_student(&data).await?;
        self.repos.students().update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.students().delete(id).await
    }
}
