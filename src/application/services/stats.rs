use std::sync::Arc;

use crate::domain::{BuildingOccupancy, BuildingPaymentSummary, DomainResult, RepositoryProvider};

/// Aggregation views, recomputed on every call.
pub struct StatsService {
    repos: Arc<dyn RepositoryProvider>,
}

impl StatsService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn building_occupancy(&self) -> DomainResult<Vec<BuildingOccupancy>> {
        self.repos.stats().building_occupancy().await
    }

    pub async fn building_payments(&self) -> DomainResult<Vec<BuildingPaymentSummary>> {
        self.repos.stats().building_payments().await
    }
}
