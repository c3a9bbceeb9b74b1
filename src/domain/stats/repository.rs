use async_trait::async_trait;

use super::model::{BuildingOccupancy, BuildingPaymentSummary};
use crate::domain::DomainResult;

/// Read-only aggregates over the current store state. No locks are taken;
/// results may interleave with concurrent writes.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// One row per building, ordered by building id.
    async fn building_occupancy(&self) -> DomainResult<Vec<BuildingOccupancy>>;
    /// One row per building, ordered by building id; 0 when unpaid.
    async fn building_payments(&self) -> DomainResult<Vec<BuildingPaymentSummary>>;
}
