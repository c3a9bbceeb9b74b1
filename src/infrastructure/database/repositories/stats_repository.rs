//! SeaORM implementation of StatsRepository
//!
//! Capacity and occupancy are aggregated by separate grouped queries and
//! merged per building; joining students and rooms in one grouped query
//! would count each room's capacity once per student.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryOrder,
    QuerySelect, RelationTrait,
};
use tracing::debug;

use crate::domain::stats::{BuildingOccupancy, BuildingPaymentSummary, StatsRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{building, payment, room, student};
use crate::infrastructure::database::error_translator::with_default;

pub struct SeaOrmStatsRepository {
    db: DatabaseConnection,
}

impl SeaOrmStatsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct CapacityRow {
    building_id: i32,
    building_no: String,
    total_capacity: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
struct OccupiedRow {
    building_id: i32,
    occupied: i64,
}

#[derive(Debug, FromQueryResult)]
struct PaymentRow {
    building_id: i32,
    building_no: String,
    total_amount: Option<f64>,
}

#[async_trait]
impl StatsRepository for SeaOrmStatsRepository {
    async fn building_occupancy(&self) -> DomainResult<Vec<BuildingOccupancy>> {
        let capacity = building::Entity::find()
            .select_only()
            .column_as(building::Column::Id, "building_id")
            .column_as(building::Column::BuildingNo, "building_no")
            .column_as(
                Expr::col((room::Entity, room::Column::Capacity)).sum(),
                "total_capacity",
            )
            .join(JoinType::LeftJoin, building::Relation::Rooms.def())
            .group_by(building::Column::Id)
            .group_by(building::Column::BuildingNo)
            .order_by_asc(building::Column::Id)
            .into_model::<CapacityRow>()
            .all(&self.db)
            .await
            .map_err(with_default("统计入住率失败"))?;

        let occupied: HashMap<i32, i64> = student::Entity::find()
            .select_only()
            .column_as(room::Column::BuildingId, "building_id")
            .column_as(
                Expr::col((student::Entity, student::Column::Id)).count(),
                "occupied",
            )
            .join(JoinType::InnerJoin, student::Relation::Room.def())
            .group_by(room::Column::BuildingId)
            .into_model::<OccupiedRow>()
            .all(&self.db)
            .await
            .map_err(with_default("统计入住率失败"))?
            .into_iter()
            .map(|row| (row.building_id, row.occupied))
            .collect();

        debug!(buildings = capacity.len(), "Occupancy aggregated");
        Ok(capacity
            .into_iter()
            .map(|row| {
                let occupied = occupied.get(&row.building_id).copied().unwrap_or(0);
                BuildingOccupancy::new(
                    row.building_id,
                    row.building_no,
                    row.total_capacity.unwrap_or(0),
                    occupied,
                )
            })
            .collect())
    }

    async fn building_payments(&self) -> DomainResult<Vec<BuildingPaymentSummary>> {
        let rows = building::Entity::find()
            .select_only()
            .column_as(building::Column::Id, "building_id")
            .column_as(building::Column::BuildingNo, "building_no")
            .column_as(
                Expr::col((payment::Entity, payment::Column::Amount)).sum(),
                "total_amount",
            )
            .join(JoinType::LeftJoin, building::Relation::Payments.def())
            .group_by(building::Column::Id)
            .group_by(building::Column::BuildingNo)
            .order_by_asc(building::Column::Id)
            .into_model::<PaymentRow>()
            .all(&self.db)
            .await
            .map_err(with_default("统计收费失败"))?;

        Ok(rows
            .into_iter()
            .map(|row| BuildingPaymentSummary {
                building_id: row.building_id,
                building_no: row.building_no,
                total_amount: row.total_amount.unwrap_or(0.0),
            })
            .collect())
    }
}
