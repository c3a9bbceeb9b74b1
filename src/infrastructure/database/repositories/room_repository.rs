//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, warn};

use super::listing::{fetch_listing, keyword};
use crate::domain::room::{Room, RoomData, RoomFilter, RoomRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{room, student};
use crate::infrastructure::database::error_translator::{translate, with_default};
use crate::shared::{Listing, PageRequest};

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        room_no: m.room_no,
        capacity: m.capacity,
        fee: m.fee,
        phone: m.phone,
        building_id: m.building_id,
    }
}

fn to_active(data: RoomData) -> room::ActiveModel {
    room::ActiveModel {
        id: NotSet,
        room_no: Set(data.room_no),
        capacity: Set(data.capacity),
        fee: Set(data.fee),
        phone: Set(data.phone),
        building_id: Set(data.building_id),
    }
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(with_default("查询寝室失败"))?;
        Ok(model.map(to_domain))
    }

    async fn list(&self, filter: RoomFilter, page: PageRequest) -> DomainResult<Listing<Room>> {
        let mut query = room::Entity::find().order_by_asc(room::Column::Id);
        if let Some(k) = keyword(&filter.keyword) {
            query = query.filter(room::Column::RoomNo.eq(k));
        }
        if let Some(building_id) = filter.building_id {
            query = query.filter(room::Column::BuildingId.eq(building_id));
        }
        let listing = fetch_listing(&self.db, query, page)
            .await
            .map_err(with_default("查询寝室失败"))?;
        Ok(listing.map(to_domain))
    }

    async fn insert(&self, data: RoomData) -> DomainResult<Room> {
        let model = to_active(data).insert(&self.db).await.map_err(|e| {
            warn!("Room rejected: {}", e);
            translate(e, "创建寝室失败")
        })?;
        info!(
            "Room created: {} in building {} (id={})",
            model.room_no, model.building_id, model.id
        );
        Ok(to_domain(model))
    }

    async fn update(&self, id: i32, data: RoomData) -> DomainResult<Room> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Room", id))?;
        let building_id = data.building_id;

        let txn = self.db.begin().await.map_err(with_default("更新寝室失败"))?;
        let mut active = to_active(data);
        active.id = Set(id);
        let model = active.update(&txn).await.map_err(|e| {
            warn!("Room {} update rejected: {}", id, e);
            translate(e, "更新寝室失败")
        })?;

        // Residents move with their room.
        if existing.building_id != building_id {
            let moved = student::Entity::update_many()
                .col_expr(student::Column::BuildingId, Expr::value(building_id))
                .filter(student::Column::RoomId.eq(id))
                .exec(&txn)
                .await
                .map_err(with_default("更新寝室失败"))?;
            info!(
                "Room {} moved to building {}: {} students reassigned",
                id, building_id, moved.rows_affected
            );
        }
        txn.commit().await.map_err(with_default("更新寝室失败"))?;

        info!("Room updated: id={}", id);
        Ok(to_domain(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = room::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                warn!("Room {} delete rejected: {}", id, e);
                translate(e, "该寝室下仍有收费记录，无法删除")
            })?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Room", id));
        }
        info!("Room deleted: id={}", id);
        Ok(())
    }
}
