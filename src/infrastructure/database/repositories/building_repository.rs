//! SeaORM implementation of BuildingRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info, warn};

use super::listing::{fetch_listing, keyword};
use crate::domain::building::{Building, BuildingData, BuildingFilter, BuildingRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::building;
use crate::infrastructure::database::error_translator::{translate, with_default};
use crate::shared::{Listing, PageRequest};

pub struct SeaOrmBuildingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBuildingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(m: building::Model) -> Building {
    Building {
        id: m.id,
        building_no: m.building_no,
        floor_count: m.floor_count,
        room_count: m.room_count,
        started_at: m.started_at,
    }
}

fn to_active(data: BuildingData) -> building::ActiveModel {
    building::ActiveModel {
        id: NotSet,
        building_no: Set(data.building_no),
        floor_count: Set(data.floor_count),
        room_count: Set(data.room_count),
        started_at: Set(data.started_at),
    }
}

#[async_trait]
impl BuildingRepository for SeaOrmBuildingRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Building>> {
        let model = building::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(with_default("查询公寓失败"))?;
        Ok(model.map(to_domain))
    }

    async fn list(&self, filter: BuildingFilter, page: PageRequest) -> DomainResult<Listing<Building>> {
        let mut query = building::Entity::find().order_by_asc(building::Column::Id);
        if let Some(k) = keyword(&filter.keyword) {
            query = query.filter(building::Column::BuildingNo.eq(k));
        }
        debug!(?page, "Listing buildings");
        let listing = fetch_listing(&self.db, query, page)
            .await
            .map_err(with_default("查询公寓失败"))?;
        Ok(listing.map(to_domain))
    }

    async fn insert(&self, data: BuildingData) -> DomainResult<Building> {
        let building_no = data.building_no.clone();
        let model = to_active(data).insert(&self.db).await.map_err(|e| {
            warn!("Building {} rejected: {}", building_no, e);
            translate(e, "创建公寓失败")
        })?;
        info!("Building created: {} (id={})", model.building_no, model.id);
        Ok(to_domain(model))
    }

    async fn update(&self, id: i32, data: BuildingData) -> DomainResult<Building> {
        if self.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Building", id));
        }
        let mut active = to_active(data);
        active.id = Set(id);
        let model = active.update(&self.db).await.map_err(|e| {
            warn!("Building {} update rejected: {}", id, e);
            translate(e, "更新公寓失败")
        })?;
        info!("Building updated: id={}", id);
        Ok(to_domain(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = building::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                warn!("Building {} delete rejected: {}", id, e);
                translate(e, "该公寓下仍有寝室或收费记录，无法删除")
            })?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Building", id));
        }
        info!("Building deleted: id={}", id);
        Ok(())
    }
}
