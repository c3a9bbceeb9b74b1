//! SeaORM implementation of PaymentRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{info, warn};

use super::listing::{fetch_listing, keyword};
use crate::domain::payment::{Payment, PaymentData, PaymentFilter, PaymentRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::payment;
use crate::infrastructure::database::error_translator::{translate, with_default};
use crate::shared::{Listing, PageRequest};

pub struct SeaOrmPaymentRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(m: payment::Model) -> DomainResult<Payment> {
    Ok(Payment {
        id: m.id,
        payment_no: m.payment_no,
        building_id: m.building_id,
        room_id: m.room_id,
        student_id: m.student_id,
        paid_at: m.paid_at,
        payment_type: m.payment_type.parse()?,
        amount: m.amount,
    })
}

fn to_active(data: PaymentData) -> payment::ActiveModel {
    payment::ActiveModel {
        id: NotSet,
        payment_no: Set(data.payment_no),
        building_id: Set(data.building_id),
        room_id: Set(data.room_id),
        student_id: Set(data.student_id),
        paid_at: Set(data.paid_at),
        payment_type: Set(data.payment_type.as_str().to_string()),
        amount: Set(data.amount),
    }
}

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Payment>> {
        payment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(with_default("查询收费记录失败"))?
            .map(to_domain)
            .transpose()
    }

    async fn list(&self, filter: PaymentFilter, page: PageRequest) -> DomainResult<Listing<Payment>> {
        let mut query = payment::Entity::find().order_by_asc(payment::Column::Id);
        if let Some(k) = keyword(&filter.keyword) {
            query = query.filter(
                Condition::any()
                    .add(payment::Column::PaymentNo.eq(k))
                    .add(payment::Column::PaymentType.eq(k)),
            );
        }
        if let Some(building_id) = filter.building_id {
            query = query.filter(payment::Column::BuildingId.eq(building_id));
        }
        if let Some(room_id) = filter.room_id {
            query = query.filter(payment::Column::RoomId.eq(room_id));
        }
        if let Some(student_id) = filter.student_id {
            query = query.filter(payment::Column::StudentId.eq(student_id));
        }
        fetch_listing(&self.db, query, page)
            .await
            .map_err(with_default("查询收费记录失败"))?
            .try_map(to_domain)
    }

    async fn insert(&self, data: PaymentData) -> DomainResult<Payment> {
        let model = to_active(data).insert(&self.db).await.map_err(|e| {
            warn!("Payment rejected: {}", e);
            translate(e, "创建收费记录失败")
        })?;
        info!(
            "Payment recorded: {} {} {:.2} (id={})",
            model.payment_no, model.payment_type, model.amount, model.id
        );
        to_domain(model)
    }

    async fn update(&self, id: i32, data: PaymentData) -> DomainResult<Payment> {
        if self.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Payment", id));
        }
        let mut active = to_active(data);
        active.id = Set(id);
        let model = active.update(&self.db).await.map_err(|e| {
            warn!("Payment {} update rejected: {}", id, e);
            translate(e, "更新收费记录失败")
        })?;
        info!("Payment updated: id={}", id);
        to_domain(model)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = payment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(with_default("删除收费记录失败"))?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Payment", id));
        }
        info!("Payment deleted: id={}", id);
        Ok(())
    }
}
