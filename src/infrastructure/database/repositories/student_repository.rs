//! SeaORM implementation of StudentRepository
//!
//! Writes that place a student into a room go through admission control.
//! On PostgreSQL/MySQL the check and the write share one transaction that
//! holds the room row lock. On SQLite the check runs on the connection
//! directly and the capacity trigger settles any race inside the write.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, ConnectionTrait,
    DatabaseBackend, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::{debug, info, warn};

use super::listing::{fetch_listing, keyword};
use crate::domain::student::{Student, StudentData, StudentFilter, StudentRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::admission;
use crate::infrastructure::database::entities::{room, student};
use crate::infrastructure::database::error_translator::{translate, with_default};
use crate::shared::{Listing, PageRequest};

pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Clone, Copy)]
enum Write {
    Insert,
    Update,
}

impl Write {
    fn failure_message(self) -> &'static str {
        match self {
            Self::Insert => "创建学生失败",
            Self::Update => "更新学生失败",
        }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn to_domain(m: student::Model) -> DomainResult<Student> {
    Ok(Student {
        id: m.id,
        student_no: m.student_no,
        name: m.name,
        gender: m.gender.parse()?,
        ethnicity: m.ethnicity,
        major: m.major,
        class_name: m.class_name,
        phone: m.phone,
        building_id: m.building_id,
        room_id: m.room_id,
    })
}

fn to_active(data: StudentData) -> student::ActiveModel {
    student::ActiveModel {
        id: NotSet,
        student_no: Set(data.student_no),
        name: Set(data.name),
        gender: Set(data.gender.as_str().to_string()),
        ethnicity: Set(data.ethnicity),
        major: Set(data.major),
        class_name: Set(data.class_name),
        phone: Set(data.phone),
        building_id: Set(Some(data.building_id)),
        room_id: Set(Some(data.room_id)),
    }
}

async fn write_student<C: ConnectionTrait>(
    conn: &C,
    active: student::ActiveModel,
    write: Write,
    admit_into: Option<i32>,
) -> DomainResult<student::Model> {
    if let Some(room_id) = admit_into {
        admission::admit(conn, room_id).await?;
    }
    let result = match write {
        Write::Insert => active.insert(conn).await,
        Write::Update => active.update(conn).await,
    };
    result.map_err(|e| translate(e, write.failure_message()))
}

impl SeaOrmStudentRepository {
    async fn admitted_write(
        &self,
        active: student::ActiveModel,
        write: Write,
        admit_into: Option<i32>,
    ) -> DomainResult<student::Model> {
        let locking = admit_into.is_some()
            && self.db.get_database_backend() != DatabaseBackend::Sqlite;
        if !locking {
            return write_student(&self.db, active, write, admit_into).await;
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(with_default(write.failure_message()))?;
        // Dropping `txn` on an early return rolls it back.
        let model = write_student(&txn, active, write, admit_into).await?;
        txn.commit()
            .await
            .map_err(with_default(write.failure_message()))?;
        Ok(model)
    }
}

// ── StudentRepository impl ──────────────────────────────────────

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Student>> {
        student::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(with_default("查询学生失败"))?
            .map(to_domain)
            .transpose()
    }

    async fn list(&self, filter: StudentFilter, page: PageRequest) -> DomainResult<Listing<Student>> {
        let mut query = student::Entity::find().order_by_asc(student::Column::Id);
        if let Some(k) = keyword(&filter.keyword) {
            query = query.filter(
                Condition::any()
                    .add(student::Column::StudentNo.eq(k))
                    .add(student::Column::Name.eq(k))
                    .add(student::Column::ClassName.eq(k)),
            );
        }
        if let Some(room_no) = keyword(&filter.room_no) {
            query = query
                .join(JoinType::InnerJoin, student::Relation::Room.def())
                .filter(room::Column::RoomNo.eq(room_no));
        }
        if let Some(building_id) = filter.building_id {
            query = query.filter(student::Column::BuildingId.eq(building_id));
        }
        if let Some(room_id) = filter.room_id {
            query = query.filter(student::Column::RoomId.eq(room_id));
        }

        debug!(?page, "Listing students");
        let listing = fetch_listing(&self.db, query, page)
            .await
            .map_err(with_default("查询学生失败"))?;
        listing.try_map(to_domain)
    }

    async fn insert(&self, data: StudentData) -> DomainResult<Student> {
        let room_id = data.room_id;
        let model = self
            .admitted_write(to_active(data), Write::Insert, Some(room_id))
            .await
            .inspect_err(|e| warn!("Student admission into room {} rejected: {}", room_id, e))?;
        info!(
            "Student admitted: {} into room {} (id={})",
            model.student_no, room_id, model.id
        );
        to_domain(model)
    }

    async fn update(&self, id: i32, data: StudentData) -> DomainResult<Student> {
        let existing = student::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(with_default("查询学生失败"))?
            .ok_or(DomainError::not_found("Student", id))?;

        let room_id = data.room_id;
        let admit_into = (existing.room_id != Some(room_id)).then_some(room_id);
        let mut active = to_active(data);
        active.id = Set(id);

        let model = self
            .admitted_write(active, Write::Update, admit_into)
            .await
            .inspect_err(|e| warn!("Student {} update rejected: {}", id, e))?;
        info!("Student updated: id={} room={}", id, room_id);
        to_domain(model)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = student::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(with_default("删除学生失败"))?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Student", id));
        }
        info!("Student deleted: id={}", id);
        Ok(())
    }
}
