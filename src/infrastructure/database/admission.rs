//! Room capacity admission control
//!
//! `admit` counts the students already in a room and refuses the write when
//! no bed is free. On PostgreSQL and MySQL the room row is locked first, so
//! the caller must run it inside the transaction that performs the write;
//! concurrent admissions into the same room then serialize on that lock.
//! SQLite has no row locks; there the capacity triggers re-check inside the
//! insert/update statement itself.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect,
};
use tracing::debug;

use super::entities::{room, student};
use super::error_translator::with_default;
use crate::shared::{DomainError, DomainResult};

pub async fn admit<C: ConnectionTrait>(conn: &C, room_id: i32) -> DomainResult<()> {
    let mut query = room::Entity::find_by_id(room_id);
    if conn.get_database_backend() != DatabaseBackend::Sqlite {
        query = query.lock_exclusive();
    }
    let room = query
        .one(conn)
        .await
        .map_err(with_default("查询寝室失败"))?
        .ok_or(DomainError::RoomNotFound(Some(room_id)))?;

    let occupied = student::Entity::find()
        .filter(student::Column::RoomId.eq(room_id))
        .count(conn)
        .await
        .map_err(with_default("查询寝室人数失败"))?;

    debug!(room_id, occupied, capacity = room.capacity, "Admission check");
    if occupied >= room.capacity.max(0) as u64 {
        return Err(DomainError::RoomFull(Some(room_id)));
    }
    Ok(())
}
