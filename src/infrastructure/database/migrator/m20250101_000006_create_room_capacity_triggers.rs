//! Room capacity triggers on students
//!
//! Every insert, and every update that moves a student into another room,
//! is rejected when the target room does not exist or is already full.
//! The check runs inside the writing statement, so concurrent admissions
//! cannot both observe the last free bed.

use sea_orm::{ConnectionTrait, DatabaseBackend};
use sea_orm_migration::prelude::*;

use crate::infrastructure::database::constraints::{RAISE_ROOM_FULL, RAISE_ROOM_NOT_FOUND};

#[derive(DeriveMigrationName)]
pub struct Migration;

const TRG_INSERT: &str = "trg_check_room_capacity_insert";
const TRG_UPDATE: &str = "trg_check_room_capacity_update";

fn sqlite_body() -> String {
    format!(
        "BEGIN \
            SELECT RAISE(ABORT, '{not_found}') \
                WHERE NOT EXISTS (SELECT 1 FROM dorm_rooms WHERE id = NEW.room_id); \
            SELECT RAISE(ABORT, '{full}') \
                WHERE (SELECT COUNT(*) FROM students WHERE room_id = NEW.room_id) \
                    >= (SELECT capacity FROM dorm_rooms WHERE id = NEW.room_id); \
        END",
        not_found = RAISE_ROOM_NOT_FOUND,
        full = RAISE_ROOM_FULL,
    )
}

fn sqlite_statements() -> Vec<String> {
    vec![
        format!(
            "CREATE TRIGGER IF NOT EXISTS {TRG_INSERT} BEFORE INSERT ON students \
             FOR EACH ROW WHEN NEW.room_id IS NOT NULL {}",
            sqlite_body()
        ),
        format!(
            "CREATE TRIGGER IF NOT EXISTS {TRG_UPDATE} BEFORE UPDATE OF room_id ON students \
             FOR EACH ROW WHEN NEW.room_id IS NOT NULL \
                AND (OLD.room_id IS NULL OR NEW.room_id <> OLD.room_id) {}",
            sqlite_body()
        ),
    ]
}

fn postgres_statements() -> Vec<String> {
    vec![
        format!(
            "CREATE OR REPLACE FUNCTION check_room_capacity() RETURNS TRIGGER AS $$
            DECLARE
                room_capacity INTEGER;
                current_count INTEGER;
            BEGIN
                IF NEW.room_id IS NULL THEN
                    RETURN NEW;
                END IF;
                IF TG_OP = 'UPDATE' AND OLD.room_id IS NOT DISTINCT FROM NEW.room_id THEN
                    RETURN NEW;
                END IF;
                SELECT capacity INTO room_capacity FROM dorm_rooms WHERE id = NEW.room_id FOR UPDATE;
                IF room_capacity IS NULL THEN
                    RAISE EXCEPTION '{RAISE_ROOM_NOT_FOUND}';
                END IF;
                SELECT COUNT(*) INTO current_count FROM students WHERE room_id = NEW.room_id;
                IF current_count >= room_capacity THEN
                    RAISE EXCEPTION '{RAISE_ROOM_FULL}';
                END IF;
                RETURN NEW;
            END;
            $$ LANGUAGE plpgsql"
        ),
        format!("DROP TRIGGER IF EXISTS {TRG_INSERT} ON students"),
        format!(
            "CREATE TRIGGER {TRG_INSERT} BEFORE INSERT ON students \
             FOR EACH ROW EXECUTE FUNCTION check_room_capacity()"
        ),
        format!("DROP TRIGGER IF EXISTS {TRG_UPDATE} ON students"),
        format!(
            "CREATE TRIGGER {TRG_UPDATE} BEFORE UPDATE OF room_id ON students \
             FOR EACH ROW EXECUTE FUNCTION check_room_capacity()"
        ),
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let statements = match manager.get_database_backend() {
            DatabaseBackend::Sqlite => sqlite_statements(),
            DatabaseBackend::Postgres => postgres_statements(),
            // MySQL deployments rely on the row lock taken during admission.
            _ => Vec::new(),
        };
        let conn = manager.get_connection();
        for sql in statements {
            conn.execute_unprepared(&sql).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        match manager.get_database_backend() {
            DatabaseBackend::Sqlite => {
                conn.execute_unprepared(&format!("DROP TRIGGER IF EXISTS {TRG_INSERT}"))
                    .await?;
                conn.execute_unprepared(&format!("DROP TRIGGER IF EXISTS {TRG_UPDATE}"))
                    .await?;
            }
            DatabaseBackend::Postgres => {
                conn.execute_unprepared(&format!("DROP TRIGGER IF EXISTS {TRG_INSERT} ON students"))
                    .await?;
                conn.execute_unprepared(&format!("DROP TRIGGER IF EXISTS {TRG_UPDATE} ON students"))
                    .await?;
                conn.execute_unprepared("DROP FUNCTION IF EXISTS check_room_capacity()")
                    .await?;
            }
            _ => {}
        }
        Ok(())
    }
}
