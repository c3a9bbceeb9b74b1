//! Create students table
//!
//! Building and room references degrade to NULL when their target is
//! deleted instead of blocking the delete.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_apartment_buildings::ApartmentBuildings;
use super::m20250101_000002_create_dorm_rooms::DormRooms;
use crate::infrastructure::database::constraints::{CHK_STUDENT_GENDER, IDX_STUDENT_NO};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::StudentNo).string_len(20).not_null())
                    .col(ColumnDef::new(Students::Name).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Students::Gender)
                            .string_len(10)
                            .not_null()
                            .extra(format!(
                                "CONSTRAINT {} CHECK (gender IN ('男', '女'))",
                                CHK_STUDENT_GENDER
                            )),
                    )
                    .col(ColumnDef::new(Students::Ethnicity).string_len(20).not_null().default(""))
                    .col(ColumnDef::new(Students::Major).string_len(100).not_null().default(""))
                    .col(ColumnDef::new(Students::ClassName).string_len(50).not_null().default(""))
                    .col(ColumnDef::new(Students::Phone).string_len(20).not_null().default(""))
                    .col(ColumnDef::new(Students::BuildingId).integer().null())
                    .col(ColumnDef::new(Students::RoomId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_building")
                            .from(Students::Table, Students::BuildingId)
                            .to(ApartmentBuildings::Table, ApartmentBuildings::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_room")
                            .from(Students::Table, Students::RoomId)
                            .to(DormRooms::Table, DormRooms::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDENT_NO)
                    .table(Students::Table)
                    .col(Students::StudentNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_room")
                    .table(Students::Table)
                    .col(Students::RoomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_building")
                    .table(Students::Table)
                    .col(Students::BuildingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Students {
    Table,
    Id,
    StudentNo,
    Name,
    Gender,
    Ethnicity,
    Major,
    ClassName,
    Phone,
    BuildingId,
    RoomId,
}
