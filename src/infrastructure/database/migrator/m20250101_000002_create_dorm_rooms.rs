//! Create dorm_rooms table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_apartment_buildings::ApartmentBuildings;
use crate::infrastructure::database::constraints::{CHK_ROOM_CAPACITY, CHK_ROOM_FEE_NONNEGATIVE};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DormRooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DormRooms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DormRooms::RoomNo).string_len(20).not_null())
                    .col(
                        ColumnDef::new(DormRooms::Capacity)
                            .integer()
                            .not_null()
                            .extra(format!("CONSTRAINT {} CHECK (capacity > 0)", CHK_ROOM_CAPACITY)),
                    )
                    .col(
                        ColumnDef::new(DormRooms::Fee)
                            .double()
                            .not_null()
                            .default(0.0)
                            .extra(format!(
                                "CONSTRAINT {} CHECK (fee >= 0)",
                                CHK_ROOM_FEE_NONNEGATIVE
                            )),
                    )
                    .col(
                        ColumnDef::new(DormRooms::Phone)
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(DormRooms::BuildingId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dorm_rooms_building")
                            .from(DormRooms::Table, DormRooms::BuildingId)
                            .to(ApartmentBuildings::Table, ApartmentBuildings::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dorm_rooms_building")
                    .table(DormRooms::Table)
                    .col(DormRooms::BuildingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DormRooms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum DormRooms {
    Table,
    Id,
    RoomNo,
    Capacity,
    Fee,
    Phone,
    BuildingId,
}
