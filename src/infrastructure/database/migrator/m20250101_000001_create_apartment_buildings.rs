//! Create apartment_buildings table

use sea_orm_migration::prelude::*;

use crate::infrastructure::database::constraints::{
    CHK_BUILDING_FLOOR_COUNT, CHK_BUILDING_ROOM_COUNT, IDX_BUILDING_NO,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApartmentBuildings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApartmentBuildings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ApartmentBuildings::BuildingNo)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApartmentBuildings::FloorCount)
                            .integer()
                            .not_null()
                            .extra(format!(
                                "CONSTRAINT {} CHECK (floor_count > 0)",
                                CHK_BUILDING_FLOOR_COUNT
                            )),
                    )
                    .col(
                        ColumnDef::new(ApartmentBuildings::RoomCount)
                            .integer()
                            .not_null()
                            .extra(format!(
                                "CONSTRAINT {} CHECK (room_count >= 0)",
                                CHK_BUILDING_ROOM_COUNT
                            )),
                    )
                    .col(
                        ColumnDef::new(ApartmentBuildings::StartedAt)
                            .date()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUILDING_NO)
                    .table(ApartmentBuildings::Table)
                    .col(ApartmentBuildings::BuildingNo)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApartmentBuildings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ApartmentBuildings {
    Table,
    Id,
    BuildingNo,
    FloorCount,
    RoomCount,
    StartedAt,
}
