//! Create payments table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_apartment_buildings::ApartmentBuildings;
use super::m20250101_000002_create_dorm_rooms::DormRooms;
use super::m20250101_000003_create_students::Students;
use crate::infrastructure::database::constraints::{
    CHK_PAYMENT_AMOUNT, CHK_PAYMENT_TYPE, IDX_PAYMENT_NO,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::PaymentNo).string_len(50).not_null())
                    .col(ColumnDef::new(Payments::BuildingId).integer().not_null())
                    .col(ColumnDef::new(Payments::RoomId).integer().not_null())
                    .col(ColumnDef::new(Payments::StudentId).integer().null())
                    .col(ColumnDef::new(Payments::PaidAt).date().not_null())
                    .col(
                        ColumnDef::new(Payments::PaymentType)
                            .string_len(50)
                            .not_null()
                            .extra(format!(
                                "CONSTRAINT {} CHECK (payment_type IN ('住宿费', '水电费', '押金'))",
                                CHK_PAYMENT_TYPE
                            )),
                    )
                    .col(
                        ColumnDef::new(Payments::Amount)
                            .double()
                            .not_null()
                            .extra(format!("CONSTRAINT {} CHECK (amount > 0)", CHK_PAYMENT_AMOUNT)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_building")
                            .from(Payments::Table, Payments::BuildingId)
                            .to(ApartmentBuildings::Table, ApartmentBuildings::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_room")
                            .from(Payments::Table, Payments::RoomId)
                            .to(DormRooms::Table, DormRooms::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_student")
                            .from(Payments::Table, Payments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAYMENT_NO)
                    .table(Payments::Table)
                    .col(Payments::PaymentNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        for (name, col) in [
            ("idx_payments_building", Payments::BuildingId),
            ("idx_payments_room", Payments::RoomId),
            ("idx_payments_student", Payments::StudentId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Payments::Table)
                        .col(col)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Payments {
    Table,
    Id,
    PaymentNo,
    BuildingId,
    RoomId,
    StudentId,
    PaidAt,
    PaymentType,
    Amount,
}
