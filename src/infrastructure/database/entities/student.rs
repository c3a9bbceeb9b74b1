//! Student entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub student_no: String,
    pub name: String,
    /// CHECK IN ('男', '女')
    pub gender: String,
    pub ethnicity: String,
    pub major: String,
    pub class_name: String,
    pub phone: String,
    /// Set to NULL when the building is deleted
    #[sea_orm(nullable)]
    pub building_id: Option<i32>,
    /// Set to NULL when the room is deleted
    #[sea_orm(nullable)]
    pub room_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::building::Entity",
        from = "Column::BuildingId",
        to = "super::building::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Building,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Room,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
