//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_apartment_buildings;
mod m20250101_000002_create_dorm_rooms;
mod m20250101_000003_create_students;
mod m20250101_000004_create_payments;
mod m20250101_000005_create_users;
mod m20250101_000006_create_room_capacity_triggers;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_apartment_buildings::Migration),
            Box::new(m20250101_000002_create_dorm_rooms::Migration),
            Box::new(m20250101_000003_create_students::Migration),
            Box::new(m20250101_000004_create_payments::Migration),
            Box::new(m20250101_000005_create_users::Migration),
            Box::new(m20250101_000006_create_room_capacity_triggers::Migration),
        ]
    }
}
