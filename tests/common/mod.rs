//! Shared fixtures: a migrated SQLite store (in memory, or a temporary file
//! for multi-connection tests) and the services wired over it.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tempfile::TempDir;

use dorm_service::application::{DormServices, UserService};
use dorm_service::domain::{
    Building, BuildingData, Gender, PaymentData, PaymentType, RepositoryProvider, Room, RoomData,
    StudentData, StudentFilter,
};
use dorm_service::infrastructure::crypto::jwt::JwtConfig;
use dorm_service::infrastructure::database::migrator::Migrator;
use dorm_service::interfaces::http::middleware::AuthState;
use dorm_service::shared::PageRequest;
use dorm_service::{AppState, SeaOrmRepositoryProvider};

pub struct TestApp {
    pub db: DatabaseConnection,
    pub dorm: Arc<DormServices>,
    pub users: Arc<UserService>,
    pub jwt: JwtConfig,
    _store: Option<TempDir>,
}

/// Every pooled connection to `sqlite::memory:` opens its own database, so
/// the pool is pinned to one connection that stays open.
pub async fn setup() -> TestApp {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    build(opts, None).await
}

/// File-backed store shared by `connections` pooled connections, so
/// concurrent writers really reach SQLite side by side.
pub async fn setup_file(connections: u32) -> TestApp {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("dorm.db");
    let mut opts = ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
    opts.max_connections(connections)
        .min_connections(connections)
        .sqlx_logging(false);
    build(opts, Some(dir)).await
}

async fn build(opts: ConnectOptions, store: Option<TempDir>) -> TestApp {
    let db = Database::connect(opts).await.expect("connect");
    Migrator::up(&db, None).await.expect("migrate");

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let jwt = JwtConfig::new("test-secret", 1);
    TestApp {
        dorm: Arc::new(DormServices::new(repos.clone())),
        users: Arc::new(UserService::new(repos, jwt.clone())),
        db,
        jwt,
        _store: store,
    }
}

impl TestApp {
    pub fn state(&self) -> AppState {
        AppState {
            dorm: self.dorm.clone(),
            users: self.users.clone(),
            db: self.db.clone(),
            auth: AuthState {
                jwt_config: self.jwt.clone(),
            },
        }
    }

    pub async fn building(&self, building_no: &str) -> Building {
        self.dorm
            .buildings
            .create(building_data(building_no))
            .await
            .expect("create building")
    }

    /// Students currently assigned to `room_id`.
    pub async fn occupants(&self, room_id: i32) -> u64 {
        self.dorm
            .students
            .list(
                StudentFilter {
                    room_id: Some(room_id),
                    ..Default::default()
                },
                PageRequest::all(),
            )
            .await
            .expect("list occupants")
            .total()
    }

    pub async fn room(&self, building_id: i32, room_no: &str, capacity: i32) -> Room {
        self.dorm
            .rooms
            .create(room_data(building_id, room_no, capacity))
            .await
            .expect("create room")
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn building_data(building_no: &str) -> BuildingData {
    BuildingData {
        building_no: building_no.to_string(),
        floor_count: 6,
        room_count: 120,
        started_at: date(2020, 9, 1),
    }
}

pub fn room_data(building_id: i32, room_no: &str, capacity: i32) -> RoomData {
    RoomData {
        room_no: room_no.to_string(),
        capacity,
        fee: 1200.0,
        phone: String::new(),
        building_id,
    }
}

pub fn student_data(student_no: &str, building_id: i32, room_id: i32) -> StudentData {
    StudentData {
        student_no: student_no.to_string(),
        name: format!("学生{}", student_no),
        gender: Gender::Male,
        ethnicity: "汉".to_string(),
        major: "计算机".to_string(),
        class_name: "计科1班".to_string(),
        phone: String::new(),
        building_id,
        room_id,
    }
}

pub fn payment_data(
    payment_no: &str,
    building_id: i32,
    room_id: i32,
    student_id: Option<i32>,
    amount: f64,
) -> PaymentData {
    PaymentData {
        payment_no: payment_no.to_string(),
        building_id,
        room_id,
        student_id,
        paid_at: date(2024, 9, 1),
        payment_type: PaymentType::Accommodation,
        amount,
    }
}
