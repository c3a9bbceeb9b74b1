//! Room domain entity

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i32,
    pub room_no: String,
    /// Beds available; students assigned never exceed it.
    pub capacity: i32,
    pub fee: f64,
    pub phone: String,
    #[serde(rename = "buildingID")]
    pub building_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomData {
    pub room_no: String,
    pub capacity: i32,
    pub fee: f64,
    pub phone: String,
    pub building_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    /// Exact room number
    pub keyword: Option<String>,
    pub building_id: Option<i32>,
}
