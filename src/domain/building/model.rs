//! Building domain entity

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: i32,
    pub building_no: String,
    pub floor_count: i32,
    pub room_count: i32,
    pub started_at: NaiveDate,
}

/// Full field set for create and update (updates replace every field).
///
/// Range rules (floors > 0, rooms >= 0) are enforced by the store's check
/// constraints and reported through the error translator.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingData {
    pub building_no: String,
    pub floor_count: i32,
    pub room_count: i32,
    pub started_at: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct BuildingFilter {
    /// Exact building number
    pub keyword: Option<String>,
}
