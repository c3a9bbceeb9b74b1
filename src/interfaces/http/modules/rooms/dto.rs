//! Room DTOs

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{DomainError, RoomData, RoomFilter};
use crate::shared::{optional_id, require_text, PageRequest};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomRequest {
    #[validate(length(max = 20, message = "寝室号不能超过20个字符"))]
    pub room_no: String,
    pub capacity: i32,
    #[serde(default)]
    pub fee: f64,
    #[serde(default)]
    #[validate(length(max = 20, message = "电话不能超过20个字符"))]
    pub phone: String,
    /// 0 or absent is rejected
    #[serde(rename = "buildingID", default)]
    pub building_id: i32,
}

impl TryFrom<RoomRequest> for RoomData {
    type Error = DomainError;

    fn try_from(req: RoomRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            room_no: require_text(&req.room_no, "寝室号")?,
            capacity: req.capacity,
            fee: req.fee,
            phone: req.phone.trim().to_string(),
            building_id: req.building_id,
        })
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListRoomsParams {
    /// Exact room number
    pub keyword: Option<String>,
    #[serde(rename = "buildingID")]
    pub building_id: Option<i32>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListRoomsParams {
    pub fn into_parts(self) -> (RoomFilter, PageRequest) {
        (
            RoomFilter {
                keyword: self.keyword,
                building_id: optional_id(self.building_id),
            },
            PageRequest::new(self.page, self.page_size),
        )
    }
}
