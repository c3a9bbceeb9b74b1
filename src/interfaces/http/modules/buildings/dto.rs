//! Building DTOs

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{BuildingData, BuildingFilter, DomainError};
use crate::shared::{parse_date, require_text, PageRequest};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildingRequest {
    #[validate(length(max = 20, message = "公寓号不能超过20个字符"))]
    pub building_no: String,
    pub floor_count: i32,
    pub room_count: i32,
    /// `YYYY-MM-DD` or RFC 3339
    #[schema(example = "2020-09-01")]
    pub started_at: String,
}

impl TryFrom<BuildingRequest> for BuildingData {
    type Error = DomainError;

    fn try_from(req: BuildingRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            building_no: require_text(&req.building_no, "公寓号")?,
            floor_count: req.floor_count,
            room_count: req.room_count,
            started_at: parse_date(&req.started_at, "启用时间")?,
        })
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListBuildingsParams {
    /// Exact building number
    pub keyword: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListBuildingsParams {
    pub fn into_parts(self) -> (BuildingFilter, PageRequest) {
        (
            BuildingFilter {
                keyword: self.keyword,
            },
            PageRequest::new(self.page, self.page_size),
        )
    }
}
