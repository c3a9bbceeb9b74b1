//! Student DTOs

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{DomainError, StudentData, StudentFilter};
use crate::shared::{optional_id, require_text, PageRequest};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    #[validate(length(max = 20, message = "学号不能超过20个字符"))]
    pub student_no: String,
    #[validate(length(max = 50, message = "姓名不能超过50个字符"))]
    pub name: String,
    /// 男 or 女
    pub gender: String,
    #[serde(default)]
    pub ethnicity: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "buildingID", default)]
    pub building_id: i32,
    #[serde(rename = "roomID", default)]
    pub room_id: i32,
}

impl TryFrom<StudentRequest> for StudentData {
    type Error = DomainError;

    fn try_from(req: StudentRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            student_no: require_text(&req.student_no, "学号")?,
            name: req.name.trim().to_string(),
            gender: req.gender.parse()?,
            ethnicity: req.ethnicity,
            major: req.major,
            class_name: req.class_name,
            phone: req.phone,
            building_id: req.building_id,
            room_id: req.room_id,
        })
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListStudentsParams {
    /// Exact student number, name or class name
    pub keyword: Option<String>,
    /// Exact room number
    pub room_no: Option<String>,
    #[serde(rename = "buildingID")]
    pub building_id: Option<i32>,
    #[serde(rename = "roomID")]
    pub room_id: Option<i32>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListStudentsParams {
    pub fn into_parts(self) -> (StudentFilter, PageRequest) {
        (
            StudentFilter {
                keyword: self.keyword,
                room_no: self.room_no,
                building_id: optional_id(self.building_id),
                room_id: optional_id(self.room_id),
            },
            PageRequest::new(self.page, self.page_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;

    fn request(gender: &str) -> StudentRequest {
        serde_json::from_value(serde_json::json!({
            "studentNo": " 2024001 ",
            "name": "张三",
            "gender": gender,
            "buildingID": 1,
            "roomID": 2
        }))
        .unwrap()
    }

    #[test]
    fn converts_and_trims() {
        let data = StudentData::try_from(request("女")).unwrap();
        assert_eq!(data.student_no, "2024001");
        assert_eq!(data.gender, Gender::Female);
        assert_eq!((data.building_id, data.room_id), (1, 2));
        assert_eq!(data.class_name, "");
    }

    #[test]
    fn unknown_gender_is_rejected() {
        let err = StudentData::try_from(request("X")).unwrap_err();
        assert_eq!(err, DomainError::InvalidGender("X".into()));
    }
}
