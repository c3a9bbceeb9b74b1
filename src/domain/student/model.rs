//! Student domain entity

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::shared::DomainError;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Stored and displayed value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "男" => Ok(Self::Male),
            "女" => Ok(Self::Female),
            other => Err(DomainError::InvalidGender(other.to_string())),
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub student_no: String,
    pub name: String,
    #[schema(value_type = String, example = "男")]
    pub gender: Gender,
    pub ethnicity: String,
    pub major: String,
    pub class_name: String,
    pub phone: String,
    /// `None` once the referenced building was deleted.
    #[serde(rename = "buildingID")]
    pub building_id: Option<i32>,
    /// `None` once the referenced room was deleted.
    #[serde(rename = "roomID")]
    pub room_id: Option<i32>,
}

/// Full field set for create and update. Both references are mandatory on
/// write even though stored students may have lost them.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentData {
    pub student_no: String,
    pub name: String,
    pub gender: Gender,
    pub ethnicity: String,
    pub major: String,
    pub class_name: String,
    pub phone: String,
    pub building_id: i32,
    pub room_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    /// Matches student number, name or class name exactly
    pub keyword: Option<String>,
    pub room_no: Option<String>,
    pub building_id: Option<i32>,
    pub room_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_round_trips_through_its_stored_value() {
        assert_eq!("男".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" 女 ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(Gender::Female.to_string(), "女");
    }

    #[test]
    fn unknown_gender_is_the_domain_error() {
        assert_eq!(
            "M".parse::<Gender>().unwrap_err(),
            DomainError::InvalidGender("M".into())
        );
    }
}
