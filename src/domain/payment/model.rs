//! Payment domain entity

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::shared::DomainError;
use utoipa::ToSchema;

/// Fee category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    /// 住宿费
    Accommodation,
    /// 水电费
    Utilities,
    /// 押金
    Deposit,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accommodation => "住宿费",
            Self::Utilities => "水电费",
            Self::Deposit => "押金",
        }
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "住宿费" => Ok(Self::Accommodation),
            "水电费" => Ok(Self::Utilities),
            "押金" => Ok(Self::Deposit),
            other => Err(DomainError::InvalidPaymentType(other.to_string())),
        }
    }
}

impl Serialize for PaymentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i32,
    pub payment_no: String,
    #[serde(rename = "buildingID")]
    pub building_id: i32,
    #[serde(rename = "roomID")]
    pub room_id: i32,
    #[serde(rename = "studentID")]
    pub student_id: Option<i32>,
    pub paid_at: NaiveDate,
    #[schema(value_type = String, example = "住宿费")]
    pub payment_type: PaymentType,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentData {
    pub payment_no: String,
    pub building_id: i32,
    pub room_id: i32,
    /// Optional payer; must live in `room_id` when present.
    pub student_id: Option<i32>,
    pub paid_at: NaiveDate,
    pub payment_type: PaymentType,
    pub amount: f64,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    /// Matches payment number or payment type exactly
    pub keyword: Option<String>,
    pub building_id: Option<i32>,
    pub room_id: Option<i32>,
    pub student_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_types_parse_from_stored_values() {
        for t in [
            PaymentType::Accommodation,
            PaymentType::Utilities,
            PaymentType::Deposit,
        ] {
            assert_eq!(t.as_str().parse::<PaymentType>().unwrap(), t);
        }
    }

    #[test]
    fn unknown_payment_type_is_rejected() {
        assert!(matches!(
            "罚款".parse::<PaymentType>(),
            Err(DomainError::InvalidPaymentType(t)) if t == "罚款"
        ));
    }

    #[test]
    fn serializes_with_source_field_names() {
        let p = Payment {
            id: 1,
            payment_no: "P1".into(),
            building_id: 2,
            room_id: 3,
            student_id: None,
            paid_at: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            payment_type: PaymentType::Deposit,
            amount: 500.0,
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["paymentNo"], "P1");
        assert_eq!(json["buildingID"], 2);
        assert_eq!(json["studentID"], serde_json::Value::Null);
        assert_eq!(json["paidAt"], "2024-03-01");
        assert_eq!(json["paymentType"], "押金");
    }
}
