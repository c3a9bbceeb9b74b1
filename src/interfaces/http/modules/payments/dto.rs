//! Payment DTOs

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{DomainError, PaymentData, PaymentFilter};
use crate::shared::{optional_id, parse_date, require_text, PageRequest};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[validate(length(max = 50, message = "收费单号不能超过50个字符"))]
    pub payment_no: String,
    #[serde(rename = "buildingID", default)]
    pub building_id: i32,
    #[serde(rename = "roomID", default)]
    pub room_id: i32,
    /// Optional; 0 means no student
    #[serde(rename = "studentID", default)]
    pub student_id: Option<i32>,
    /// `YYYY-MM-DD` or RFC 3339
    #[schema(example = "2024-09-01")]
    pub paid_at: String,
    /// 住宿费, 水电费 or 押金
    pub payment_type: String,
    pub amount: f64,
}

impl TryFrom<PaymentRequest> for PaymentData {
    type Error = DomainError;

    fn try_from(req: PaymentRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            payment_no: require_text(&req.payment_no, "收费单号")?,
            building_id: req.building_id,
            room_id: req.room_id,
            student_id: optional_id(req.student_id),
            paid_at: parse_date(&req.paid_at, "交费日期")?,
            payment_type: req.payment_type.parse()?,
            amount: req.amount,
        })
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListPaymentsParams {
    /// Exact payment number or payment type
    pub keyword: Option<String>,
    #[serde(rename = "buildingID")]
    pub building_id: Option<i32>,
    #[serde(rename = "roomID")]
    pub room_id: Option<i32>,
    #[serde(rename = "studentID")]
    pub student_id: Option<i32>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListPaymentsParams {
    pub fn into_parts(self) -> (PaymentFilter, PageRequest) {
        (
            PaymentFilter {
                keyword: self.keyword,
                building_id: optional_id(self.building_id),
                room_id: optional_id(self.room_id),
                student_id: optional_id(self.student_id),
            },
            PageRequest::new(self.page, self.page_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PaymentType;

    #[test]
    fn zero_student_means_none() {
        let req: PaymentRequest = serde_json::from_value(serde_json::json!({
            "paymentNo": "P-001",
            "buildingID": 1,
            "roomID": 3,
            "studentID": 0,
            "paidAt": "2024-09-01T00:00:00Z",
            "paymentType": "水电费",
            "amount": 120.5
        }))
        .unwrap();
        let data = PaymentData::try_from(req).unwrap();
        assert_eq!(data.student_id, None);
        assert_eq!(data.payment_type, PaymentType::Utilities);
        assert_eq!(data.paid_at.to_string(), "2024-09-01");
    }

    #[test]
    fn unknown_type_is_rejected() {
        let req: PaymentRequest = serde_json::from_value(serde_json::json!({
            "paymentNo": "P-002",
            "buildingID": 1,
            "roomID": 3,
            "paidAt": "2024-09-01",
            "paymentType": "罚款",
            "amount": 10.0
        }))
        .unwrap();
        assert_eq!(
            PaymentData::try_from(req).unwrap_err(),
            DomainError::InvalidPaymentType("罚款".into())
        );
    }
}
