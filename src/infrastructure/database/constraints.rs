//! Names the schema gives its rules, shared by the migrations that create
//! them and the translator that recognises them in store rejections.

use crate::shared::DomainError;

pub const CHK_BUILDING_FLOOR_COUNT: &str = "chk_building_floor_count";
pub const CHK_BUILDING_ROOM_COUNT: &str = "chk_building_room_count";
pub const CHK_ROOM_CAPACITY: &str = "chk_room_capacity";
pub const CHK_ROOM_FEE_NONNEGATIVE: &str = "chk_room_fee_nonnegative";
pub const CHK_STUDENT_GENDER: &str = "chk_student_gender";
pub const CHK_PAYMENT_AMOUNT: &str = "chk_payment_amount";
pub const CHK_PAYMENT_TYPE: &str = "chk_payment_type";

/// Messages raised by the room capacity triggers.
pub const RAISE_ROOM_NOT_FOUND: &str = "room_not_found";
pub const RAISE_ROOM_FULL: &str = "room_full";

pub const IDX_BUILDING_NO: &str = "idx_apartment_buildings_building_no";
pub const IDX_STUDENT_NO: &str = "idx_students_student_no";
pub const IDX_PAYMENT_NO: &str = "idx_payments_payment_no";
pub const IDX_USERNAME: &str = "idx_users_username";

/// Check constraints in classification priority order.
pub const CHECKS: [&str; 7] = [
    CHK_BUILDING_FLOOR_COUNT,
    CHK_BUILDING_ROOM_COUNT,
    CHK_ROOM_CAPACITY,
    CHK_ROOM_FEE_NONNEGATIVE,
    CHK_STUDENT_GENDER,
    CHK_PAYMENT_AMOUNT,
    CHK_PAYMENT_TYPE,
];

/// Natural keys: (unique index name, `table.column` as SQLite reports it).
pub const NATURAL_KEYS: [(&str, &str); 4] = [
    (IDX_BUILDING_NO, "apartment_buildings.building_no"),
    (IDX_STUDENT_NO, "students.student_no"),
    (IDX_PAYMENT_NO, "payments.payment_no"),
    (IDX_USERNAME, "users.username"),
];

/// Domain error for a violated check constraint.
pub fn check_violation(name: &str) -> Option<DomainError> {
    let err = match name {
        CHK_BUILDING_FLOOR_COUNT => DomainError::InvalidFloorCount,
        CHK_BUILDING_ROOM_COUNT => DomainError::InvalidRoomCount,
        CHK_ROOM_CAPACITY => DomainError::InvalidRoomCapacity,
        CHK_ROOM_FEE_NONNEGATIVE => DomainError::InvalidRoomFee,
        CHK_STUDENT_GENDER => DomainError::InvalidGender(String::new()),
        CHK_PAYMENT_AMOUNT => DomainError::InvalidAmount,
        CHK_PAYMENT_TYPE => DomainError::InvalidPaymentType(String::new()),
        _ => return None,
    };
    Some(err)
}
