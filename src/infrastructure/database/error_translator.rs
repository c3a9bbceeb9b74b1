//! Store rejection → `DomainError`
//!
//! A failed write reaches us as a `DbErr`. Drivers report the violated rule
//! either structurally (constraint name, unique-violation kind) or only as
//! message text; both paths resolve to the same error kind.

use sea_orm::sqlx::error::ErrorKind;
use sea_orm::{DbErr, RuntimeErr};

use super::constraints::{self, CHECKS, NATURAL_KEYS, RAISE_ROOM_FULL, RAISE_ROOM_NOT_FOUND};
use crate::shared::DomainError;

/// What the driver told us about a rejected statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreRejection {
    pub constraint: Option<String>,
    pub unique_violation: bool,
    pub message: String,
}

impl StoreRejection {
    pub fn from_db_err(err: &DbErr) -> Self {
        let database = match err {
            DbErr::Exec(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e)))
            | DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e))) => Some(e),
            _ => None,
        };

        match database {
            Some(e) => Self {
                constraint: e.constraint().map(str::to_string),
                unique_violation: matches!(e.kind(), ErrorKind::UniqueViolation),
                message: e.message().to_string(),
            },
            None => Self {
                constraint: None,
                unique_violation: matches!(
                    err.sql_err(),
                    Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
                ),
                message: err.to_string(),
            },
        }
    }

    /// Free-text view used when no structured signal matched.
    fn mentions(&self, needle: &str) -> bool {
        self.message.contains(needle)
    }
}

/// Classify a rejection. First match wins: check constraints, then the
/// admission trigger signals, then natural-key collisions.
pub fn classify(rejection: &StoreRejection) -> Option<DomainError> {
    let constraint = rejection.constraint.as_deref();

    for name in CHECKS {
        if constraint == Some(name) || rejection.mentions(name) {
            return constraints::check_violation(name);
        }
    }

    if rejection.mentions(RAISE_ROOM_NOT_FOUND) {
        return Some(DomainError::RoomNotFound(None));
    }
    if rejection.mentions(RAISE_ROOM_FULL) {
        return Some(DomainError::RoomFull(None));
    }

    if let Some(key) = natural_key(rejection) {
        return Some(DomainError::DuplicateKey(key.to_string()));
    }
    if rejection.unique_violation
        || rejection.mentions("UNIQUE constraint failed")
        || rejection.mentions("duplicate key")
    {
        let key = constraint.unwrap_or("unknown");
        return Some(DomainError::DuplicateKey(key.to_string()));
    }

    None
}

fn natural_key(rejection: &StoreRejection) -> Option<&'static str> {
    let constraint = rejection.constraint.as_deref();
    NATURAL_KEYS
        .iter()
        .find(|(index, column)| {
            constraint == Some(*index) || rejection.mentions(index) || rejection.mentions(column)
        })
        .map(|(_, column)| *column)
}

/// Translate a store failure; anything unrecognised becomes `Persistence`
/// carrying `default_message`.
pub fn translate(err: DbErr, default_message: &str) -> DomainError {
    let rejection = StoreRejection::from_db_err(&err);
    classify(&rejection).unwrap_or_else(|| DomainError::persistence(default_message, err))
}

/// Build a closure for `map_err` that translates with a fixed default.
pub fn with_default(default_message: &'static str) -> impl Fn(DbErr) -> DomainError {
    move |err| translate(err, default_message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(message: &str) -> StoreRejection {
        StoreRejection {
            message: message.to_string(),
            ..Default::default()
        }
    }

    fn named(constraint: &str) -> StoreRejection {
        StoreRejection {
            constraint: Some(constraint.to_string()),
            message: "new row violates check constraint".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn structured_and_textual_checks_agree() {
        let cases = [
            ("chk_building_floor_count", DomainError::InvalidFloorCount),
            ("chk_building_room_count", DomainError::InvalidRoomCount),
            ("chk_room_capacity", DomainError::InvalidRoomCapacity),
            ("chk_room_fee_nonnegative", DomainError::InvalidRoomFee),
            ("chk_payment_amount", DomainError::InvalidAmount),
        ];
        for (name, expected) in cases {
            assert_eq!(classify(&named(name)), Some(expected.clone()));
            let sqlite = text(&format!("CHECK constraint failed: {}", name));
            assert_eq!(classify(&sqlite), Some(expected));
        }
    }

    #[test]
    fn enumerated_checks_map_to_their_kinds() {
        assert!(matches!(
            classify(&named("chk_student_gender")),
            Some(DomainError::InvalidGender(_))
        ));
        assert!(matches!(
            classify(&text("CHECK constraint failed: chk_payment_type")),
            Some(DomainError::InvalidPaymentType(_))
        ));
    }

    #[test]
    fn trigger_signals() {
        assert_eq!(
            classify(&text("(code: 1811) room_full")),
            Some(DomainError::RoomFull(None))
        );
        assert_eq!(
            classify(&text("room_not_found")),
            Some(DomainError::RoomNotFound(None))
        );
    }

    #[test]
    fn unique_collisions_name_the_key() {
        let sqlite = text("UNIQUE constraint failed: students.student_no");
        assert_eq!(
            classify(&sqlite),
            Some(DomainError::DuplicateKey("students.student_no".into()))
        );

        let postgres = StoreRejection {
            constraint: Some("idx_users_username".into()),
            unique_violation: true,
            message: "duplicate key value violates unique constraint \"idx_users_username\"".into(),
        };
        assert_eq!(
            classify(&postgres),
            Some(DomainError::DuplicateKey("users.username".into()))
        );

        let other = StoreRejection {
            constraint: Some("some_other_key".into()),
            unique_violation: true,
            message: String::new(),
        };
        assert_eq!(
            classify(&other),
            Some(DomainError::DuplicateKey("some_other_key".into()))
        );
    }

    #[test]
    fn checks_win_over_later_kinds() {
        let both = text("chk_room_capacity violated; room_full");
        assert_eq!(classify(&both), Some(DomainError::InvalidRoomCapacity));
    }

    #[test]
    fn unknown_failures_become_persistence() {
        assert_eq!(classify(&text("FOREIGN KEY constraint failed")), None);

        let err = translate(DbErr::Custom("disk I/O error".into()), "创建寝室失败");
        match err {
            DomainError::Persistence { message, detail } => {
                assert_eq!(message, "创建寝室失败");
                assert!(detail.contains("disk I/O error"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn custom_errors_are_classified_from_text() {
        let err = translate(DbErr::Custom("room_full".into()), "创建学生失败");
        assert_eq!(err, DomainError::RoomFull(None));
    }
}
