//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::UserInput;
use crate::domain::{DomainError, User, UserFilter, UserRole};
use crate::shared::PageRequest;

/// Staff account as exposed over the API; never carries the hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            name: u.name,
            role: u.role,
            created_at: u.created_at,
        }
    }
}

/// Create or replace an account. An empty password on update keeps the
/// current one.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    #[validate(length(max = 50, message = "用户名不能超过50个字符"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(max = 50, message = "姓名不能超过50个字符"))]
    pub name: String,
    #[serde(default)]
    pub password: String,
    /// admin, operator or viewer
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "viewer".to_string()
}

impl TryFrom<UserRequest> for UserInput {
    type Error = DomainError;

    fn try_from(req: UserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            role: req.role.parse()?,
            username: req.username,
            name: req.name,
            password: req.password,
        })
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Exact username or name
    pub keyword: Option<String>,
    /// admin, operator or viewer
    pub role: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListUsersParams {
    pub fn into_parts(self) -> Result<(UserFilter, PageRequest), DomainError> {
        let role = match self.role.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<UserRole>()?),
        };
        Ok((
            UserFilter {
                keyword: self.keyword,
                role,
            },
            PageRequest::new(self.page, self.page_size),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_viewer() {
        let req: UserRequest =
            serde_json::from_value(serde_json::json!({"username": "clerk"})).unwrap();
        let input = UserInput::try_from(req).unwrap();
        assert_eq!(input.role, UserRole::Viewer);
        assert!(input.password.is_empty());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let req: UserRequest =
            serde_json::from_value(serde_json::json!({"username": "x", "role": "root"})).unwrap();
        assert!(matches!(
            UserInput::try_from(req),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn dto_hides_password_hash() {
        let user = User {
            id: 1,
            username: "admin".into(),
            name: "管理员".into(),
            password_hash: "$2b$secret".into(),
            role: UserRole::Admin,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&UserDto::from(user)).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"role\":\"admin\""));
    }

    #[test]
    fn blank_role_filter_is_ignored() {
        let params = ListUsersParams {
            role: Some(" ".into()),
            ..Default::default()
        };
        let (filter, page) = params.into_parts().unwrap();
        assert_eq!(filter.role, None);
        assert_eq!(page.window(), None);
    }
}
