//! User management service: application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    DomainError, DomainResult, RepositoryProvider, User, UserData, UserFilter, UserRole,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::shared::{require_text, Listing, PageRequest};

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

/// Account fields as submitted by staff. An empty password on update
/// keeps the stored hash.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub username: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
}

/// Account created when the users table is empty.
#[derive(Debug, Clone)]
pub struct DefaultAdmin {
    pub username: String,
    pub name: String,
    pub password: String,
}

impl Default for DefaultAdmin {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            name: "管理员".into(),
            password: "admin123".into(),
        }
    }
}

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

fn hash(password: &str) -> DomainResult<String> {
    hash_password(password).map_err(|e| DomainError::persistence("密码加密失败", e))
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    // ── Authentication ──────────────────────────────────────────

    /// Verify credentials and issue a token. Unknown users and wrong
    /// passwords fail identically.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResult> {
        let Some(user) = self.repos.users().find_by_username(username.trim()).await? else {
            warn!(username, "Login failed: unknown user");
            return Err(DomainError::Unauthorized("invalid credentials".into()));
        };

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            warn!(username, "Login failed: wrong password");
            return Err(DomainError::Unauthorized("invalid credentials".into()));
        }

        let token = create_token(user.id, &user.username, user.role, &self.jwt_config)
            .map_err(|e| DomainError::persistence("生成令牌失败", e))?;

        info!(user_id = user.id, username = %user.username, "User logged in");
        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user,
        })
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list(&self, filter: UserFilter, page: PageRequest) -> DomainResult<Listing<User>> {
        self.repos.users().list(filter, page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("User", id))
    }

    // ── Commands ────────────────────────────────────────────────

    pub async fn create(&self, input: UserInput) -> DomainResult<User> {
        let username = require_text(&input.username, "用户名")?;
        if input.password.is_empty() {
            return Err(DomainError::Validation("密码不能为空".into()));
        }
        let data = UserData {
            username,
            name: input.name.trim().to_string(),
            password_hash: Some(hash(&input.password)?),
            role: input.role,
        };
        self.repos.users().insert(data).await
    }

    pub async fn update(&self, id: i32, input: UserInput) -> DomainResult<User> {
        self.get(id).await?;
        let username = require_text(&input.username, "用户名")?;
        let password_hash = if input.password.is_empty() {
            None
        } else {
            Some(hash(&input.password)?)
        };
        let data = UserData {
            username,
            name: input.name.trim().to_string(),
            password_hash,
            role: input.role,
        };
        self.repos.users().update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.users().delete(id).await
    }

    /// Create the bootstrap admin when no account exists yet. Returns the
    /// created user, or `None` when accounts were already present.
    pub async fn ensure_default_admin(&self, admin: &DefaultAdmin) -> DomainResult<Option<User>> {
        if self.repos.users().count().await? > 0 {
            return Ok(None);
        }
        let user = self
            .create(UserInput {
                username: admin.username.clone(),
                name: admin.name.clone(),
                password: admin.password.clone(),
                role: UserRole::Admin,
            })
            .await?;
        info!(username = %user.username, "Default admin account created");
        Ok(Some(user))
    }
}
