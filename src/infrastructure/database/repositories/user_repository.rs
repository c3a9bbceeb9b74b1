use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use super::listing::{fetch_listing, keyword};
use crate::domain::user::{User, UserData, UserFilter, UserRepository, UserRole};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::user;
use crate::infrastructure::database::error_translator::{translate, with_default};
use crate::shared::{Listing, PageRequest};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Admin => UserRole::Admin,
        user::UserRole::Operator => UserRole::Operator,
        user::UserRole::Viewer => UserRole::Viewer,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Admin => user::UserRole::Admin,
        UserRole::Operator => user::UserRole::Operator,
        UserRole::Viewer => user::UserRole::Viewer,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        name: model.name,
        password_hash: model.password_hash,
        role: entity_role_to_domain(model.role),
        created_at: model.created_at,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(with_default("查询用户失败"))?;
        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(with_default("查询用户失败"))?;
        Ok(model.map(user_model_to_domain))
    }

    async fn list(&self, filter: UserFilter, page: PageRequest) -> DomainResult<Listing<User>> {
        let mut query = user::Entity::find().order_by_asc(user::Column::Id);

        if let Some(k) = keyword(&filter.keyword) {
            query = query.filter(
                Condition::any()
                    .add(user::Column::Username.eq(k))
                    .add(user::Column::Name.eq(k)),
            );
        }
        if let Some(role) = filter.role {
            query = query.filter(user::Column::Role.eq(domain_role_to_entity(role)));
        }

        let listing = fetch_listing(&self.db, query, page)
            .await
            .map_err(with_default("查询用户失败"))?;
        Ok(listing.map(user_model_to_domain))
    }

    async fn count(&self) -> DomainResult<u64> {
        user::Entity::find()
            .count(&self.db)
            .await
            .map_err(with_default("查询用户失败"))
    }

    async fn insert(&self, data: UserData) -> DomainResult<User> {
        let password_hash = data
            .password_hash
            .ok_or_else(|| DomainError::Validation("密码不能为空".into()))?;

        let new_user = user::ActiveModel {
            username: Set(data.username),
            name: Set(data.name),
            password_hash: Set(password_hash),
            role: Set(domain_role_to_entity(data.role)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let model = new_user
            .insert(&self.db)
            .await
            .map_err(|e| translate(e, "创建用户失败"))?;

        info!("User created: {} ({:?})", model.username, model.role);
        Ok(user_model_to_domain(model))
    }

    async fn update(&self, id: i32, data: UserData) -> DomainResult<User> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(with_default("查询用户失败"))?
            .ok_or(DomainError::not_found("User", id))?;

        let mut active: user::ActiveModel = existing.into();
        active.username = Set(data.username);
        active.name = Set(data.name);
        active.role = Set(domain_role_to_entity(data.role));
        if let Some(hash) = data.password_hash {
            active.password_hash = Set(hash);
        }

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| translate(e, "更新用户失败"))?;
        info!("User updated: id={}", id);
        Ok(user_model_to_domain(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(with_default("删除用户失败"))?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("User", id));
        }
        info!("User deleted: id={}", id);
        Ok(())
    }
}
