//! Router state shared by every handler

use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use super::middleware::AuthState;
use crate::application::{DormServices, UserService};

#[derive(Clone)]
pub struct AppState {
    pub dorm: Arc<DormServices>,
    pub users: Arc<UserService>,
    pub db: DatabaseConnection,
    pub auth: AuthState,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(s: &AppState) -> Self {
        s.auth.clone()
    }
}
