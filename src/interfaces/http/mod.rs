//! HTTP REST API interfaces
//!
//! - `common`: error envelope and validated JSON extractor
//! - `middleware`: JWT bearer authentication
//! - `modules`: one handler module per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

pub use router::{create_api_router, ApiDoc};
pub use state::AppState;
