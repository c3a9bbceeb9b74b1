//! API Router with Swagger UI

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, Deleted};
use super::middleware::auth_middleware;
use super::modules::{auth, buildings, health, payments, rooms, stats, students, users};
use super::state::AppState;
use crate::domain::{
    Building, BuildingOccupancy, BuildingPaymentSummary, Payment, Room, Student, UserRole,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /api/login"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        // Statistics
        stats::building_occupancy,
        stats::building_payments,
        // Buildings
        buildings::list_buildings,
        buildings::create_building,
        buildings::update_building,
        buildings::delete_building,
        // Rooms
        rooms::list_rooms,
        rooms::create_room,
        rooms::update_room,
        rooms::delete_room,
        // Students
        students::list_students,
        students::create_student,
        students::update_student,
        students::delete_student,
        // Payments
        payments::list_payments,
        payments::create_payment,
        payments::update_payment,
        payments::delete_payment,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(
        schemas(
            ApiResponse<String>,
            Deleted,
            health::HealthResponse,
            auth::LoginRequest,
            auth::LoginResponse,
            Building,
            buildings::BuildingRequest,
            Room,
            rooms::RoomRequest,
            Student,
            students::StudentRequest,
            Payment,
            payments::PaymentRequest,
            BuildingOccupancy,
            BuildingPaymentSummary,
            UserRole,
            users::UserDto,
            users::UserRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and database reachability"),
        (name = "Authentication", description = "Staff login (JWT)"),
        (name = "Statistics", description = "Per-building occupancy and payment totals"),
        (name = "Buildings", description = "Apartment buildings"),
        (name = "Rooms", description = "Dormitory rooms and their capacity"),
        (name = "Students", description = "Residents; writes pass admission control"),
        (name = "Payments", description = "Fee records"),
        (name = "Users", description = "Staff accounts; writes require the admin role"),
    ),
    info(
        title = "Dormitory Management API",
        version = "1.0.0",
        description = "REST API for buildings, rooms, students and payments"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public_routes = Router::new()
        .route("/api/login", post(auth::login))
        .route("/api/health", get(health::health_check));

    let protected_routes = Router::new()
        .route("/api/stats/building-occupancy", get(stats::building_occupancy))
        .route("/api/stats/building-payments", get(stats::building_payments))
        .route(
            "/api/buildings",
            get(buildings::list_buildings).post(buildings::create_building),
        )
        .route(
            "/api/buildings/{id}",
            put(buildings::update_building).delete(buildings::delete_building),
        )
        .route("/api/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route(
            "/api/rooms/{id}",
            put(rooms::update_room).delete(rooms::delete_room),
        )
        .route(
            "/api/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/api/students/{id}",
            put(students::update_student).delete(students::delete_student),
        )
        .route(
            "/api/payments",
            get(payments::list_payments).post(payments::create_payment),
        )
        .route(
            "/api/payments/{id}",
            put(payments::update_payment).delete(payments::delete_payment),
        )
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/login",
            "/api/health",
            "/api/buildings",
            "/api/rooms/{id}",
            "/api/students",
            "/api/payments/{id}",
            "/api/users",
            "/api/stats/building-occupancy",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
