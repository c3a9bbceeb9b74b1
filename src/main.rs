//! Dormitory management REST service.
//!
//! Reads configuration from TOML (`DORM_CONFIG` or
//! ~/.config/dorm-service/config.toml) plus `DORM_*` environment overrides.

use std::sync::Arc;

use tracing::{error, info, warn};

use dorm_service::application::{DormServices, UserService};
use dorm_service::config::config_path_from_env;
use dorm_service::domain::RepositoryProvider;
use dorm_service::interfaces::http::middleware::AuthState;
use dorm_service::{create_api_router, init_database, AppConfig, AppState, SeaOrmRepositoryProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = config_path_from_env();
    let loaded = if config_path.exists() {
        Some(AppConfig::load(&config_path))
    } else {
        None
    };
    let mut app_cfg = match &loaded {
        Some(Ok(cfg)) => cfg.clone(),
        _ => AppConfig::default(),
    };
    app_cfg.apply_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app_cfg.logging.level)),
        )
        .init();

    match loaded {
        Some(Ok(_)) => info!("Configuration loaded from {}", config_path.display()),
        Some(Err(e)) => error!("Failed to load config: {}. Using defaults.", e),
        None => info!("No config at {}, using defaults", config_path.display()),
    }

    info!("Starting dormitory management service...");

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&app_cfg.database_config()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to initialise database: {}", e);
            return Err(e.into());
        }
    };

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // ── Services ───────────────────────────────────────────────
    let jwt_config = app_cfg.jwt_config();
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );
    let users = Arc::new(UserService::new(repos.clone(), jwt_config.clone()));
    match users.ensure_default_admin(&app_cfg.default_admin()).await {
        Ok(Some(admin)) => {
            info!("Default admin created: {}", admin.username);
            warn!("Please change the default admin password");
        }
        Ok(None) => {}
        Err(e) => error!("Failed to create default admin: {}", e),
    }

    let state = AppState {
        dorm: Arc::new(DormServices::new(repos)),
        users,
        db: db.clone(),
        auth: AuthState { jwt_config },
    };
    let api_router = create_api_router(state);

    // ── REST API with graceful shutdown ────────────────────────
    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let served = axum::serve(listener, api_router)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = served {
        error!("REST API server error: {}", e);
    }

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
