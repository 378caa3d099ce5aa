//! Main application router.

use crate::{
    controllers::{auth_controller, health_controller, user_controller},
    middleware::{auth_middleware, AuthMiddlewareState},
    state::AppState,
};
use axum::{http::HeaderValue, middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use unsacad_config::ServerConfig;

/// Creates the main application router.
pub fn create_router(
    state: AppState,
    auth_state: AuthMiddlewareState,
    server_config: &ServerConfig,
) -> Router {
    let cors = create_cors_layer(server_config);

    let api_router = Router::new()
        .nest("/auth", auth_controller::router())
        .nest("/users", user_controller::router())
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state);

    let router = Router::new()
        // Health endpoint (no auth required)
        .merge(health_controller::router())
        // API v1
        .nest("/api/v1", api_router)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!("Router created with REST endpoints under /api/v1");
    router
}

fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            let origins: Vec<HeaderValue> = server_config
                .cors_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}
