//! Server bootstrap: logging, wiring, and graceful shutdown.

use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unsacad_config::{AppConfig, LoggingConfig};
use unsacad_domain::UserRepository;
use unsacad_repository::{create_pool, run_migrations, PgUserRepository};
use unsacad_rest::middleware::AuthMiddlewareState;
use unsacad_rest::{create_router, AppState};
use unsacad_security::{PasswordHasher, PasswordHashing, TokenProvider};
use unsacad_service::{AuthServiceImpl, UserServiceImpl};

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Wires the application together and serves it until shutdown.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!(
        name = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        "starting server"
    );

    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to the database")?;
    run_migrations(&pool)
        .await
        .context("failed to apply database schema")?;

    let repository: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool));
    let hasher: Arc<dyn PasswordHashing> = Arc::new(PasswordHasher::new());
    let tokens = Arc::new(TokenProvider::new(Arc::new(config.security.clone())));

    let user_service = Arc::new(UserServiceImpl::new(
        Arc::clone(&repository),
        Arc::clone(&hasher),
    ));
    let auth_service = Arc::new(AuthServiceImpl::new(
        repository,
        hasher,
        Arc::clone(&tokens),
    ));

    let state = AppState::new(user_service, auth_service);
    let auth_state = AuthMiddlewareState::new(tokens);
    let router = create_router(state, auth_state, &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

/// Completes on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C"),
        () = terminate => info!("received SIGTERM"),
    }
}
