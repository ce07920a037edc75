use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prompt_explorer_api::config::ServerConfig;
use prompt_explorer_api::router::build_app_router;
use prompt_explorer_api::state::AppState;
use prompt_explorer_db::seeder;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "prompt_explorer_api=debug,prompt_explorer_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = prompt_explorer_db::create_pool(&config.database_url)
        .await
        .expect("Failed to open database");
    tracing::info!(database_url = %config.database_url, "Database connection pool created");

    prompt_explorer_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    // --- Seed ---
    // A failed seed leaves an empty schema; the server still starts so the
    // failure shows up as 404s instead of a crash loop.
    if config.seed_on_startup {
        match seeder::seed_from_file(&pool, &config.seed_file).await {
            Ok(summary) => tracing::info!(
                project_id = summary.project_id,
                prompts = summary.prompt_ids.len(),
                nodes = summary.node_count,
                "Seed complete"
            ),
            Err(e) => tracing::error!(
                error = %e,
                seed_file = %config.seed_file.display(),
                "Seeding failed, serving empty database"
            ),
        }
    } else {
        tracing::info!("Seeding disabled, using existing database");
    }

    // --- App state ---
    let state = AppState { pool };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
