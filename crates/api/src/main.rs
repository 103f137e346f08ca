use std::net::SocketAddr;
use std::sync::Arc;

use abstracts_notify::{EmailConfig, SmtpMailer, SubmissionNotifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use abstracts_api::config::ServerConfig;
use abstracts_api::router::build_app_router;
use abstracts_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "abstracts_api=debug,abstracts_notify=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid configuration");
    tracing::info!(
        host = %config.host,
        port = %config.port,
        deadline = %config.submissions.deadline,
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = abstracts_db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    abstracts_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    abstracts_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Email ---
    let notifier = match EmailConfig::from_env() {
        Some(email) => {
            let mailer = SmtpMailer::new(&email).expect("Invalid SMTP configuration");
            tracing::info!(smtp_host = %email.smtp_host, "SMTP mailer configured");
            Some(SubmissionNotifier::new(
                Arc::new(mailer),
                email.from_address,
                config.submissions.admin_email.clone(),
                config.submissions.conference_name.clone(),
            ))
        }
        None => {
            tracing::warn!("SMTP_HOST not set; submission emails are disabled");
            None
        }
    };

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        notifier,
    };

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

    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
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
