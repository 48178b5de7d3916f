//! # atelierd — atelier daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository, media store, and mailer implementations (adapters)
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use chrono::Duration;
use tracing_subscriber::EnvFilter;

use atelier_adapter_http_axum::state::AppState;
use atelier_adapter_media_fs::FsMediaStore;
use atelier_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqliteProjectRepository, SqliteServiceRepository,
};
use atelier_app::services::catalog_service::CatalogService;
use atelier_app::services::contact_service::ContactService;
use atelier_app::services::listing_service::ListingService;
use atelier_app::services::media_service::MediaService;
use atelier_app::services::project_service::ProjectService;
use atelier_app::services::session_service::SessionService;
use atelier_app::session_store::InMemorySessionStore;

use config::Config;

/// Bucket uploaded project imagery is stored under.
const PROJECTS_BUCKET: &str = "projects";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database.url.clone(),
    }
    .build()
    .await
    .context("initializing database")?;
    let pool = db.pool().clone();

    // Adapters
    let media_store = FsMediaStore::new(&config.media.root, &config.media.base_url);
    let mailer = atelier_adapter_mailer_smtp::Config {
        host: config.mail.host.clone(),
        username: config.mail.username.clone(),
        password: config.mail.password.clone(),
        from: config.mail.from.clone(),
        to: config.mail.to.clone(),
    }
    .build()
    .context("configuring SMTP relay")?;

    // Services
    let state = AppState::new(
        CatalogService::new(
            SqliteServiceRepository::new(pool.clone()),
            SqliteProjectRepository::new(pool.clone()),
        ),
        ProjectService::new(
            SqliteProjectRepository::new(pool.clone()),
            MediaService::new(media_store.clone()),
            PROJECTS_BUCKET,
        ),
        ListingService::new(
            SqliteServiceRepository::new(pool.clone()),
            SqliteProjectRepository::new(pool),
        ),
        MediaService::new(media_store),
        ContactService::new(mailer),
        SessionService::new(
            InMemorySessionStore::new(),
            config.admin.password.clone(),
            Duration::hours(config.admin.session_hours),
        ),
    );

    // HTTP
    let app = atelier_adapter_http_axum::router::build(state, &config.media.root);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "atelierd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install ctrl-c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutting down");
}
