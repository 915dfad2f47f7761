use music_catalog::api::AppState;
use music_catalog::config::Config;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,music_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    match config.database_url {
        Some(_) => tracing::info!(
            "Configuration loaded (database from DATABASE_URL, schema {})",
            config.db_schema
        ),
        None => tracing::info!(
            "Configuration loaded (database {}@{}:{}/{}, schema {})",
            config.db_user,
            config.db_host,
            config.db_port,
            config.db_name,
            config.db_schema
        ),
    }

    // Connections are opened on first use, so the server starts even if the
    // database is briefly unavailable; affected requests fail with 500.
    let db = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_lazy_with(config.connect_options()?);

    let app_state = Arc::new(AppState::new(db));
    let app = music_catalog::app(app_state, &config);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
