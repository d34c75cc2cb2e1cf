use anyhow::Context;
use api::Settings;
use store::PgStore;
use tower_sessions_sqlx_store::PostgresStore;
use tracing_subscriber::EnvFilter;
use web::{AppState, SessionConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let settings = Settings::new().context("Failed to load settings")?;
    let session_config =
        SessionConfig::from_settings(&settings).context("SECRET_KEY must be at least 64 bytes")?;

    let pool = api::db::connect(&settings)
        .await
        .context("Failed to connect to database")?;
    api::db::migrate(&pool)
        .await
        .context("Failed to run migrations")?;

    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("Failed to create session table")?;

    let state = AppState::with_store(PgStore::new(pool));
    let router = web::app(state, session_store, session_config);

    let listener = tokio::net::TcpListener::bind(&settings.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.listen_addr))?;
    tracing::info!("Server listening on {}", settings.listen_addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
