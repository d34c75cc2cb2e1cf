//! Database connection pool.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use tracing::info;

use crate::settings::Settings;

/// Open a connection pool using the configured database URL.
pub async fn connect(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    let mut options: PgConnectOptions = settings.database_url.parse()?;
    if !settings.database_echo {
        options = options.disable_statement_logging();
    }

    let pool = PgPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .connect_with(options)
        .await?;

    info!(max_connections = settings.database_max_connections, "connected to database");
    Ok(pool)
}

/// Create or upgrade the `users` and `notes` tables.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
