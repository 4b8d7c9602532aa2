use anyhow::Result;
use sea_orm::Database;
use std::borrow::Cow;

use crate::schemas::AppState;

/// Connect to the database named by `database_url` and build the shared
/// application state. Handlers receive the connection through this state
/// rather than a process-wide singleton.
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    dotenvy::dotenv().ok();
    let database_url = normalize_database_url(database_url);

    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url.as_ref()).await?;

    Ok(AppState { db })
}

/// Hosting platforms hand out `postgres://` URLs; the driver wants
/// `postgresql://`.
pub fn normalize_database_url(url: &str) -> Cow<'_, str> {
    match url.strip_prefix("postgres://") {
        Some(rest) => Cow::Owned(format!("postgresql://{rest}")),
        None => Cow::Borrowed(url),
    }
}
