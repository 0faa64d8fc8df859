use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::web::{config::WebConfig, error::WebError};

/// Connects to the Sqlite database backing the session store.
///
/// The web tier keeps no domain data; this database only holds sessions.
///
/// # Arguments
/// - `config` - Web configuration containing the session database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database
/// - `Err(WebError)` - Failed to connect
pub async fn connect_to_database(config: &WebConfig) -> Result<DatabaseConnection, WebError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Builds the session layer over a Sqlite-backed store.
///
/// Creates the session table if it does not exist and configures sessions to
/// expire after seven days of inactivity.
///
/// # Arguments
/// - `db` - Database connection whose pool backs the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(WebError)` - Failed to migrate the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, WebError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}
