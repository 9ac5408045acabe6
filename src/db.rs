use crate::error::ServiceError;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness as _, embed_migrations};
use std::sync::LazyLock;

pub mod rounds;
pub mod tickets;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[derive(Debug)]
struct SqliteConnectionCustomizer;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqliteConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        use diesel::RunQueryDsl as _;

        // using WAL mode for better concurrency
        diesel::sql_query("PRAGMA journal_mode = WAL;")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;

        // writers wait for the lock instead of failing immediately
        diesel::sql_query("PRAGMA busy_timeout = 30000;")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;

        // foreign key constraints
        diesel::sql_query("PRAGMA foreign_keys = ON;")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;

        Ok(())
    }
}

fn get_database_url() -> String {
    #[cfg(not(test))]
    let database_url = { std::env::var("DATABASE_URL").expect("DATABASE_URL must be set") };

    #[cfg(test)]
    let database_url = {
        let url = &test_support::TEST_DB.path;
        log::debug!("Using test database at {}", url.display());
        url.display().to_string()
    };

    database_url
}

static DB_POOL: LazyLock<Pool<ConnectionManager<SqliteConnection>>> = LazyLock::new(|| {
    let database_url = get_database_url();

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(10)
        .connection_timeout(std::time::Duration::from_secs(30))
        .connection_customizer(Box::new(SqliteConnectionCustomizer))
        .build(manager)
        .expect("Failed to create pool")
});

/// One-off connection outside the pool, for startup checks and migrations.
pub fn establish_db_connection() -> anyhow::Result<SqliteConnection> {
    let database_url = get_database_url();
    let mut conn = SqliteConnection::establish(&database_url).map_err(|e| {
        let err_message = format!("Error connecting to {database_url}: {e}");
        log::error!("{err_message}");
        anyhow::anyhow!("{err_message}")
    })?;

    let customizer = SqliteConnectionCustomizer;
    customizer
        .on_acquire(&mut conn)
        .map_err(|e| anyhow::anyhow!("Failed to customize connection: {:?}", e))?;

    Ok(conn)
}

/// Apply any migrations the database is missing.
pub fn run_migrations() -> anyhow::Result<()> {
    let mut conn = establish_db_connection()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {e}"))?;
    for version in &applied {
        log::info!("applied migration {version}");
    }
    Ok(())
}

pub fn get_db_connection()
-> Result<PooledConnection<ConnectionManager<SqliteConnection>>, ServiceError> {
    Ok(DB_POOL.get()?)
}
