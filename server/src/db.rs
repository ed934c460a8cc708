use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::env;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

/// Build the connection pool and bring the schema up to date.
///
/// Pool size can be tuned with DB_POOL_SIZE; r2d2's default is used
/// otherwise. Migration failure is fatal - the server must not come up
/// against a half-migrated database.
pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);

    let mut builder = r2d2::Pool::builder();
    if let Some(size) = env::var("DB_POOL_SIZE").ok().and_then(|v| v.parse().ok()) {
        builder = builder.max_size(size);
    }
    let pool = builder
        .build(manager)
        .expect("Failed to create database pool");

    let mut conn = pool
        .get()
        .expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");

    pool
}
