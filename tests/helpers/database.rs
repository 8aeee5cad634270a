use sqlx::SqlitePool;

use starport::adapters::sqlite::{all_embedded_migrations, create_test_pool, Migrator};

/// Create an in-memory SQLite database for testing
///
/// Creates a fresh in-memory database with migrations applied.
/// Each call creates a completely isolated database instance.
pub async fn setup_test_db() -> SqlitePool {
    let pool = create_test_pool()
        .await
        .expect("failed to create test database");

    let migrator = Migrator::new(pool.clone());
    migrator
        .run_embedded_migrations(all_embedded_migrations())
        .await
        .expect("failed to run migrations");

    pool
}

/// Teardown test database
///
/// Closes the connection pool and cleans up resources.
pub async fn teardown_test_db(pool: SqlitePool) {
    pool.close().await;
}
