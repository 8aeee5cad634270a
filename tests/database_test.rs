mod helpers;

use starport::adapters::sqlite::{all_embedded_migrations, create_test_pool, Migrator};

use helpers::database::teardown_test_db;

#[tokio::test]
async fn migrations_apply_once_and_record_the_version() {
    let pool = create_test_pool().await.unwrap();
    let migrator = Migrator::new(pool.clone());

    let applied = migrator
        .run_embedded_migrations(all_embedded_migrations())
        .await
        .unwrap();
    assert_eq!(applied, 1);
    assert_eq!(migrator.get_current_version().await.unwrap(), 1);

    // Re-running is a no-op.
    let reapplied = migrator
        .run_embedded_migrations(all_embedded_migrations())
        .await
        .unwrap();
    assert_eq!(reapplied, 0);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn migrated_schema_has_the_expected_tables() {
    let pool = create_test_pool().await.unwrap();
    let migrator = Migrator::new(pool.clone());
    migrator
        .run_embedded_migrations(all_embedded_migrations())
        .await
        .unwrap();

    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    let names: Vec<_> = tables.iter().map(|(n,)| n.as_str()).collect();

    for expected in ["locations", "schema_migrations", "top_locations", "trips"] {
        assert!(names.contains(&expected), "missing table {expected}");
    }

    teardown_test_db(pool).await;
}
