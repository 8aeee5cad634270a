mod helpers;

use std::collections::HashMap;
use std::sync::Arc;

use starport::adapters::cache::MokaCacheStore;
use starport::adapters::sqlite::SqliteLocationRepository;
use starport::domain::errors::DomainError;
use starport::domain::ports::CacheStore;
use starport::services::{LocationDirectory, ALL_LOCATIONS_CACHE_KEY};

use helpers::cache::UnavailableCacheStore;
use helpers::database::{setup_test_db, teardown_test_db};

fn name_params(name: &str) -> HashMap<String, String> {
    HashMap::from([("name".to_string(), name.to_string())])
}

async fn setup() -> (sqlx::SqlitePool, Arc<MokaCacheStore>, LocationDirectory) {
    let pool = setup_test_db().await;
    let cache = Arc::new(MokaCacheStore::new());
    let repo = Arc::new(SqliteLocationRepository::new(pool.clone()));
    let directory = LocationDirectory::new(repo, cache.clone());
    (pool, cache, directory)
}

#[tokio::test]
async fn get_all_reflects_every_committed_save() {
    let (pool, _cache, directory) = setup().await;

    directory.save(&name_params("Coruscant")).await.unwrap();
    let first = directory.get_all().await.unwrap();
    assert_eq!(first.len(), 1);

    directory.save(&name_params("Alderaan")).await.unwrap();
    let second = directory.get_all().await.unwrap();
    let names: Vec<_> = second.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Alderaan", "Coruscant"]);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn save_invalidates_cache_until_next_read() {
    let (pool, cache, directory) = setup().await;

    directory.save(&name_params("Tatooine")).await.unwrap();
    directory.get_all().await.unwrap();
    assert!(cache.get(ALL_LOCATIONS_CACHE_KEY).await.unwrap().is_some());

    directory.save(&name_params("Dagobah")).await.unwrap();
    assert!(cache.get(ALL_LOCATIONS_CACHE_KEY).await.unwrap().is_none());

    // The next read repopulates.
    directory.get_all().await.unwrap();
    assert!(cache.get(ALL_LOCATIONS_CACHE_KEY).await.unwrap().is_some());

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn delete_invalidates_cache() {
    let (pool, cache, directory) = setup().await;

    directory.save(&name_params("Hoth")).await.unwrap();
    directory.get_all().await.unwrap();
    assert!(cache.get(ALL_LOCATIONS_CACHE_KEY).await.unwrap().is_some());

    directory.delete("Hoth").await.unwrap();
    assert!(cache.get(ALL_LOCATIONS_CACHE_KEY).await.unwrap().is_none());
    assert!(directory.get_all().await.unwrap().is_empty());

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn saving_twice_keeps_one_location() {
    let (pool, _cache, directory) = setup().await;

    directory.save(&name_params("Tatooine")).await.unwrap();
    directory.save(&name_params("Tatooine")).await.unwrap();

    let all = directory.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Tatooine");

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn resave_overwrites_parent() {
    let (pool, _cache, directory) = setup().await;

    directory.save(&name_params("Mos Eisley")).await.unwrap();

    let mut params = name_params("Mos Eisley");
    params.insert("parent".to_string(), "Tatooine".to_string());
    directory.save(&params).await.unwrap();

    let all = directory.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].parent_location.as_deref(), Some("Tatooine"));

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn parent_existence_is_not_validated() {
    let (pool, _cache, directory) = setup().await;

    let mut params = name_params("Cloud City");
    params.insert("parent".to_string(), "Bespin".to_string());
    let saved = directory.save(&params).await.unwrap();
    assert_eq!(saved.parent_location.as_deref(), Some("Bespin"));

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn empty_name_is_a_validation_error() {
    let (pool, _cache, directory) = setup().await;

    let err = directory.save(&name_params("")).await.unwrap_err();
    assert!(matches!(err, DomainError::ValidationFailed(_)));

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn delete_of_unknown_location_is_not_found() {
    let (pool, _cache, directory) = setup().await;

    let err = directory.delete("Alderaan").await.unwrap_err();
    assert!(matches!(err, DomainError::LocationNotFound(_)));

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn unavailable_cache_degrades_to_repository_scan() {
    let pool = setup_test_db().await;
    let repo = Arc::new(SqliteLocationRepository::new(pool.clone()));
    let directory = LocationDirectory::new(repo, Arc::new(UnavailableCacheStore));

    directory.save(&name_params("Naboo")).await.unwrap();
    let all = directory.get_all().await.unwrap();
    assert_eq!(all.len(), 1);

    // Repeated reads keep working off the repository.
    let again = directory.get_all().await.unwrap();
    assert_eq!(again, all);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn corrupt_cache_payload_is_treated_as_a_miss() {
    let (pool, cache, directory) = setup().await;

    directory.save(&name_params("Kamino")).await.unwrap();
    cache
        .set(ALL_LOCATIONS_CACHE_KEY, b"not json".to_vec(), None)
        .await
        .unwrap();

    let all = directory.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Kamino");

    teardown_test_db(pool).await;
}
