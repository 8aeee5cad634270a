mod helpers;

use chrono::NaiveDate;
use futures::TryStreamExt;

use starport::adapters::sqlite::SqliteTripRepository;
use starport::domain::models::TripSaveParams;
use starport::domain::ports::TripRepository;

use helpers::database::{setup_test_db, teardown_test_db};

fn save_params(origin: &str, destiny: &str, date: &str) -> TripSaveParams {
    TripSaveParams {
        description: format!("{origin} to {destiny}"),
        origin: origin.to_string(),
        destiny: destiny.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        available_seats: 3,
        pilot_name: None,
        price: 100,
    }
}

#[tokio::test]
async fn insert_assigns_sequential_ids() {
    let pool = setup_test_db().await;
    let repo = SqliteTripRepository::new(pool.clone());

    let first = repo
        .insert(&save_params("Coruscant", "Alderaan", "2016-05-09"))
        .await
        .unwrap();
    let second = repo
        .insert(&save_params("Alderaan", "Coruscant", "2016-05-10"))
        .await
        .unwrap();

    assert!(second.id > first.id);
    assert_eq!(first.booked_seats, 0);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn get_round_trips_all_fields() {
    let pool = setup_test_db().await;
    let repo = SqliteTripRepository::new(pool.clone());

    let mut params = save_params("Coruscant", "Alderaan", "2016-05-09");
    params.pilot_name = Some("Han".to_string());
    let inserted = repo.insert(&params).await.unwrap();

    let fetched = repo.get(inserted.id).await.unwrap().unwrap();
    assert_eq!(fetched, inserted);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn get_unknown_id_is_none() {
    let pool = setup_test_db().await;
    let repo = SqliteTripRepository::new(pool.clone());

    assert!(repo.get(999).await.unwrap().is_none());

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn find_exact_matches_all_three_fields() {
    let pool = setup_test_db().await;
    let repo = SqliteTripRepository::new(pool.clone());

    repo.insert(&save_params("Coruscant", "Alderaan", "2016-05-09"))
        .await
        .unwrap();
    repo.insert(&save_params("Coruscant", "Alderaan", "2016-05-10"))
        .await
        .unwrap();
    repo.insert(&save_params("Coruscant", "Naboo", "2016-05-09"))
        .await
        .unwrap();
    repo.insert(&save_params("Naboo", "Alderaan", "2016-05-09"))
        .await
        .unwrap();

    let date = NaiveDate::from_ymd_opt(2016, 5, 9).unwrap();
    let matches = repo
        .find_exact("Coruscant", "Alderaan", date, 10)
        .await
        .unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].origin, "Coruscant");
    assert_eq!(matches[0].destiny, "Alderaan");
    assert_eq!(matches[0].date, date);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn list_recent_orders_by_date_then_id_descending() {
    let pool = setup_test_db().await;
    let repo = SqliteTripRepository::new(pool.clone());

    let old = repo
        .insert(&save_params("Hoth", "Dagobah", "2016-05-01"))
        .await
        .unwrap();
    let tied_first = repo
        .insert(&save_params("Coruscant", "Alderaan", "2016-05-09"))
        .await
        .unwrap();
    let tied_second = repo
        .insert(&save_params("Naboo", "Alderaan", "2016-05-09"))
        .await
        .unwrap();

    let recent = repo.list_recent(10).await.unwrap();
    let ids: Vec<_> = recent.iter().map(|t| t.id).collect();
    // Same date: higher id wins the tie-break.
    assert_eq!(ids, vec![tied_second.id, tied_first.id, old.id]);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn list_recent_honors_limit() {
    let pool = setup_test_db().await;
    let repo = SqliteTripRepository::new(pool.clone());

    for day in 1..=5 {
        repo.insert(&save_params("Hoth", "Dagobah", &format!("2016-05-0{day}")))
            .await
            .unwrap();
    }

    let recent = repo.list_recent(2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].date, NaiveDate::from_ymd_opt(2016, 5, 5).unwrap());

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn scan_since_is_strictly_after_the_cutoff() {
    let pool = setup_test_db().await;
    let repo = SqliteTripRepository::new(pool.clone());

    repo.insert(&save_params("Hoth", "Dagobah", "2016-05-04"))
        .await
        .unwrap();
    repo.insert(&save_params("Hoth", "Dagobah", "2016-05-05"))
        .await
        .unwrap();
    repo.insert(&save_params("Hoth", "Dagobah", "2016-05-06"))
        .await
        .unwrap();

    let cutoff = NaiveDate::from_ymd_opt(2016, 5, 5).unwrap();
    let scanned: Vec<_> = repo.scan_since(cutoff).try_collect().await.unwrap();

    assert_eq!(scanned.len(), 1);
    assert_eq!(scanned[0].date, NaiveDate::from_ymd_opt(2016, 5, 6).unwrap());

    teardown_test_db(pool).await;
}
