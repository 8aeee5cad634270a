mod helpers;

use std::collections::HashMap;

use chrono::Utc;

use starport::domain::models::Config;
use starport::infrastructure::setup::AppContext;
use starport::services::DEFAULT_SEARCH_LIMIT;

use helpers::database::{setup_test_db, teardown_test_db};

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Full walkthrough against wired services: register locations, book
/// trips, search by route, then roll up and read the snapshot back.
#[tokio::test]
async fn directory_lifecycle_end_to_end() {
    let pool = setup_test_db().await;
    let ctx = AppContext::wire(pool.clone(), &Config::default());

    // Register the two endpoints of the route.
    ctx.locations
        .save(&params(&[("name", "Coruscant")]))
        .await
        .unwrap();
    ctx.locations
        .save(&params(&[("name", "Alderaan")]))
        .await
        .unwrap();

    let all = ctx.locations.get_all().await.unwrap();
    let names: Vec<_> = all.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Alderaan", "Coruscant"]);

    // Book trips on the route, dated inside the rollup window.
    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
    for _ in 0..2 {
        ctx.trips
            .save(&params(&[
                ("description", "Core worlds run"),
                ("origin", "Coruscant"),
                ("destiny", "Alderaan"),
                ("date", &today),
                ("seats", "4"),
                ("price", "1200"),
            ]))
            .await
            .unwrap();
    }
    ctx.trips
        .save(&params(&[
            ("description", "Return leg"),
            ("origin", "Alderaan"),
            ("destiny", "Coruscant"),
            ("date", &today),
        ]))
        .await
        .unwrap();

    // Route search finds the two outbound trips and echoes the filter.
    let (found, echo) = ctx
        .trips
        .query_filtered(
            &params(&[
                ("origin", "Coruscant"),
                ("destiny", "Alderaan"),
                ("date", &today),
            ]),
            DEFAULT_SEARCH_LIMIT,
        )
        .await
        .unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(echo.origin.as_deref(), Some("Coruscant"));
    assert_eq!(echo.destiny.as_deref(), Some("Alderaan"));

    // Unfiltered listing returns everything, newest first.
    let (recent, _) = ctx
        .trips
        .query_filtered(&HashMap::new(), DEFAULT_SEARCH_LIMIT)
        .await
        .unwrap();
    assert_eq!(recent.len(), 3);

    // Rollup sees two departures from Coruscant and one from Alderaan.
    assert!(ctx.rollup.current_snapshot().await.unwrap().is_none());
    ctx.rollup.run().await.unwrap();

    let snapshot = ctx.rollup.current_snapshot().await.unwrap().unwrap();
    assert_eq!(snapshot.origins, vec!["Coruscant", "Alderaan"]);
    assert_eq!(snapshot.destinations, vec!["Alderaan", "Coruscant"]);

    // Removing a location never touches the trips that referenced it.
    ctx.locations.delete("Alderaan").await.unwrap();
    assert_eq!(ctx.locations.get_all().await.unwrap().len(), 1);
    let (still_there, _) = ctx
        .trips
        .query_filtered(&HashMap::new(), DEFAULT_SEARCH_LIMIT)
        .await
        .unwrap();
    assert_eq!(still_there.len(), 3);

    teardown_test_db(pool).await;
}
