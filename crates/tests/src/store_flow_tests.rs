//! Backend responses flowing through the client-side store, filter and
//! reservation state machine, the same path the dashboards take.

use axum::http::StatusCode;
use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared_types::{
    search_spots, DateWindow, ReservationFlow, ReservationRequest, SortOption, SpotFilter,
    SpotStore,
};

use crate::common::{self, MockBackend, Reply};

async fn loaded_store(mock: &MockBackend) -> SpotStore {
    mock.reply_to_spots(Reply::json(StatusCode::OK, common::scenario_spots()))
        .await;
    SpotStore::new(mock.client().list_spots().await.expect("listing should succeed"))
}

#[tokio::test]
async fn test_scenario_stats_sort_and_search() {
    let mock = MockBackend::start().await;
    let store = loaded_store(&mock).await;

    let stats = store.stats();
    assert_eq!((stats.available, stats.reserved, stats.total), (1, 1, 2));

    let filter = SpotFilter {
        sort: SortOption::Availability,
        ..SpotFilter::default()
    };
    let ids: Vec<i64> = filter
        .apply(store.spots(), store.bookings())
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![1, 2]);

    let found: Vec<i64> = search_spots(store.spots(), "murray")
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(found, vec![2]);
    assert_eq!(store.first_id(), Some(1));
}

#[tokio::test]
async fn test_duplicate_ids_from_backend_are_dropped() {
    let mock = MockBackend::start().await;
    mock.reply_to_spots(Reply::json(
        StatusCode::OK,
        serde_json::json!([
            common::spot_json(5, "100 Block of Forbes Ave", true, 2.0),
            common::spot_json(5, "900 Block of Forbes Ave", false, 9.0),
        ]),
    ))
    .await;

    let store = SpotStore::new(mock.client().list_spots().await.unwrap());

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(5).map(|s| s.price_per_hour), Some(2.0));
}

#[tokio::test]
async fn test_successful_reservation_flips_only_that_spot() {
    let mock = MockBackend::start().await;
    let mut store = loaded_store(&mock).await;
    let mut flow = ReservationFlow::default();

    let spot = store.get(1).cloned().unwrap();
    assert!(flow.open(spot));
    let spot = flow.begin_submit().expect("dialog should be confirming");
    assert!(!flow.can_reserve());

    let start = Utc.with_ymd_and_hms(2026, 5, 4, 9, 0, 0).unwrap();
    let request = ReservationRequest::starting_at(1, spot.id, spot.price_per_hour, start, 1);
    mock.client().reserve(&request).await.expect("reservation should succeed");
    assert!(store.apply_booking(request.booking()));
    assert!(flow.succeed());

    assert!(flow.can_reserve());
    assert!(!store.get(1).unwrap().is_available);
    assert!(!store.get(2).unwrap().is_available);
    assert_eq!(store.stats().available, 0);
    assert_eq!(store.bookings().len(), 1);

    assert_eq!(free_on(&store, 4), Vec::<i64>::new());
    assert_eq!(free_on(&store, 5), vec![1]);
}

fn free_on(store: &SpotStore, may_day: u32) -> Vec<i64> {
    let day = NaiveDate::from_ymd_opt(2026, 5, may_day).unwrap();
    let filter = SpotFilter {
        window: DateWindow::new(day, day),
        ..SpotFilter::default()
    };
    filter
        .apply(store.spots(), store.bookings())
        .iter()
        .map(|s| s.id)
        .collect()
}

#[tokio::test]
async fn test_date_window_on_fresh_listing_hides_reserved_spots() {
    let mock = MockBackend::start().await;
    let store = loaded_store(&mock).await;

    assert!(store.bookings().is_empty());
    assert_eq!(free_on(&store, 4), vec![1]);
}

#[tokio::test]
async fn test_failed_reservation_leaves_store_untouched() {
    let mock = MockBackend::start().await;
    mock.reply_to_reserve(Reply::json(
        StatusCode::CONFLICT,
        serde_json::json!({ "error": "Spot is already reserved" }),
    ))
    .await;
    let store = loaded_store(&mock).await;
    let before = store.clone();
    let mut flow = ReservationFlow::default();

    flow.open(store.get(1).cloned().unwrap());
    let spot = flow.begin_submit().unwrap();
    let request =
        ReservationRequest::starting_at(1, spot.id, spot.price_per_hour, Utc::now(), 1);
    let err = mock.client().reserve(&request).await.unwrap_err();
    assert!(flow.fail(err.message));

    assert_eq!(store, before);
    assert!(flow.dialog_open());
    assert!(!flow.is_submitting());
    assert_eq!(flow.error(), Some("Spot is already reserved"));
}
