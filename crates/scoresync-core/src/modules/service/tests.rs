use super::*;
use crate::error::AppError;
use crate::modules::record_store::StoreError;
use crate::test_helpers::{entry, wait_until, FakeLeaderboard};

fn setup() -> (RecordStore, Arc<FakeLeaderboard>, ScoreService) {
    let store = RecordStore::open_in_memory().unwrap();
    let api = FakeLeaderboard::new();
    let service = ScoreService::new(store.clone(), api.clone(), &ScoreSyncConfig::default());
    (store, api, service)
}

async fn all_synced(store: &RecordStore) -> bool {
    let store = store.clone();
    wait_until(move || {
        let store = store.clone();
        async move { store.unsynced_count().map(|n| n == 0).unwrap_or(false) }
    })
    .await
}

#[tokio::test]
async fn test_best_local_score_tracks_running_maximum() {
    let (_store, api, service) = setup();
    api.set_offline(true);
    assert_eq!(service.best_local_score().await.unwrap(), 0);

    let mut best = 0;
    for score in [3_i64, 17, 9, 17, 40, 2] {
        service.record_result("p", score, Difficulty::Normal).await.unwrap();
        best = best.max(score);
        assert_eq!(i64::from(service.best_local_score().await.unwrap()), best);
    }
}

#[tokio::test]
async fn test_non_positive_scores_are_not_recorded() {
    let (store, api, service) = setup();
    api.set_offline(true);

    assert_eq!(service.record_result("p", 0, Difficulty::Easy).await.unwrap(), None);
    assert_eq!(service.record_result("p", -5, Difficulty::Easy).await.unwrap(), None);

    assert_eq!(store.unsynced_count().unwrap(), 0);
    assert_eq!(service.best_local_score().await.unwrap(), 0);
}

#[tokio::test]
async fn test_blank_name_gets_placeholder() {
    let (store, api, service) = setup();
    api.set_offline(true);

    let id = service.record_result("   ", 5, Difficulty::Hard).await.unwrap().unwrap();
    let named = service.record_result("  Ada ", 6, Difficulty::Hard).await.unwrap().unwrap();

    assert_eq!(store.get(id).unwrap().unwrap().player_name, "Anonymous");
    assert_eq!(store.get(named).unwrap().unwrap().player_name, "Ada");
}

#[tokio::test]
async fn test_record_result_pushes_in_background() {
    let (store, api, service) = setup();

    let id = service.record_result("Ada", 12, Difficulty::Hard).await.unwrap().unwrap();

    assert!(all_synced(&store).await);
    assert!(store.get(id).unwrap().unwrap().synced);
    assert_eq!(api.submitted_scores(), vec![12]);
}

#[tokio::test]
async fn test_offline_results_sync_on_next_session() {
    let (store, api, service) = setup();
    api.set_offline(true);
    service.record_result("Ada", 12, Difficulty::Hard).await.unwrap();
    service.record_result("Ada", 30, Difficulty::Hard).await.unwrap();
    service.sync_now().await.unwrap();
    assert_eq!(service.pending_sync_count().await.unwrap(), 2);

    api.set_offline(false);
    assert_eq!(service.start_session().await.unwrap(), 30);

    assert!(all_synced(&store).await);
}

#[tokio::test]
async fn test_reset_clears_local_only() {
    let (store, api, service) = setup();
    api.set_leaderboard(vec![entry(1, "remote", 99)]);
    service.record_result("Ada", 12, Difficulty::Hard).await.unwrap();
    assert!(all_synced(&store).await);

    assert_eq!(service.reset_stats().await.unwrap(), 1);

    assert_eq!(service.best_local_score().await.unwrap(), 0);
    assert!(store.unsynced_records().unwrap().is_empty());
    let view = service.refresh_leaderboard().await;
    assert_eq!(view.entries()[0].player_name, "remote");
}

#[tokio::test]
async fn test_storage_faults_surface_from_record_and_reset() {
    let (store, api, service) = setup();
    api.set_offline(true);
    store.execute_raw("DROP TABLE high_scores").unwrap();

    let err = service.record_result("Ada", 12, Difficulty::Hard).await.unwrap_err();
    assert!(matches!(err, AppError::Storage(StoreError::Database(_))));

    let err = service.reset_stats().await.unwrap_err();
    assert!(matches!(err, AppError::Storage(StoreError::Database(_))));

    assert!(matches!(service.best_local_score().await, Err(AppError::Storage(_))));
    assert!(api.submitted_scores().is_empty());
}

#[tokio::test]
async fn test_leaderboard_view_does_not_fetch() {
    let (_store, api, service) = setup();
    api.set_leaderboard(vec![entry(1, "a", 5)]);

    assert_eq!(service.leaderboard_view(), LeaderboardState::Empty);
    assert_eq!(api.fetch_calls(), 0);

    let refreshed = service.refresh_leaderboard().await;
    assert_eq!(service.leaderboard_view(), refreshed);
    assert_eq!(api.fetch_calls(), 1);
}

#[tokio::test]
async fn test_best_score_is_local_even_when_remote_is_higher() {
    let (_store, api, service) = setup();
    api.set_leaderboard(vec![entry(1, "champ", 1_000)]);
    service.record_result("me", 7, Difficulty::Normal).await.unwrap();
    service.refresh_leaderboard().await;

    assert_eq!(service.best_local_score().await.unwrap(), 7);
}

#[tokio::test]
async fn test_request_refresh_shows_loading_immediately() {
    let (_store, api, service) = setup();
    let gate = api.gate_fetches();
    let mut rx = service.subscribe_leaderboard();

    assert!(service.request_leaderboard_refresh());
    assert!(service.leaderboard_view().is_loading());
    assert!(!service.request_leaderboard_refresh());

    gate.notify_one();
    let settled = rx.wait_for(|s| !s.is_loading()).await.unwrap().clone();
    assert!(matches!(settled, LeaderboardState::Ready(_)));
    assert_eq!(api.fetch_calls(), 1);
}

#[tokio::test]
async fn test_local_top_lists_best_records() {
    let (_store, api, service) = setup();
    api.set_offline(true);
    for score in [5_i64, 50, 20] {
        service.record_result("p", score, Difficulty::Easy).await.unwrap();
    }

    let top: Vec<u32> = service.local_top(2).await.unwrap().iter().map(|r| r.score).collect();
    assert_eq!(top, vec![50, 20]);
}
