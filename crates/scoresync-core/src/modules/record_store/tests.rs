use super::*;

fn record(name: &str, score: u32, created_at: i64) -> NewScoreRecord {
    NewScoreRecord {
        player_name: name.to_string(),
        score,
        difficulty: Difficulty::Normal,
        created_at,
    }
}

#[test]
fn test_insert_assigns_increasing_ids_and_starts_unsynced() {
    let store = RecordStore::open_in_memory().unwrap();

    let first = store.insert(&record("a", 10, 1)).unwrap();
    let second = store.insert(&record("b", 20, 2)).unwrap();
    assert!(second > first);

    let stored = store.get(first).unwrap().unwrap();
    assert_eq!(stored.player_name, "a");
    assert_eq!(stored.score, 10);
    assert_eq!(stored.difficulty, Difficulty::Normal);
    assert!(!stored.synced);
}

#[test]
fn test_mark_synced_is_idempotent() {
    let store = RecordStore::open_in_memory().unwrap();
    let id = store.insert(&record("a", 10, 1)).unwrap();

    assert!(store.mark_synced(id).unwrap());
    let after_first = store.get(id).unwrap();
    assert!(!store.mark_synced(id).unwrap());
    let after_second = store.get(id).unwrap();

    assert_eq!(after_first, after_second);
    assert!(after_second.unwrap().synced);
}

#[test]
fn test_mark_synced_on_missing_id_is_not_a_fault() {
    let store = RecordStore::open_in_memory().unwrap();
    assert!(!store.mark_synced(9_999).unwrap());
}

#[test]
fn test_unsynced_records_follow_insertion_order() {
    let store = RecordStore::open_in_memory().unwrap();
    let first = store.insert(&record("first", 1, 300)).unwrap();
    // Clock moved backwards before the second game.
    let second = store.insert(&record("second", 2, 100)).unwrap();
    let synced = store.insert(&record("done", 3, 200)).unwrap();
    store.mark_synced(synced).unwrap();

    let ids: Vec<i64> = store.unsynced_records().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(store.unsynced_count().unwrap(), 2);
}

#[test]
fn test_unsynced_snapshot_ignores_later_inserts() {
    let store = RecordStore::open_in_memory().unwrap();
    store.insert(&record("a", 1, 1)).unwrap();

    let snapshot = store.unsynced_records().unwrap();
    store.insert(&record("b", 2, 2)).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.unsynced_records().unwrap().len(), 2);
}

#[test]
fn test_max_score_tracks_highest_and_empty_is_none() {
    let store = RecordStore::open_in_memory().unwrap();
    assert_eq!(store.max_score().unwrap(), None);

    store.insert(&record("a", 10, 1)).unwrap();
    store.insert(&record("b", 25, 2)).unwrap();
    store.insert(&record("c", 5, 3)).unwrap();
    assert_eq!(store.max_score().unwrap(), Some(25));
}

#[test]
fn test_clear_all_empties_store_without_reusing_ids() {
    let store = RecordStore::open_in_memory().unwrap();
    store.insert(&record("a", 10, 1)).unwrap();
    let last = store.insert(&record("b", 20, 2)).unwrap();

    assert_eq!(store.clear_all().unwrap(), 2);
    assert_eq!(store.max_score().unwrap(), None);
    assert!(store.unsynced_records().unwrap().is_empty());

    let next = store.insert(&record("c", 1, 3)).unwrap();
    assert!(next > last);
}

#[test]
fn test_top_local_orders_by_score_then_recency() {
    let store = RecordStore::open_in_memory().unwrap();
    let old_tie = store.insert(&record("old", 50, 1)).unwrap();
    let best = store.insert(&record("best", 90, 2)).unwrap();
    let new_tie = store.insert(&record("new", 50, 3)).unwrap();
    store.insert(&record("low", 1, 4)).unwrap();

    let ids: Vec<i64> = store.top_local(3).unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![best, new_tie, old_tie]);
}

#[test]
fn test_records_survive_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("scores.db");

    let id = {
        let store = RecordStore::open(&db_path).unwrap();
        let id = store.insert(&record("a", 42, 1)).unwrap();
        store.insert(&record("b", 7, 2)).unwrap();
        store.mark_synced(id).unwrap();
        id
    };

    let reopened = RecordStore::open(&db_path).unwrap();
    assert_eq!(reopened.max_score().unwrap(), Some(42));
    assert!(reopened.get(id).unwrap().unwrap().synced);
    assert_eq!(reopened.unsynced_count().unwrap(), 1);
}

#[test]
fn test_schema_upgrades_legacy_table() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("legacy.db");

    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE high_scores (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player_name TEXT NOT NULL,
                score INTEGER NOT NULL,
                difficulty TEXT NOT NULL
            );
            INSERT INTO high_scores (player_name, score, difficulty) VALUES ('old', 12, 'EASY');",
        )
        .unwrap();
    }

    let store = RecordStore::open(&db_path).unwrap();
    let legacy = store.unsynced_records().unwrap();
    assert_eq!(legacy.len(), 1);
    assert_eq!(legacy[0].difficulty, Difficulty::Easy);
    assert!(!legacy[0].synced);
}

#[tokio::test]
async fn test_async_wrappers_round_through_blocking_pool() {
    let store = RecordStore::open_in_memory().unwrap();

    let id = store.insert_async(record("a", 3, 1)).await.unwrap();
    assert!(store.mark_synced_async(id).await.unwrap());
    assert_eq!(store.max_score_async().await.unwrap(), Some(3));
    assert_eq!(store.unsynced_count_async().await.unwrap(), 0);
    assert_eq!(store.clear_all_async().await.unwrap(), 1);
}
