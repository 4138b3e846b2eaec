//! Profile and history store integration tests
//!
//! Every case runs against both the SQLite store (in-memory database) and
//! the in-memory store.
//!
//! Covers:
//! - Latest-version profile loading
//! - Unknown profile ids
//! - History ordering, limits and per-profile filtering

mod helpers;

use chrono::Duration;
use drape_common::db::init_memory_database;

use drape_engine::analyze;
use drape_engine::models::{ProfileId, RecommendationBundle};
use drape_engine::store::{
    HistoryStore, MemoryHistoryStore, MemoryProfileStore, ProfileStore, SqliteHistoryStore,
    SqliteProfileStore,
};
use helpers::{clean_casual_outfit, fixed_time, profile, warm_profile};

async fn sqlite_stores() -> (SqliteProfileStore, SqliteHistoryStore) {
    let pool = init_memory_database().await.unwrap();
    (SqliteProfileStore::new(pool.clone()), SqliteHistoryStore::new(pool))
}

fn bundle_at(id: &str, minutes: i64) -> RecommendationBundle {
    let mut bundle = analyze(&warm_profile(), &clean_casual_outfit(), None).unwrap();
    bundle.profile_id = ProfileId::new(id);
    bundle.created_at = fixed_time() + Duration::minutes(minutes);
    bundle
}

async fn check_latest_version_wins(store: &dyn ProfileStore) {
    let id = ProfileId::new("alice");
    let mut v1 = warm_profile();
    v1.profile_id = id.clone();
    let mut v2 = profile("cool", "oval", "round");
    v2.profile_id = id.clone();
    v2.version = 2;

    // saved out of order on purpose
    store.save(&v2).await.unwrap();
    store.save(&v1).await.unwrap();

    let loaded = store.load(&id).await.unwrap().expect("profile should load");
    assert_eq!(loaded, v2);
}

async fn check_same_version_is_replaced(store: &dyn ProfileStore) {
    let mut first = warm_profile();
    store.save(&first).await.unwrap();
    first.photos_used = 7;
    store.save(&first).await.unwrap();

    let loaded = store.load(&ProfileId::default()).await.unwrap().unwrap();
    assert_eq!(loaded.photos_used, 7);
}

async fn check_unknown_profile(store: &dyn ProfileStore) {
    store.save(&warm_profile()).await.unwrap();
    assert!(store.load(&ProfileId::new("nobody")).await.unwrap().is_none());
}

async fn check_history_order(store: &dyn HistoryStore) {
    let older = bundle_at("alice", 0);
    let newest = bundle_at("alice", 30);
    let middle = bundle_at("alice", 10);
    let other = bundle_at("bob", 60);
    for bundle in [&older, &newest, &middle, &other] {
        store.append(bundle).await.unwrap();
    }

    let all = store.list(&ProfileId::new("alice"), 10).await.unwrap();
    let ids: Vec<_> = all.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, older.id]);

    let limited = store.list(&ProfileId::new("alice"), 2).await.unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].id, newest.id);

    assert!(store.list(&ProfileId::new("carol"), 10).await.unwrap().is_empty());
}

async fn check_history_roundtrip(store: &dyn HistoryStore) {
    let bundle = bundle_at("alice", 0);
    store.append(&bundle).await.unwrap();

    let stored = store.list(&bundle.profile_id, 1).await.unwrap().remove(0);
    assert_eq!(stored.id, bundle.id);
    assert_eq!(stored.created_at, bundle.created_at);
    assert_eq!(stored.occasion, bundle.occasion);
    assert_eq!(stored.remarks, bundle.remarks);
    assert_eq!(stored.palette, bundle.palette);
    assert_eq!(stored.scores.overall, 10.0);
}

#[tokio::test]
async fn test_sqlite_profile_store() {
    let (profiles, _) = sqlite_stores().await;
    check_latest_version_wins(&profiles).await;

    let (profiles, _) = sqlite_stores().await;
    check_same_version_is_replaced(&profiles).await;

    let (profiles, _) = sqlite_stores().await;
    check_unknown_profile(&profiles).await;
}

#[tokio::test]
async fn test_memory_profile_store() {
    check_latest_version_wins(&MemoryProfileStore::new()).await;
    check_same_version_is_replaced(&MemoryProfileStore::new()).await;
    check_unknown_profile(&MemoryProfileStore::new()).await;
}

#[tokio::test]
async fn test_memory_profile_store_keeps_versions() {
    let store = MemoryProfileStore::new();
    let mut v2 = warm_profile();
    v2.version = 2;
    store.save(&warm_profile()).await.unwrap();
    store.save(&v2).await.unwrap();

    assert_eq!(store.version_count(&ProfileId::default()).await, 2);
}

#[tokio::test]
async fn test_sqlite_history_store() {
    let (_, history) = sqlite_stores().await;
    check_history_order(&history).await;

    let (_, history) = sqlite_stores().await;
    check_history_roundtrip(&history).await;
}

#[tokio::test]
async fn test_memory_history_store() {
    check_history_order(&MemoryHistoryStore::new()).await;
    check_history_roundtrip(&MemoryHistoryStore::new()).await;
}

#[tokio::test]
async fn test_equal_timestamps_list_latest_append_first() {
    let first = bundle_at("alice", 0);
    let second = bundle_at("alice", 0);

    let (_, sqlite) = sqlite_stores().await;
    let memory = MemoryHistoryStore::new();
    let stores: [&dyn HistoryStore; 2] = [&sqlite, &memory];
    for store in stores {
        store.append(&first).await.unwrap();
        store.append(&second).await.unwrap();
        let listed = store.list(&ProfileId::new("alice"), 10).await.unwrap();
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }
}
