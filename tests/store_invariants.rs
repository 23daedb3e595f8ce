//! Song Store Invariant Tests
//!
//! - Ids are unique and increase with insertion order
//! - Listing is newest first
//! - Updates touch only title and chords
//! - Updates and deletes of missing ids change nothing
//! - Schema creation is idempotent

use chordbook::store::{Song, SongStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

async fn setup_store() -> (TempDir, SongStore) {
    let tmp = TempDir::new().unwrap();
    let store = SongStore::open(&tmp.path().join("songs.db"), 4)
        .await
        .unwrap();
    (tmp, store)
}

// =============================================================================
// Ordering Tests
// =============================================================================

/// N inserts come back in descending id order.
#[tokio::test]
async fn test_list_orders_by_id_descending() {
    let (_tmp, store) = setup_store().await;

    let mut ids = Vec::new();
    for i in 0..10 {
        ids.push(store.insert(&format!("Song {}", i), "C").await.unwrap());
    }

    let listed: Vec<i64> = store.list_all().await.unwrap().iter().map(|s| s.id).collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

/// Ids keep increasing even after the newest row is deleted.
#[tokio::test]
async fn test_ids_are_never_reused() {
    let (_tmp, store) = setup_store().await;

    let first = store.insert("First", "C").await.unwrap();
    let second = store.insert("Second", "D").await.unwrap();
    assert!(second > first);

    store.delete_by_id(second).await.unwrap();
    let third = store.insert("Third", "E").await.unwrap();
    assert!(third > second);
}

// =============================================================================
// Update Tests
// =============================================================================

/// Update rewrites title and chords only.
#[tokio::test]
async fn test_update_preserves_id_and_created_at() {
    let (_tmp, store) = setup_store().await;
    let id = store.insert("A", "C G").await.unwrap();
    let before = store.get(id).await.unwrap().unwrap();

    assert!(store.update(id, "B", "D").await.unwrap());

    let after = store.get(id).await.unwrap().unwrap();
    assert_eq!(
        after,
        Song {
            id,
            title: "B".to_string(),
            chords: "D".to_string(),
            created_at: before.created_at,
        }
    );
}

/// Updating a missing id neither creates nor alters rows.
#[tokio::test]
async fn test_update_missing_id_changes_nothing() {
    let (_tmp, store) = setup_store().await;
    let id = store.insert("Existing", "Am").await.unwrap();
    let before = store.list_all().await.unwrap();

    assert!(!store.update(id + 100, "Ghost", "E").await.unwrap());

    assert_eq!(store.list_all().await.unwrap(), before);
}

// =============================================================================
// Delete Tests
// =============================================================================

/// Delete removes exactly one row; a second delete is a no-op.
#[tokio::test]
async fn test_delete_removes_exactly_one_row() {
    let (_tmp, store) = setup_store().await;
    let a = store.insert("A", "C").await.unwrap();
    let b = store.insert("B", "D").await.unwrap();
    let c = store.insert("C", "E").await.unwrap();

    assert!(store.delete_by_id(b).await.unwrap());
    assert!(!store.delete_by_id(b).await.unwrap());

    let ids: Vec<i64> = store.list_all().await.unwrap().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![c, a]);
}

// =============================================================================
// Schema Tests
// =============================================================================

/// Ensuring the schema on a populated store keeps its rows.
#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let (_tmp, store) = setup_store().await;
    store.insert("Survivor", "G C D").await.unwrap();

    store.ensure_schema().await.unwrap();
    store.ensure_schema().await.unwrap();

    assert_eq!(store.count().await.unwrap(), 1);
}

/// Text is stored verbatim, including newlines and unicode.
#[tokio::test]
async fn test_chords_round_trip_verbatim() {
    let (_tmp, store) = setup_store().await;
    let chords = "[Verse]\nEm7  G   Dsus4  A7sus4\n\n[Chorus]\nC  D  Em | F♯m";

    let id = store.insert("Multi-line", chords).await.unwrap();
    assert_eq!(store.get(id).await.unwrap().unwrap().chords, chords);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

/// Concurrent inserts through the pool all land with distinct ids.
#[tokio::test]
async fn test_concurrent_inserts_get_distinct_ids() {
    let (_tmp, store) = setup_store().await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.insert(&format!("Parallel {}", i), "A").await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
    assert_eq!(store.count().await.unwrap(), 8);
}
