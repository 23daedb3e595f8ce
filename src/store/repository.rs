//! Song store - main entry point
//! Delegates to ops for the individual statements

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::{debug, info};

use super::errors::StoreResult;
use super::models::Song;
use super::{ops, schema};

/// Handle to the song database
///
/// Cloning is cheap and shares the underlying pool. Built once at process
/// start and handed to the HTTP layer; no connection is held between calls.
#[derive(Debug, Clone)]
pub struct SongStore {
    pool: Pool<Sqlite>,
    path: PathBuf,
}

impl SongStore {
    /// Open (creating if needed) the database at `db_path` and ensure the
    /// schema exists.
    pub async fn open(db_path: &Path, max_connections: u32) -> StoreResult<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self {
            pool,
            path: db_path.to_path_buf(),
        };
        store.ensure_schema().await?;

        info!(path = %db_path.display(), max_connections, "song store opened");
        Ok(store)
    }

    /// Location of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the `songs` table if absent. Safe to call repeatedly.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        schema::ensure_schema(&self.pool).await
    }

    /// All songs, most recently created first
    pub async fn list_all(&self) -> StoreResult<Vec<Song>> {
        ops::list_songs(&self.pool).await
    }

    pub async fn get(&self, id: i64) -> StoreResult<Option<Song>> {
        ops::get_song(&self.pool, id).await
    }

    /// Store a new song stamped with the current time, returning its id
    pub async fn insert(&self, title: &str, chords: &str) -> StoreResult<i64> {
        let id = ops::insert_song(&self.pool, title, chords).await?;
        debug!(id, "song inserted");
        Ok(id)
    }

    /// Replace title and chords of an existing song.
    ///
    /// Returns `false` and changes nothing when `id` does not exist.
    pub async fn update(&self, id: i64, title: &str, chords: &str) -> StoreResult<bool> {
        let updated = ops::update_song(&self.pool, id, title, chords).await?;
        debug!(id, updated, "song update");
        Ok(updated)
    }

    /// Remove a song. Deleting a missing id is a no-op that returns `false`.
    pub async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let deleted = ops::delete_song(&self.pool, id).await?;
        debug!(id, deleted, "song delete");
        Ok(deleted)
    }

    pub async fn count(&self) -> StoreResult<i64> {
        ops::count_songs(&self.pool).await
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDateTime};
    use tempfile::TempDir;

    async fn open_store(dir: &TempDir) -> SongStore {
        SongStore::open(&dir.path().join("songs.db"), 2).await.unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;

        assert!(store.list_all().await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;

        let before = Local::now().naive_local();
        let id = store.insert("A", "C G").await.unwrap();

        let songs = store.list_all().await.unwrap();
        assert_eq!(songs.len(), 1);
        let song = &songs[0];
        assert_eq!(song.id, id);
        assert_eq!(song.title, "A");
        assert_eq!(song.chords, "C G");

        let created = NaiveDateTime::parse_from_str(&song.created_at, "%Y-%m-%dT%H:%M:%S%.f")
            .unwrap();
        assert!(created >= before);
    }

    #[tokio::test]
    async fn test_open_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("songs.db");

        let store = SongStore::open(&path, 1).await.unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;

        assert_eq!(store.get(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_reopen_keeps_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("songs.db");

        let store = SongStore::open(&path, 1).await.unwrap();
        store.insert("Hallelujah", "C Am C Am").await.unwrap();
        store.close().await;

        let reopened = SongStore::open(&path, 1).await.unwrap();
        let songs = reopened.list_all().await.unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "Hallelujah");
    }
}
