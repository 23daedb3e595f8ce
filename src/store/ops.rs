//! Song CRUD statements
//!
//! One statement per function. SQLite runs each in autocommit mode, so a
//! write is durable once the call returns.

use chrono::Local;
use sqlx::{Pool, Sqlite};

use super::errors::StoreResult;
use super::models::Song;

/// Current local time as an ISO-8601 string with microseconds
pub fn current_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// All songs, newest id first
pub async fn list_songs(pool: &Pool<Sqlite>) -> StoreResult<Vec<Song>> {
    let songs = sqlx::query_as::<_, Song>(
        "SELECT id, title, chords, created_at FROM songs ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(songs)
}

/// Get song by id
pub async fn get_song(pool: &Pool<Sqlite>, id: i64) -> StoreResult<Option<Song>> {
    let song = sqlx::query_as::<_, Song>(
        "SELECT id, title, chords, created_at FROM songs WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(song)
}

/// Insert a new song, returns the new song id
pub async fn insert_song(pool: &Pool<Sqlite>, title: &str, chords: &str) -> StoreResult<i64> {
    let result = sqlx::query("INSERT INTO songs (title, chords, created_at) VALUES (?, ?, ?)")
        .bind(title)
        .bind(chords)
        .bind(current_timestamp())
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite title and chords. Returns false when no row has this id.
pub async fn update_song(
    pool: &Pool<Sqlite>,
    id: i64,
    title: &str,
    chords: &str,
) -> StoreResult<bool> {
    let result = sqlx::query("UPDATE songs SET title = ?, chords = ? WHERE id = ?")
        .bind(title)
        .bind(chords)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete song by id. Returns false when no row has this id.
pub async fn delete_song(pool: &Pool<Sqlite>, id: i64) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Number of stored songs
pub async fn count_songs(pool: &Pool<Sqlite>) -> StoreResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
