//! Table definition for the song store.

use sqlx::{Pool, Sqlite};

use super::errors::StoreResult;

/// Create the `songs` table if it does not exist yet
pub async fn ensure_schema(pool: &Pool<Sqlite>) -> StoreResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            chords TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
