//! Row types for the `songs` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored song
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Song {
    /// Unique identifier (auto-increment, never reused)
    pub id: i64,
    /// Song title
    pub title: String,
    /// Chord sheet text
    pub chords: String,
    /// Creation time, ISO-8601 local time
    pub created_at: String,
}
