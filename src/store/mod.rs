//! # Song Store
//!
//! SQLite-backed persistence for songs.
//!
//! A single `songs` table holds every record. All access goes through
//! [`SongStore`], which owns a connection pool; each operation runs exactly
//! one statement on a pooled connection and returns it to the pool on every
//! exit path.

mod errors;
mod models;
mod ops;
mod repository;
mod schema;

pub use errors::{StoreError, StoreResult};
pub use models::Song;
pub use repository::SongStore;
