//! chordbook - a small song and chord sheet store
//!
//! Songs (title + chord text) live in a single SQLite table and are served
//! through a JSON API plus one HTML page.
//!
//! - [`store`]: SQLite persistence
//! - [`http_server`]: axum routes and server
//! - [`observability`]: logging and counters
//! - [`config`]: configuration file
//! - [`cli`]: command-line entry point

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod store;
