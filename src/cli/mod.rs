//! CLI module for chordbook
//!
//! Provides command-line interface for:
//! - init: Create the database and schema
//! - serve: Open the store and run the HTTP server

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_response, write_response_to};
