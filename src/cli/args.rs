//! CLI argument definitions using clap
//!
//! Commands:
//! - chordbook init [--config <path>]
//! - chordbook serve [--config <path>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// chordbook - store and serve song chord sheets
#[derive(Parser, Debug)]
#[command(name = "chordbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and songs table
    Init {
        /// Path to JSON configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Start the HTTP server
    Serve {
        /// Path to JSON configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the configuration
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["chordbook", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_init_with_config() {
        let cli = Cli::try_parse_from(["chordbook", "init", "--config", "cb.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Init { config: Some(ref p) } if p == &PathBuf::from("cb.json")
        ));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["chordbook"]).is_err());
    }
}
