//! CLI argument definitions using clap
//!
//! Commands:
//! - intake serve --seed <path> [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Intake - a small REST service for application intake records
#[derive(Parser, Debug)]
#[command(name = "intake")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the intake HTTP server
    Serve {
        /// Path to the seed data file (JSON array of applications)
        #[arg(long, default_value = "./seed.json")]
        seed: PathBuf,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8080)]
        port: u16,

        /// Allowed CORS origin (repeatable); permissive when omitted
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
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
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["intake", "serve"]).unwrap();
        let Command::Serve { seed, host, port, cors_origins } = cli.command;
        assert_eq!(seed, PathBuf::from("./seed.json"));
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, 8080);
        assert!(cors_origins.is_empty());
    }

    #[test]
    fn test_serve_with_flags() {
        let cli = Cli::try_parse_from([
            "intake",
            "serve",
            "--seed",
            "/data/apps.json",
            "--port",
            "3000",
            "--cors-origin",
            "http://localhost:5173",
        ])
        .unwrap();

        let Command::Serve { seed, port, cors_origins, .. } = cli.command;
        assert_eq!(seed, PathBuf::from("/data/apps.json"));
        assert_eq!(port, 3000);
        assert_eq!(cors_origins, vec!["http://localhost:5173".to_string()]);
    }
}
