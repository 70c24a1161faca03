//! CLI module for the intake service.
//!
//! - serve: load seed data, wire the store and service, run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
