//! CLI module for rosterdb
//!
//! One-shot commands over the roster data file:
//! - add / delete / update: mutate, then save the whole file
//! - list / find / stats: read only
//! - sort: reorder and save the new order

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{AddArgs, Cli, Command, DirectionArg, FieldArg, KeyArg};
pub use commands::{execute, parse_update, run, run_command, Outcome};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
