//! rosterdb CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`, which writes the JSON
//! response. On failure the error is also printed to stderr and the process
//! exits non-zero.

use rosterdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
