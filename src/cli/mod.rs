//! CLI module for the Team Name Registry
//!
//! - `serve`: run the HTTP API (default)
//! - `list`: print the current team names
//! - `canonicalize`: print the canonical form of a name

pub mod names;
pub mod serve;

use clap::{Parser, Subcommand};

/// Team Name Registry - register team names into a JotForm question
#[derive(Parser)]
#[command(name = "teamname-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve,

    /// Fetch and print the current team names
    List,

    /// Print the canonical form of a team name
    Canonicalize(names::CanonicalizeArgs),
}
