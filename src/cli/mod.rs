//! Command-line interface

pub mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prompt-schema-service", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the schema API server
    Serve,
}
