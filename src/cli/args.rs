//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "backpack")]
#[command(author, version, long_about = None)]
#[command(about = "Pack, inspect and unpack backpacks with .pack scripts")]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Output format as JSON
    #[arg(long, global = true, env = "BACKPACK_JSON")]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Run a .pack script file
    Run {
        /// Path to the .pack script file
        file: PathBuf,
    },

    /// Execute a single statement against an empty set of backpacks
    Exec {
        /// The statement to execute, e.g. 'PACK "Jim" WITH "tent"'
        statement: String,
    },

    /// Explain a script or statement without executing
    Explain {
        /// Statement or path to a .pack script file
        input: String,
    },

    /// Validate a script without executing it
    Check {
        /// Path to the .pack script file
        file: PathBuf,
    },

    /// Start interactive REPL mode
    Repl,
}
