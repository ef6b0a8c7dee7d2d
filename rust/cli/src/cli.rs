//! Clap parser types for the drawhand CLI.
//!
//! Defines the top-level [`DrawhandCli`] parser and the [`Commands`] enum
//! with one variant per subcommand. Argument handling stays here; the
//! behavior lives in the `commands` handler modules.

use clap::{Parser, Subcommand};

/// Draw poker best-hand analyzer.
#[derive(Debug, Parser)]
#[command(name = "drawhand", version, about = "Draw poker best-hand analyzer")]
pub struct DrawhandCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate ten-card deals read line by line from stdin or a file
    Analyze {
        /// Read deal lines from FILE instead of stdin
        #[arg(long, value_name = "FILE")]
        input: Option<String>,
        /// Append a JSONL evaluation record per deal to FILE
        #[arg(long, value_name = "FILE")]
        log: Option<String>,
    },
    /// Print all 32 candidate cardsets for one ten-card deal
    Sets {
        /// Ten card tokens, e.g. TH JH QC QD QS QH KH AH 2S 6S
        #[arg(required = true, num_args = 1..)]
        tokens: Vec<String>,
    },
    /// Deal a random ten-card input and evaluate it
    Deal {
        /// RNG seed for reproducible deals
        #[arg(long)]
        seed: Option<u64>,
    },
}
