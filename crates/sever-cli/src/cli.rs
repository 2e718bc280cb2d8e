//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sever: LLM-assisted XML node splitting tool
#[derive(Parser)]
#[command(name = "sever")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split one node of an XML document into categorized children
    Split {
        /// Path to the XML file, or '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Path expression selecting the node to split (e.g. '//description')
        #[arg(short, long)]
        path: String,

        /// Ollama model to use (e.g. "codellama", "llama3.2")
        #[arg(long)]
        model: Option<String>,

        /// Store file for split history (default: sever.splits.json)
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// Don't record this split in the store
        #[arg(long, conflicts_with = "store")]
        no_store: bool,

        /// Write the mutated document to a file instead of only stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the advisory explanation round-trip
        #[arg(long)]
        no_explain: bool,
    },

    /// List previously recorded splits
    History {
        /// Store file to read (default: sever.splits.json)
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
