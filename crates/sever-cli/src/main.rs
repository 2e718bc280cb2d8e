//! Sever CLI - LLM-assisted XML node splitting tool.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Split {
            file,
            path,
            model,
            store,
            no_store,
            output,
            no_explain,
        } => commands::split::run(
            file,
            path,
            model,
            store,
            no_store,
            output,
            no_explain,
            cli.verbose,
        ),

        Commands::History { store, json } => commands::history::run(store, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
