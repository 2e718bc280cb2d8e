//! History command - browse previously recorded splits.

use std::path::PathBuf;

use colored::Colorize;
use sever::{JsonFileStore, SplitStore};

use super::DEFAULT_STORE;

pub fn run(
    store: Option<PathBuf>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store_path = store.unwrap_or_else(|| PathBuf::from(DEFAULT_STORE));
    let store = JsonFileStore::new(&store_path);
    let records = store.get()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No splits recorded in {}", store_path.display());
        return Ok(());
    }

    println!(
        "{} split(s) in {}",
        records.len().to_string().white().bold(),
        store_path.display()
    );

    for (i, record) in records.iter().enumerate() {
        println!();
        println!(
            "{} - Node: {}  ({})",
            format!("Split {}", i + 1).cyan().bold(),
            record.node_path.white(),
            record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        if verbose {
            println!("  id: {}", record.id);
            println!("  fingerprint: {}", record.fingerprint);
        }
        println!("{}", "Original:".yellow());
        println!("{}", record.original_xml);
        println!("{}", "Split Result:".yellow());
        println!("{}", record.document);
    }

    Ok(())
}
