//! Split command - run the node-splitting pipeline on a document.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use colored::Colorize;
use sever::{JsonFileStore, LlmProvider, OllamaProvider, Splitter};

use super::DEFAULT_STORE;

pub fn run(
    file: PathBuf,
    path: String,
    model: Option<String>,
    store: Option<PathBuf>,
    no_store: bool,
    output: Option<PathBuf>,
    no_explain: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let xml = if file.to_str() == Some("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !file.exists() {
            return Err(format!("File not found: {}", file.display()).into());
        }
        fs::read_to_string(&file)?
    };

    let provider = match model {
        Some(model) => OllamaProvider::with_model(model)?,
        None => OllamaProvider::new()?,
    };

    println!(
        "{} {} {} {}",
        "Splitting".cyan().bold(),
        path.white(),
        "with".cyan(),
        provider.config().model.white()
    );

    let mut splitter = Splitter::new().with_llm(provider);
    if !no_store {
        let store_path = store.unwrap_or_else(|| PathBuf::from(DEFAULT_STORE));
        splitter = splitter.with_store(JsonFileStore::new(store_path));
    }
    if no_explain {
        splitter = splitter.without_explanation();
    }

    let outcome = splitter.split(&xml, &path)?;

    println!();
    println!("{}", "Before:".yellow().bold());
    println!("{}", outcome.result.original_xml);
    println!("{}", "After:".yellow().bold());
    println!("{}", outcome.result.result_xml);

    if !outcome.categories.is_empty() {
        let list = outcome
            .categories
            .iter()
            .map(|c| c.tag())
            .collect::<Vec<_>>()
            .join(", ");
        println!("Categories: {}", list.white().bold());
    }

    match outcome.explanation {
        Some(ref explanation) => {
            println!();
            println!("{}", "Explanation of Changes:".yellow().bold());
            println!("{}", explanation);
        }
        None if !no_explain => {
            eprintln!("{} explanation unavailable", "Warning:".yellow());
        }
        None => {}
    }

    if let Some(ref id) = outcome.record_id {
        if verbose {
            println!();
            println!("Recorded as {}", id.white().bold());
        }
    }

    if let Some(output_path) = output {
        fs::write(&output_path, &outcome.result.result_xml)?;
        println!("Wrote {}", output_path.display());
    }

    Ok(())
}
