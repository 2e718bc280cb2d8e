//! Example: Split a job posting's description node with a mock model.
//!
//! Usage:
//!   cargo run --example split

use sever::{MockProvider, Splitter};

fn main() -> sever::Result<()> {
    let xml = "<job>\
               <title>Backend Engineer</title>\
               <description>We are a small team. We need a skilled engineer. \
               Competitive salary. Contact hr@example.com.</description>\
               </job>";

    // Scripted responses stand in for a live Ollama instance: first the
    // categorization, then the explanation.
    let provider = MockProvider::with_responses([
        "<introduction>We are a small team.</introduction>\
         <task>We need a skilled engineer.</task>\
         <offer>Competitive salary.</offer>\
         <contact>Contact hr@example.com.</contact>",
        "The description node was split into introduction, task, offer, \
         and contact. No profile content was present.",
    ]);

    let splitter = Splitter::new().with_llm(provider);
    let outcome = splitter.split(xml, "//description")?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Before:");
    println!("{}", outcome.result.original_xml);
    println!();
    println!("After:");
    println!("{}", outcome.result.result_xml);

    if !outcome.categories.is_empty() {
        let list: Vec<&str> = outcome.categories.iter().map(|c| c.tag()).collect();
        println!("Categories: {}", list.join(", "));
    }

    if let Some(explanation) = outcome.explanation {
        println!();
        println!("Explanation:");
        println!("{}", explanation);
    }
    println!("{}", separator);

    Ok(())
}
