//! Prompt templates for LLM interactions.
//!
//! Both templates are pure functions of their inputs: identical inputs
//! render identical instruction strings, with no randomness and no
//! timestamps.

use crate::split::Category;

/// "introduction, task, profile, offer, and contact"
fn category_list() -> String {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.tag()).collect();
    format!(
        "{}, and {}",
        names[..names.len() - 1].join(", "),
        names[names.len() - 1]
    )
}

/// Build the categorization instruction for a node's tag and text.
///
/// A node without text content is rendered with an empty string.
pub fn categorization_prompt(tag: &str, text: &str) -> String {
    let example = Category::ALL
        .iter()
        .map(|c| format!("<{t}>{l} content here</{t}>", t = c.tag(), l = c.label()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Task: Split the following XML content into five categories: {list}.
Rules:
1. Maintain the original wording.
2. Do not add any new information.
3. If a category is not applicable, omit that tag entirely.
4. Use proper XML syntax.

Input XML:
<{tag}>
{text}
</{tag}>

Output format:
{example}

Split the content:"#,
        list = category_list(),
    )
}

/// Build the instruction for the advisory explanation round-trip.
pub fn explanation_prompt(original_xml: &str, result_xml: &str) -> String {
    format!(
        r#"Task: Explain the changes made to this XML.

Before:
{original_xml}

After:
{result_xml}

Instructions:
1. Focus on explaining which node was split.
2. Describe how the content was distributed among the new nodes ({list}).
3. Be concise but thorough in your explanation.
4. If a category is missing in the result, mention that it wasn't applicable.

Explanation:"#,
        list = category_list(),
    )
}
