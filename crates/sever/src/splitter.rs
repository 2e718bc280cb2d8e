//! Main Splitter struct and public API.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeverError};
use crate::llm::{LlmProvider, prompts};
use crate::parse::parse_lenient;
use crate::path::locate;
use crate::split::{Category, parse_response, splice};
use crate::store::{SplitRecord, SplitStore};

/// The original/mutated pair produced by one successful split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitResult {
    /// The input document exactly as received.
    pub original_xml: String,

    /// The mutated document, serialized with stable indentation.
    pub result_xml: String,

    /// The path expression that selected the split node.
    pub node_path: String,
}

/// Everything a caller gets back from one split invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOutcome {
    /// The before/after pair.
    pub result: SplitResult,

    /// Categories present among the spliced-in nodes, in emission order.
    pub categories: Vec<Category>,

    /// Advisory natural-language explanation. `None` when the second
    /// gateway round-trip failed or was disabled; never an error.
    pub explanation: Option<String>,

    /// Id the record was stored under, when a store is configured.
    pub record_id: Option<String>,
}

/// The node-splitting pipeline.
///
/// One invocation performs at most two sequential gateway calls
/// (categorization, then explanation) and owns its document exclusively;
/// nothing is shared across invocations.
pub struct Splitter {
    llm: Option<Arc<dyn LlmProvider>>,
    store: Option<Arc<dyn SplitStore>>,
    explain: bool,
}

impl Splitter {
    /// Create a splitter with no provider or store configured.
    pub fn new() -> Self {
        Self {
            llm: None,
            store: None,
            explain: true,
        }
    }

    /// Set the LLM provider. Required before calling [`Splitter::split`].
    pub fn with_llm(mut self, provider: impl LlmProvider + 'static) -> Self {
        self.llm = Some(Arc::new(provider));
        self
    }

    /// Set the persistence store. Optional; without one, splits are not
    /// recorded.
    pub fn with_store(mut self, store: impl SplitStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Skip the advisory explanation round-trip.
    pub fn without_explanation(mut self) -> Self {
        self.explain = false;
        self
    }

    /// Split the node selected by `node_path` into categorized children.
    ///
    /// The document is loaded tolerantly, the first matching node is
    /// located, the model's categorization is parsed strictly, and the
    /// parsed nodes replace the target in place. On any error the
    /// caller's input is untouched; mutation happens only after the
    /// model response has been fully parsed.
    pub fn split(&self, xml: &str, node_path: &str) -> Result<SplitOutcome> {
        let llm = self.llm.as_ref().ok_or_else(|| {
            SeverError::ModelUnavailable("no LLM provider configured".to_string())
        })?;

        let mut doc = parse_lenient(xml)?;
        let target = locate(&doc, node_path)?;
        let tag = doc.tag(target).to_string();
        let text = doc.text(target).unwrap_or("").to_string();

        let prompt = prompts::categorization_prompt(&tag, &text);
        let response = llm.generate(&prompt)?;
        let replacements = parse_response(&response)?;

        let inserted = splice(&mut doc, target, &replacements)?;
        let result_xml = doc.to_xml();

        let mut categories = Vec::new();
        for &id in &inserted {
            if let Some(category) = Category::from_tag(doc.tag(id)) {
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
        }

        let record_id = match &self.store {
            Some(store) => {
                let ordinal = store.get()?.len();
                let id = format!("{}_{}", node_path, ordinal);
                store.add(SplitRecord::new(
                    id.as_str(),
                    result_xml.as_str(),
                    xml,
                    node_path,
                ))?;
                Some(id)
            }
            None => None,
        };

        // Advisory: a failed explanation never invalidates the split.
        let explanation = if self.explain {
            llm.generate(&prompts::explanation_prompt(xml, &result_xml))
                .ok()
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
        } else {
            None
        };

        Ok(SplitOutcome {
            result: SplitResult {
                original_xml: xml.to_string(),
                result_xml,
                node_path: node_path.to_string(),
            },
            categories,
            explanation,
            record_id,
        })
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}
