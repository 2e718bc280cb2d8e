//! Sever: LLM-assisted XML node splitting.
//!
//! Sever locates one node of an XML document by a path expression, asks
//! a local LLM to partition the node's text into a fixed set of
//! categories, and splices the categorized nodes back into the tree at
//! the original node's position.
//!
//! # Core Principles
//!
//! - **Tolerant in, strict out**: untrusted input is recovered on a
//!   best-effort basis; model output must be well-formed or the split
//!   fails with a distinct error.
//! - **No partial commits**: either the whole pipeline succeeds, or the
//!   caller sees no mutation at all.
//! - **Advisory explanations**: the second model round-trip can fail
//!   without invalidating the split.
//!
//! # Example
//!
//! ```no_run
//! use sever::{OllamaProvider, Splitter};
//!
//! let splitter = Splitter::new().with_llm(OllamaProvider::new().unwrap());
//! let outcome = splitter
//!     .split(
//!         "<job><description>We need an engineer.</description></job>",
//!         "//description",
//!     )
//!     .unwrap();
//!
//! println!("{}", outcome.result.result_xml);
//! ```

pub mod document;
pub mod error;
pub mod llm;
pub mod parse;
pub mod path;
pub mod split;
pub mod store;

mod splitter;

pub use crate::splitter::{SplitOutcome, SplitResult, Splitter};
pub use document::{Document, NodeId};
pub use error::{Result, SeverError};
pub use llm::{LlmConfig, LlmProvider, MockProvider, OllamaProvider};
pub use path::{PathExpr, locate};
pub use split::Category;
pub use store::{JsonFileStore, MemoryStore, SplitRecord, SplitStore};
