//! Heuristic scoring of how easily LLMs can process a text.
//!
//! [`engine`] turns raw text into a bounded score, a tier explanation and
//! improvement suggestions. [`batch`] scores several documents at once and
//! merges their suggestions. The remaining modules are the plumbing used by
//! the `llm-readability` binary.

pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod report;
pub mod types;

pub use batch::{aggregate, collate, evaluate};
pub use engine::{assess, explain, score, suggest, Explanation, Suggestion};
pub use error::{ReadabilityError, Result};
pub use extract::Document;
