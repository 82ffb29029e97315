//! RAG (Retrieval-Augmented Generation) for question answering.
//!
//! Each query is matched against the stored questions; the closest records
//! become context for the model, or the model answers on its own when none
//! are found.

mod engine;
pub mod prompt;

pub use engine::{RagEngine, RagResponse, DEFAULT_TOP_K};
pub use prompt::PromptComposer;
