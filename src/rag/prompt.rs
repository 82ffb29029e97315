//! Prompt composition from a query and the retrieved records.

use crate::config::Prompts;
use crate::vector_store::ScoredRecord;
use std::collections::HashMap;

/// Turns a query plus retrieval results into the user turn sent to the model.
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    prompts: Prompts,
}

impl PromptComposer {
    pub fn new(prompts: Prompts) -> Self {
        Self { prompts }
    }

    /// The fixed system instruction.
    pub fn system_message(&self) -> &str {
        &self.prompts.rag.system
    }

    /// Compose the user turn.
    ///
    /// With records, they are listed in retrieval order inside the augmented
    /// template. Without, the no-context template asks for a general answer.
    pub fn compose(&self, query: &str, retrieved: &[ScoredRecord]) -> String {
        let mut vars = HashMap::new();
        vars.insert("query".to_string(), query.to_string());

        if retrieved.is_empty() {
            return self.prompts.render_with_custom(&self.prompts.rag.no_context, &vars);
        }

        vars.insert("context".to_string(), self.source_knowledge(retrieved));
        self.prompts.render_with_custom(&self.prompts.rag.augmented, &vars)
    }

    /// Render the retrieved records as one block, one entry per record.
    pub fn source_knowledge(&self, retrieved: &[ScoredRecord]) -> String {
        retrieved
            .iter()
            .map(|r| {
                let mut vars = HashMap::new();
                vars.insert("question".to_string(), r.record.question.clone());
                vars.insert("answer".to_string(), r.record.answer.clone());
                Prompts::render(&self.prompts.rag.context_entry, &vars)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
