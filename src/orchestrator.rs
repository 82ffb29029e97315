//! Startup wiring for faqbot.
//!
//! Checks the credential, loads the records, builds the index once, and
//! hands out the engine every surface answers queries with.

use crate::chat::{ChatModel, OpenAIChat};
use crate::config::{Prompts, Settings};
use crate::embedding::{Embedder, OpenAIEmbedder};
use crate::error::Result;
use crate::index::KnowledgeIndex;
use crate::rag::{PromptComposer, RagEngine};
use crate::records::{load_records, Columns};
use std::sync::Arc;
use tracing::{info, instrument};

/// Everything a session needs, built once per process.
pub struct Orchestrator {
    settings: Settings,
    index: Arc<KnowledgeIndex>,
    chat: Arc<dyn ChatModel>,
    prompts: Prompts,
}

impl Orchestrator {
    /// Build against the OpenAI services using the key from the environment.
    ///
    /// Fails before any network call when the key is missing, and when the
    /// data source is missing or lacks the configured columns.
    #[instrument(skip_all)]
    pub async fn new(settings: Settings) -> Result<Self> {
        let api_key = Settings::api_key()?;

        let embedder: Arc<dyn Embedder> = Arc::new(OpenAIEmbedder::new(
            &api_key,
            &settings.embedding.model,
            settings.embedding.dimensions,
        )?);
        let chat = OpenAIChat::new(&api_key, &settings.chat.model, settings.chat.temperature)?;
        info!("Answering with {}", chat.model());

        Self::with_services(settings, embedder, Arc::new(chat)).await
    }

    /// Build with caller-supplied embedding and chat services.
    pub async fn with_services(
        settings: Settings,
        embedder: Arc<dyn Embedder>,
        chat: Arc<dyn ChatModel>,
    ) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let columns = Columns {
            question: &settings.data.question_column,
            answer: &settings.data.answer_column,
        };
        let records = load_records(&settings.data_path(), &columns)?;

        info!(
            "Building index with {} ({} records)",
            embedder.model(),
            records.len()
        );
        let index = KnowledgeIndex::build(records, embedder)
            .await?
            .with_min_score(settings.retrieval.min_score);

        Ok(Self {
            settings,
            index: Arc::new(index),
            chat,
            prompts,
        })
    }

    /// A new engine sharing the process-wide index.
    pub fn engine(&self) -> RagEngine {
        RagEngine::new(
            self.index.clone(),
            self.chat.clone(),
            PromptComposer::new(self.prompts.clone()),
        )
        .with_top_k(self.settings.retrieval.top_k)
    }

    /// The shared index.
    pub fn index(&self) -> Arc<KnowledgeIndex> {
        self.index.clone()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
