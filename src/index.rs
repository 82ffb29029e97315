//! The knowledge index: records embedded once at startup, searched per query.

use crate::embedding::Embedder;
use crate::error::{FaqbotError, Result};
use crate::records::Record;
use crate::vector_store::{IndexedRecord, MemoryVectorStore, ScoredRecord, VectorStore};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Read-only similarity index over the loaded records.
///
/// Built exactly once by [`KnowledgeIndex::build`]; there is no way to add
/// or remove records afterwards.
pub struct KnowledgeIndex {
    embedder: Arc<dyn Embedder>,
    store: Box<dyn VectorStore>,
    min_score: Option<f32>,
}

impl KnowledgeIndex {
    /// Embed every record's question and index it.
    #[instrument(skip_all, fields(records = records.len(), model = embedder.model()))]
    pub async fn build(records: Vec<Record>, embedder: Arc<dyn Embedder>) -> Result<Self> {
        let questions: Vec<String> = records.iter().map(|r| r.question.clone()).collect();
        let embeddings = if questions.is_empty() {
            Vec::new()
        } else {
            embedder.embed_batch(&questions).await?
        };

        if embeddings.len() != records.len() {
            return Err(FaqbotError::Embedding(format!(
                "Expected {} embeddings, got {}",
                records.len(),
                embeddings.len()
            )));
        }

        let entries: Vec<IndexedRecord> = records
            .into_iter()
            .zip(embeddings)
            .map(|(record, embedding)| IndexedRecord { record, embedding })
            .collect();

        info!("Indexed {} records", entries.len());

        Ok(Self {
            embedder,
            store: Box::new(MemoryVectorStore::new(entries)),
            min_score: None,
        })
    }

    /// Drop search results scoring below `min_score`.
    pub fn with_min_score(mut self, min_score: Option<f32>) -> Self {
        self.min_score = min_score;
        self
    }

    /// Return up to `k` records most similar to `query`, best first.
    ///
    /// An empty index, or nothing above the threshold, gives an empty result.
    #[instrument(skip(self, query))]
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<ScoredRecord>> {
        if self.store.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.embed(query).await.map_err(|e| match e {
            FaqbotError::Embedding(msg) => FaqbotError::Service(msg),
            other => other,
        })?;

        let results = self.store.search(&query_embedding, k, self.min_score).await;
        debug!("Retrieved {} records", results.len());
        Ok(results)
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
