//! In-memory vector store implementation.
//!
//! Brute-force cosine similarity over every record. The record set is
//! fixed at construction.

use super::{cosine_similarity, IndexedRecord, ScoredRecord, VectorStore};
use async_trait::async_trait;

/// In-memory vector store.
#[derive(Debug, Default)]
pub struct MemoryVectorStore {
    entries: Vec<IndexedRecord>,
}

impl MemoryVectorStore {
    /// Create a store over the given entries.
    pub fn new(entries: Vec<IndexedRecord>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl VectorStore for MemoryVectorStore {
    async fn search(
        &self,
        query_embedding: &[f32],
        limit: usize,
        min_score: Option<f32>,
    ) -> Vec<ScoredRecord> {
        let mut results: Vec<ScoredRecord> = self
            .entries
            .iter()
            .map(|entry| ScoredRecord {
                record: entry.record.clone(),
                score: cosine_similarity(query_embedding, &entry.embedding),
            })
            .filter(|r| min_score.map_or(true, |min| r.score >= min))
            .collect();

        // Stable sort keeps source order among equal scores
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(limit);

        results
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
