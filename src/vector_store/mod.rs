//! Vector store abstraction for faqbot.
//!
//! Provides a trait-based interface over the similarity-search structure
//! holding the embedded records.

mod memory;

pub use memory::MemoryVectorStore;

use crate::records::Record;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A record stored alongside the embedding of its question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedRecord {
    pub record: Record,
    pub embedding: Vec<f32>,
}

/// A retrieved record with its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    /// The matched record.
    pub record: Record,
    /// Similarity score (higher is better).
    pub score: f32,
}

/// Trait for read-only similarity search over indexed records.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Search for the `limit` most similar records, best first.
    ///
    /// Records scoring below `min_score` are dropped when a threshold is given.
    async fn search(
        &self,
        query_embedding: &[f32],
        limit: usize,
        min_score: Option<f32>,
    ) -> Vec<ScoredRecord>;

    /// Number of indexed records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute cosine similarity between two vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}
