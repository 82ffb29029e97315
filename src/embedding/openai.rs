//! OpenAI embeddings implementation.

use super::Embedder;
use crate::error::{FaqbotError, Result};
use crate::openai::{create_client, map_api_error};
use async_openai::types::{CreateEmbeddingRequestArgs, EmbeddingInput};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// OpenAI has a limit on inputs per request.
const BATCH_SIZE: usize = 100;

/// OpenAI-based embedder.
pub struct OpenAIEmbedder {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    dimensions: Option<u32>,
}

impl OpenAIEmbedder {
    /// Create a new OpenAI embedder for the given model.
    ///
    /// `dimensions` is only sent when set; `text-embedding-ada-002` rejects it.
    pub fn new(api_key: &str, model: &str, dimensions: Option<u32>) -> Result<Self> {
        Ok(Self {
            client: create_client(api_key)?,
            model: model.to_string(),
            dimensions,
        })
    }
}

#[async_trait]
impl Embedder for OpenAIEmbedder {
    #[instrument(skip(self, text))]
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| FaqbotError::Embedding("Empty embedding response".to_string()))
    }

    #[instrument(skip(self, texts), fields(count = texts.len()))]
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Generating embeddings for {} texts", texts.len());

        let mut all_embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(BATCH_SIZE) {
            // The API rejects empty strings
            let input: Vec<String> = chunk
                .iter()
                .map(|t| if t.trim().is_empty() { " ".to_string() } else { t.clone() })
                .collect();

            let mut args = CreateEmbeddingRequestArgs::default();
            args.model(&self.model).input(EmbeddingInput::StringArray(input));
            if let Some(dimensions) = self.dimensions {
                args.dimensions(dimensions);
            }
            let request = args
                .build()
                .map_err(|e| FaqbotError::Embedding(format!("Failed to build request: {}", e)))?;

            let response = self
                .client
                .embeddings()
                .create(request)
                .await
                .map_err(|e| map_api_error("Embedding API error", e))?;

            if response.data.len() != chunk.len() {
                return Err(FaqbotError::Embedding(format!(
                    "Expected {} embeddings, got {}",
                    chunk.len(),
                    response.data.len()
                )));
            }

            // Sort by index to ensure correct order
            let mut embeddings: Vec<_> = response.data.into_iter().collect();
            embeddings.sort_by_key(|e| e.index);
            all_embeddings.extend(embeddings.into_iter().map(|e| e.embedding));
        }

        debug!("Generated {} embeddings", all_embeddings.len());
        Ok(all_embeddings)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedder_creation() {
        let embedder = OpenAIEmbedder::new("sk-test", "text-embedding-ada-002", None).unwrap();
        assert_eq!(embedder.model(), "text-embedding-ada-002");
        assert!(embedder.dimensions.is_none());

        let embedder = OpenAIEmbedder::new("sk-test", "text-embedding-3-small", Some(512)).unwrap();
        assert_eq!(embedder.dimensions, Some(512));
    }

    #[tokio::test]
    async fn test_empty_batch_skips_request() {
        let embedder = OpenAIEmbedder::new("sk-test", "text-embedding-ada-002", None).unwrap();
        assert!(embedder.embed_batch(&[]).await.unwrap().is_empty());
    }
}
