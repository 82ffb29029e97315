//! Deterministic stand-ins for the external services, used by unit tests.

use crate::chat::ChatModel;
use crate::embedding::Embedder;
use crate::error::{FaqbotError, Result};
use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

const BUCKETS: usize = 256;

/// Bag-of-words embedder: each lowercase word bumps one hashed bucket.
pub(crate) struct KeywordEmbedder;

impl KeywordEmbedder {
    fn vector(text: &str) -> Vec<f32> {
        let mut vector = vec![0.0; BUCKETS];
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let mut hasher = DefaultHasher::new();
            word.to_lowercase().hash(&mut hasher);
            vector[(hasher.finish() as usize) % BUCKETS] += 1.0;
        }
        vector
    }
}

#[async_trait]
impl Embedder for KeywordEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(Self::vector(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| Self::vector(t)).collect())
    }

    fn model(&self) -> &str {
        "keyword"
    }
}

/// Embedder whose every call fails like an unreachable service.
pub(crate) struct FailingEmbedder;

#[async_trait]
impl Embedder for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(FaqbotError::Service("embedding service unreachable".into()))
    }

    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Err(FaqbotError::Service("embedding service unreachable".into()))
    }

    fn model(&self) -> &str {
        "failing"
    }
}

/// Chat model returning a canned reply and remembering every prompt it saw.
pub(crate) struct StubChat {
    reply: std::result::Result<String, String>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl StubChat {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_user_message(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(_, user)| user.clone())
    }
}

#[async_trait]
impl ChatModel for StubChat {
    async fn invoke(&self, system_message: &str, user_message: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system_message.to_string(), user_message.to_string()));
        self.reply.clone().map_err(FaqbotError::Service)
    }
}
