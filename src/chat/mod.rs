//! Chat invocation against a hosted language model.

mod openai;

pub use openai::OpenAIChat;

use crate::error::Result;
use async_trait::async_trait;

/// A language model answering a single system + user exchange.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send `[system, user]` and return the generated text.
    async fn invoke(&self, system_message: &str, user_message: &str) -> Result<String>;
}
