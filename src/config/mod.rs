//! Configuration module for faqbot.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, RagPrompts};
pub use settings::{
    ChatSettings, DataSettings, EmbeddingSettings, GeneralSettings, PromptSettings,
    RetrievalSettings, Settings, UiSettings, API_KEY_ENV,
};
