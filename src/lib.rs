//! faqbot - question answering over a spreadsheet of FAQs
//!
//! Loads question/answer pairs, embeds the questions into an in-memory
//! index, and answers each query with a language model prompted with the
//! closest stored pairs. When nothing relevant is found the model answers
//! from general knowledge instead.
//!
//! # Architecture
//!
//! - `records` - Loading question/answer records from spreadsheets or JSON
//! - `embedding` - Embedding generation
//! - `vector_store` - Similarity search over embedded records
//! - `index` - The read-only index built once at startup
//! - `rag` - Prompt composition and the per-query flow
//! - `chat` - Language model invocation
//! - `session` - Per-session conversation history
//! - `orchestrator` - Startup wiring
//! - `web` - HTML chat page
//! - `cli` - Command-line surface
//!
//! # Example
//!
//! ```rust,no_run
//! use faqbot::config::Settings;
//! use faqbot::orchestrator::Orchestrator;
//! use faqbot::session::ConversationSession;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(settings).await?;
//!     let engine = orchestrator.engine();
//!
//!     let mut session = ConversationSession::new();
//!     let response = engine.submit(&mut session, "Qual o prazo de entrega?").await?;
//!     println!("{}", response.answer);
//!
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod index;
pub mod openai;
pub mod orchestrator;
pub mod rag;
pub mod records;
pub mod session;
pub mod vector_store;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{FaqbotError, Result};
