//! RAG response generation and the per-submission flow.

use super::PromptComposer;
use crate::chat::ChatModel;
use crate::error::{FaqbotError, Result};
use crate::index::KnowledgeIndex;
use crate::session::{ConversationSession, SessionEntry};
use crate::vector_store::ScoredRecord;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Default number of records retrieved per query.
pub const DEFAULT_TOP_K: usize = 8;

/// RAG engine for question answering.
pub struct RagEngine {
    index: Arc<KnowledgeIndex>,
    chat: Arc<dyn ChatModel>,
    composer: PromptComposer,
    top_k: usize,
}

impl RagEngine {
    /// Create a new RAG engine.
    pub fn new(index: Arc<KnowledgeIndex>, chat: Arc<dyn ChatModel>, composer: PromptComposer) -> Self {
        Self {
            index,
            chat,
            composer,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Set the number of records retrieved per query.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// The index queries are answered from.
    pub fn index(&self) -> &KnowledgeIndex {
        &self.index
    }

    /// Retrieve, compose and invoke for one query, without touching any session.
    #[instrument(skip(self), fields(question = %question))]
    pub async fn ask(&self, question: &str) -> Result<RagResponse> {
        let sources = self.index.search(question, self.top_k).await?;
        debug!("Composing prompt with {} records", sources.len());

        let prompt = self.composer.compose(question, &sources);
        let answer = self
            .chat
            .invoke(self.composer.system_message(), &prompt)
            .await?;

        Ok(RagResponse { answer, sources })
    }

    /// Handle one user submission.
    ///
    /// A blank query is rejected before any external call. The session only
    /// gains an entry when the model answered.
    pub async fn submit(
        &self,
        session: &mut ConversationSession,
        query: &str,
    ) -> Result<RagResponse> {
        if query.trim().is_empty() {
            return Err(FaqbotError::Validation("query is empty".to_string()));
        }

        let response = self.ask(query).await?;
        session.record(SessionEntry::new(query, response.answer.clone()));
        info!("Recorded answer ({} entries in session)", session.len());

        Ok(response)
    }
}

/// A RAG response with answer and the records it was grounded on.
#[derive(Debug, Clone)]
pub struct RagResponse {
    /// The generated answer.
    pub answer: String,
    /// Retrieved records, best first. Empty when nothing relevant was found.
    pub sources: Vec<ScoredRecord>,
}

impl RagResponse {
    /// Whether the answer was generated with retrieved context.
    pub fn is_grounded(&self) -> bool {
        !self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Record;
    use crate::testing::{FailingEmbedder, KeywordEmbedder, StubChat};

    async fn engine(records: Vec<Record>, chat: Arc<StubChat>) -> RagEngine {
        let index = KnowledgeIndex::build(records, Arc::new(KeywordEmbedder))
            .await
            .unwrap();
        RagEngine::new(Arc::new(index), chat, PromptComposer::default())
    }

    #[tokio::test]
    async fn test_submission_with_matching_record() {
        let chat = Arc::new(StubChat::replying("5 dias úteis."));
        let engine = engine(
            vec![Record::new("Qual o prazo de entrega?", "5 dias úteis")],
            chat.clone(),
        )
        .await;
        let mut session = ConversationSession::new();

        let response = engine.submit(&mut session, "prazo de entrega").await.unwrap();

        assert!(response.is_grounded());
        assert_eq!(response.sources[0].record.question, "Qual o prazo de entrega?");
        let prompt = chat.last_user_message().unwrap();
        assert!(prompt.contains("Pergunta: Qual o prazo de entrega?\nResposta: 5 dias úteis"));

        assert_eq!(session.len(), 1);
        let entry = &session.all()[0];
        assert_eq!(entry.query, "prazo de entrega");
        assert_eq!(entry.response, "5 dias úteis.");
    }

    #[tokio::test]
    async fn test_submission_with_empty_index() {
        let chat = Arc::new(StubChat::replying("Não sei."));
        let engine = engine(Vec::new(), chat.clone()).await;
        let mut session = ConversationSession::new();

        let response = engine.submit(&mut session, "qualquer coisa").await.unwrap();

        assert!(!response.is_grounded());
        assert!(chat
            .last_user_message()
            .unwrap()
            .contains("não tem informações relevantes"));
        assert_eq!(session.all()[0].query, "qualquer coisa");
        assert_eq!(session.all()[0].response, "Não sei.");
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected_without_side_effects() {
        let chat = Arc::new(StubChat::replying("unused"));
        let engine = engine(vec![Record::new("a", "b")], chat.clone()).await;
        let mut session = ConversationSession::new();

        for query in ["", "   ", "\t\n"] {
            let err = engine.submit(&mut session, query).await.unwrap_err();
            assert!(matches!(err, FaqbotError::Validation(_)));
        }

        assert_eq!(chat.call_count(), 0);
        assert!(session.is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_records_nothing() {
        let chat = Arc::new(StubChat::failing("503 Service Unavailable"));
        let engine = engine(vec![Record::new("a", "b")], chat.clone()).await;
        let mut session = ConversationSession::new();

        let err = engine.submit(&mut session, "a").await.unwrap_err();

        assert!(matches!(err, FaqbotError::Service(_)));
        assert_eq!(chat.call_count(), 1);
        assert!(session.is_empty());
    }

    #[tokio::test]
    async fn test_empty_index_never_calls_embedder() {
        let chat = Arc::new(StubChat::replying("unused"));
        let index = KnowledgeIndex::build(Vec::new(), Arc::new(FailingEmbedder))
            .await
            .unwrap();
        let engine = RagEngine::new(Arc::new(index), chat.clone(), PromptComposer::default());
        let mut session = ConversationSession::new();

        // Empty index short-circuits before the embedder is called
        engine.submit(&mut session, "oi").await.unwrap();
        assert_eq!(chat.call_count(), 1);
    }

    #[tokio::test]
    async fn test_session_order_after_many_submissions() {
        let chat = Arc::new(StubChat::replying("ok"));
        let engine = engine(vec![Record::new("a", "b")], chat.clone()).await;
        let mut session = ConversationSession::new();

        let queries = ["primeira", "segunda", "terceira", "quarta"];
        for query in queries {
            engine.submit(&mut session, query).await.unwrap();
        }
        engine.submit(&mut session, "  ").await.unwrap_err();

        let recorded: Vec<_> = session.all().iter().map(|e| e.query.as_str()).collect();
        assert_eq!(recorded, vec!["quarta", "terceira", "segunda", "primeira"]);
    }

    #[tokio::test]
    async fn test_top_k_limits_sources() {
        let chat = Arc::new(StubChat::replying("ok"));
        let records = (0..12)
            .map(|i| Record::new(format!("pergunta {}", i), format!("resposta {}", i)))
            .collect();
        let engine = engine(records, chat).await;

        assert_eq!(engine.ask("pergunta").await.unwrap().sources.len(), DEFAULT_TOP_K);

        let engine = engine.with_top_k(3);
        assert_eq!(engine.ask("pergunta").await.unwrap().sources.len(), 3);
    }
}
