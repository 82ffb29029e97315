//! HTTP front end: one page with a query form and the session history.
//!
//! The process serves a single session. Its history sits behind one async
//! mutex held for the whole submission, so submissions run one at a time.

pub mod page;

pub use page::{Notice, Page};

use crate::error::FaqbotError;
use crate::rag::RagEngine;
use crate::session::ConversationSession;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

/// Shared application state.
pub struct AppState {
    engine: RagEngine,
    page: Page,
    blank_query_warning: String,
    session: Mutex<ConversationSession>,
}

impl AppState {
    pub fn new(engine: RagEngine, page: Page, blank_query_warning: impl Into<String>) -> Self {
        Self {
            engine,
            page,
            blank_query_warning: blank_query_warning.into(),
            session: Mutex::new(ConversationSession::new()),
        }
    }
}

/// Build the router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(show_page).post(submit))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Deserialize)]
struct QueryForm {
    #[serde(default)]
    query: String,
}

async fn show_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let session = state.session.lock().await;
    Html(page::render(&state.page, session.all(), None))
}

async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<QueryForm>,
) -> Html<String> {
    let mut session = state.session.lock().await;

    let notice = match state.engine.submit(&mut session, &form.query).await {
        Ok(_) => None,
        Err(FaqbotError::Validation(_)) => Some(Notice::Warning(state.blank_query_warning.clone())),
        Err(e) => {
            if e.is_fatal() {
                error!("Submission failed: {}", e);
            } else {
                warn!("Submission failed: {}", e);
            }
            Some(Notice::Error(e.to_string()))
        }
    };

    Html(page::render(&state.page, session.all(), notice.as_ref()))
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "records": state.engine.index().len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiSettings;
    use crate::index::KnowledgeIndex;
    use crate::rag::PromptComposer;
    use crate::records::Record;
    use crate::testing::{KeywordEmbedder, StubChat};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    async fn app(chat: Arc<StubChat>) -> Router {
        let index = KnowledgeIndex::build(
            vec![Record::new("Qual o prazo de entrega?", "5 dias úteis")],
            Arc::new(KeywordEmbedder),
        )
        .await
        .unwrap();
        let engine = RagEngine::new(Arc::new(index), chat, PromptComposer::default());
        let page = Page::from_settings(&UiSettings::default());
        router(Arc::new(AppState::new(engine, page, "Por favor, insira uma pergunta.")))
    }

    fn post(query: &str) -> Request<Body> {
        Request::post("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("query={}", query)))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_submission_renders_answer() {
        let chat = Arc::new(StubChat::replying("5 dias úteis."));
        let app = app(chat.clone()).await;

        let response = app.clone().oneshot(post("prazo+de+entrega")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(&ammonia::clean_text("5 dias úteis.")));
        assert!(html.contains(&ammonia::clean_text("prazo de entrega")));

        // History survives across requests
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let html = body_text(response).await;
        assert_eq!(html.matches("class=\"answer\"").count(), 1);
        assert_eq!(chat.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_submission_warns() {
        let chat = Arc::new(StubChat::replying("unused"));
        let app = app(chat.clone()).await;

        let html = body_text(app.oneshot(post("+++")).await.unwrap()).await;

        assert!(html.contains("notice warning"));
        assert!(!html.contains("class=\"answer\""));
        assert_eq!(chat.call_count(), 0);
    }

    #[tokio::test]
    async fn test_service_error_is_shown() {
        let chat = Arc::new(StubChat::failing("upstream timeout"));
        let app = app(chat).await;

        let html = body_text(app.oneshot(post("prazo")).await.unwrap()).await;

        assert!(html.contains("notice error"));
        assert!(!html.contains("class=\"answer\""));
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(Arc::new(StubChat::replying(""))).await;

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["records"], 1);
    }
}
