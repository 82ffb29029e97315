//! HTTP server for the chat page.

use super::prepare;
use crate::cli::preflight::Operation;
use crate::cli::Output;
use crate::config::Settings;
use crate::web::{self, AppState, Page};
use std::sync::Arc;

/// Run the HTTP server.
pub async fn run_serve(host: Option<String>, port: Option<u16>, settings: Settings) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| settings.ui.host.clone());
    let port = port.unwrap_or(settings.ui.port);

    let orchestrator = prepare(Operation::Serve, settings).await?;
    let settings = orchestrator.settings();

    let mut page = Page::from_settings(&settings.ui);
    if let Some(logo_path) = settings.logo_path() {
        page = match page.with_logo_file(&logo_path) {
            Ok(page) => page,
            Err(e) => {
                Output::error(&format!("{}", e));
                return Err(e.into());
            }
        };
    }
    let blank_query_warning = settings.ui.blank_query_warning.clone();

    let state = Arc::new(AppState::new(orchestrator.engine(), page, blank_query_warning));
    let app = web::router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("faqbot");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Chat page", "GET  /");
    Output::kv("Ask", "POST /");
    Output::kv("Health", "GET  /health");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}
