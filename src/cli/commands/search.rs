//! Search command implementation.

use super::prepare;
use crate::cli::preflight::Operation;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the search command.
pub async fn run_search(query: &str, limit: Option<usize>, settings: Settings) -> Result<()> {
    let limit = limit.unwrap_or(settings.retrieval.top_k);
    let orchestrator = prepare(Operation::Chat, settings).await?;
    if orchestrator.index().is_empty() {
        Output::warning("The data source has no records to search.");
        return Ok(());
    }

    let spinner = Output::spinner("Searching...");
    let results = orchestrator.index().search(query, limit).await;
    spinner.finish_and_clear();

    match results {
        Ok(results) if results.is_empty() => {
            Output::warning("No stored question matches your query.");
        }
        Ok(results) => {
            Output::success(&format!("Found {} results", results.len()));
            for (i, result) in results.iter().enumerate() {
                Output::search_result(
                    i + 1,
                    &result.record.question,
                    &result.record.answer,
                    result.score,
                );
            }
        }
        Err(e) => {
            Output::error(&format!("Search failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
