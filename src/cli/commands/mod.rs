//! CLI command implementations.

mod chat;
mod config;
mod search;
mod serve;

pub use chat::run_chat;
pub use config::run_config;
pub use search::run_search;
pub use serve::run_serve;

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Check requirements, load the records and build the index.
///
/// Any failure here is fatal: it is printed and returned.
async fn prepare(operation: Operation, settings: Settings) -> Result<Orchestrator> {
    if let Err(e) = preflight::check(operation, &settings) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let spinner = Output::spinner("Indexing questions...");
    let result = Orchestrator::new(settings).await;
    spinner.finish_and_clear();

    match result {
        Ok(orchestrator) => {
            Output::success(&format!(
                "Indexed {} questions",
                orchestrator.index().len()
            ));
            Ok(orchestrator)
        }
        Err(e) => {
            Output::error(&format!("Startup failed: {}", e));
            Err(e.into())
        }
    }
}
