//! CLI module for faqbot.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// faqbot - question answering over a spreadsheet of FAQs
///
/// Loads question/answer pairs, indexes them by similarity and answers
/// queries with a language model grounded on the closest matches.
#[derive(Parser, Debug)]
#[command(name = "faqbot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the chat page over HTTP (default)
    Serve {
        /// Host to bind to (overrides ui.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides ui.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Start an interactive chat session in the terminal
    Chat,

    /// Show which stored questions a query retrieves, without asking the model
    Search {
        /// Search query
        query: String,

        /// Maximum number of results (defaults to retrieval.top_k)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
