//! Interactive chat command.

use super::prepare;
use crate::cli::preflight::Operation;
use crate::cli::Output;
use crate::config::Settings;
use crate::error::FaqbotError;
use crate::session::ConversationSession;
use console::style;
use std::io::{self, BufRead, Write};

/// Run the interactive chat command.
pub async fn run_chat(settings: Settings) -> anyhow::Result<()> {
    let blank_query_warning = settings.ui.blank_query_warning.clone();
    let title = settings.ui.title.clone();
    let orchestrator = prepare(Operation::Chat, settings).await?;
    let engine = orchestrator.engine();
    let mut session = ConversationSession::new();

    println!("\n{}", style(&title).bold().cyan());
    println!(
        "{}\n",
        style("Type your question, 'history' to list past answers, or 'exit' to quit.").dim()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("Pergunta:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim_end_matches(&['\r', '\n'][..]);

        match input.trim() {
            cmd if cmd.eq_ignore_ascii_case("exit") || cmd.eq_ignore_ascii_case("quit") => {
                Output::info("Goodbye!");
                break;
            }
            cmd if cmd.eq_ignore_ascii_case("history") => {
                if session.is_empty() {
                    Output::info("No questions asked yet.");
                }
                for entry in session.all() {
                    Output::exchange(&entry.asked_at_display(), &entry.query, &entry.response);
                }
                continue;
            }
            _ => {}
        }

        let spinner = Output::spinner("Thinking...");
        let result = engine.submit(&mut session, input).await;
        spinner.finish_and_clear();

        match result {
            Ok(response) => {
                if !response.is_grounded() {
                    println!("{}", style("(no stored question matched)").dim());
                }
                println!("\n{} {}\n", style("Resposta:").cyan().bold(), response.answer);
            }
            Err(FaqbotError::Validation(_)) => {
                Output::warning(&blank_query_warning);
            }
            Err(e) if e.is_fatal() => {
                Output::error(&format!("{}", e));
                return Err(e.into());
            }
            Err(e) => {
                Output::error(&format!("Error: {}", e));
            }
        }
    }

    Ok(())
}
