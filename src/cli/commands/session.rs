//! Interactive session command.

use super::navigator_for;
use crate::cli::Output;
use crate::config::Settings;
use crate::method::Method;
use crate::orchestrator::Navigator;
use crate::transcript::expand_path;
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// One line of user input, interpreted.
#[derive(Debug, PartialEq)]
enum SessionCommand {
    /// Load a transcript file; `None` clears the selection.
    File(Option<String>),
    /// Change the method; `None` shows the current one.
    Method(Option<String>),
    Status,
    Help,
    Exit,
    /// A question to submit: any other line, or the text after `/ask`.
    Ask(String),
}

impl SessionCommand {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            return Some(SessionCommand::Exit);
        }

        let Some(rest) = line.strip_prefix('/') else {
            return Some(SessionCommand::Ask(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim().to_string()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };

        Some(match name {
            "file" | "f" => SessionCommand::File(arg),
            "method" | "m" => SessionCommand::Method(arg),
            "status" | "s" => SessionCommand::Status,
            "ask" | "a" => SessionCommand::Ask(arg.unwrap_or_default()),
            _ => SessionCommand::Help,
        })
    }
}

/// Run the interactive session command.
pub async fn run_session(
    file: Option<String>,
    method: Option<Method>,
    settings: Settings,
) -> Result<()> {
    let mut navigator = navigator_for(&settings, method)?;

    println!("\n{}", style("Transcript Navigator").bold().cyan());
    println!(
        "{}\n",
        style("Type a question to search the transcript, '/help' for commands, or 'exit' to quit.")
            .dim()
    );

    if let Some(file) = file {
        load_file(&mut navigator, Some(file)).await;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("?").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let Some(command) = SessionCommand::parse(&input) else {
            continue;
        };
        debug!("Session command: {:?}", command);

        match command {
            SessionCommand::Exit => {
                Output::info("Goodbye!");
                break;
            }
            SessionCommand::Help => print_help(),
            SessionCommand::Status => print_status(&navigator),
            SessionCommand::File(path) => load_file(&mut navigator, path).await,
            SessionCommand::Method(None) => {
                Output::kv("Method", navigator.state().method.label());
            }
            SessionCommand::Method(Some(name)) => match name.parse::<Method>() {
                Ok(method) => {
                    navigator.set_method(method);
                    Output::success(&format!("Method set to {}", method));
                }
                Err(e) => Output::warning(&e),
            },
            SessionCommand::Ask(question) => {
                navigator.set_question(question);

                let spinner = Output::spinner("Processing...");
                // Failures are recorded in the navigator state and rendered below.
                let _ = navigator.submit().await;
                spinner.finish_and_clear();

                Output::rendering(&navigator.rendering());
            }
        }
    }

    Ok(())
}

async fn load_file(navigator: &mut Navigator, path: Option<String>) {
    let path = path.map(|p| expand_path(&p));
    match navigator.select_file(path.as_deref()).await {
        Ok(()) => match &navigator.state().transcript.file_name {
            Some(name) => Output::success(&format!("Selected: {}", name)),
            None => Output::info("Transcript cleared."),
        },
        Err(_) => Output::rendering(&navigator.rendering()),
    }
}

fn print_status(navigator: &Navigator) {
    let state = navigator.state();
    Output::kv(
        "File",
        state.transcript.file_name.as_deref().unwrap_or("(none)"),
    );
    Output::kv("Method", state.method.label());
    Output::kv(
        "Question",
        if state.question.is_empty() {
            "(none)"
        } else {
            &state.question
        },
    );
}

fn print_help() {
    Output::header("Commands");
    Output::kv("/file <path>", "load a .txt or .srt transcript");
    Output::kv("/file", "clear the loaded transcript");
    Output::kv("/method <name>", "choose llm2 or tfidf");
    Output::kv("/status", "show the current file, method and question");
    Output::kv("/ask <question>", "submit a question that starts with '/' or is 'exit'");
    Output::kv("exit", "leave the session");
    println!();
}
