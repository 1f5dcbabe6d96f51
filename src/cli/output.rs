//! CLI output formatting utilities.

use crate::presenter::Rendering;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print the result area.
    pub fn rendering(rendering: &Rendering) {
        match rendering {
            Rendering::Empty => {}
            Rendering::Error { message } => {
                eprintln!("\n{}", style("Error").red().bold());
                eprintln!("  {}", message);
            }
            Rendering::Answer {
                label,
                chunk,
                timestamp,
            } => {
                Output::header(&format!("Answer ({})", label));
                println!("\n{}", style("Relevant Chunk:").dim());
                println!("  {}", chunk);
                println!("\n{}", style("Timestamp:").dim());
                println!("  {}", style(timestamp).cyan());
                println!();
            }
        }
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}
