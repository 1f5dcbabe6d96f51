//! Ask command implementation.

use super::navigator_for;
use crate::cli::Output;
use crate::config::Settings;
use crate::method::Method;
use crate::presenter::Rendering;
use crate::transcript::expand_path;
use anyhow::Result;

/// Run the ask command.
pub async fn run_ask(
    question: &str,
    file: &str,
    method: Option<Method>,
    settings: Settings,
) -> Result<()> {
    let mut navigator = navigator_for(&settings, method)?;

    let path = expand_path(file);
    if navigator.select_file(Some(&path)).await.is_ok() {
        navigator.set_question(question);

        let spinner = Output::spinner("Processing...");
        // Failures are recorded in the navigator state and rendered below.
        let _ = navigator.submit().await;
        spinner.finish_and_clear();
    }

    let rendering = navigator.rendering();
    Output::rendering(&rendering);

    if matches!(rendering, Rendering::Error { .. }) {
        std::process::exit(1);
    }

    Ok(())
}
