//! Doctor command - verify configuration and answering service connectivity.

use crate::cli::Output;
use crate::config::Settings;
use crate::service::HttpAnsweringService;
use console::style;
use std::path::Path;
use std::time::Duration;

/// How long to wait for the answering service during the connectivity check.
const PROBE_TIMEOUT_SECS: u64 = 5;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub async fn run_doctor(config_path: Option<&Path>, service_url: Option<&str>) -> anyhow::Result<()> {
    Output::header("tnav Doctor");
    println!();
    println!("Checking configuration and answering service...\n");

    let mut checks = Vec::new();

    println!("{}", style("Configuration").bold());
    let default_path = Settings::default_config_path();
    let (settings, config_check) = load_config(config_path.unwrap_or(default_path.as_path()));
    config_check.print();
    checks.push(config_check);
    let settings = settings.with_service_url(service_url);

    println!();

    println!("{}", style("Answering Service").bold());
    let service_checks = check_service(&settings).await;
    for check in &service_checks {
        check.print();
    }
    checks.extend(service_checks);

    println!();

    // Summary
    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before asking questions.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! tnav is ready to use.");
    }

    Ok(())
}

/// Load the config file for the remaining checks.
///
/// A file that fails to parse is reported as an error and the checks go on
/// with default settings.
fn load_config(path: &Path) -> (Settings, CheckResult) {
    if !path.exists() {
        return (
            Settings::default(),
            CheckResult::warning("Config file", "using defaults", "Create with: tnav config edit"),
        );
    }

    match Settings::load_from(Some(&path.to_path_buf())) {
        Ok(settings) => (
            settings,
            CheckResult::ok("Config file", &format!("{}", path.display())),
        ),
        Err(e) => (
            Settings::default(),
            CheckResult::error(
                "Config file",
                &format!("{}", e),
                &format!("Fix with: tnav -c {} config edit", path.display()),
            ),
        ),
    }
}

/// Check the service URL and whether anything answers there.
async fn check_service(settings: &Settings) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let service = match HttpAnsweringService::new(&settings.service.url, settings.service.timeout()) {
        Ok(service) => service,
        Err(e) => {
            results.push(CheckResult::error(
                "Service URL",
                &format!("{}", e),
                "Set [service] url in the config file or pass --service-url",
            ));
            return results;
        }
    };
    results.push(CheckResult::ok("Endpoint", service.endpoint().as_str()));

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            results.push(CheckResult::error("Connectivity", &format!("{}", e), "Check TLS setup"));
            return results;
        }
    };

    // Any HTTP response means the host is up; /answer only accepts POST.
    match client.get(&settings.service.url).send().await {
        Ok(response) => results.push(CheckResult::ok(
            "Connectivity",
            &format!("reachable (HTTP {})", response.status().as_u16()),
        )),
        Err(e) if e.is_timeout() => results.push(CheckResult::error(
            "Connectivity",
            "timed out",
            "Is the answering service running?",
        )),
        Err(_) => results.push(CheckResult::error(
            "Connectivity",
            "unreachable",
            "Start the answering service or point --service-url at it",
        )),
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_ok() {
        let result = CheckResult::ok("test", "passed");
        assert_eq!(result.status, CheckStatus::Ok);
        assert!(result.hint.is_none());
    }

    #[test]
    fn test_missing_config_is_warning() {
        let dir = tempfile::tempdir().unwrap();
        let (_, result) = load_config(&dir.path().join("config.toml"));
        assert_eq!(result.status, CheckStatus::Warning);
    }

    #[test]
    fn test_broken_config_is_error_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[service\nurl = ").unwrap();

        let (settings, result) = load_config(&path);
        assert_eq!(result.status, CheckStatus::Error);
        assert_eq!(settings.service.url, "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_service_checked_despite_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[service\nurl = ").unwrap();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let app = axum::Router::new().route("/", axum::routing::get(|| async { "ok" }));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let (settings, config_check) = load_config(&path);
        let service_checks = check_service(&settings.with_service_url(Some(&url))).await;

        assert_eq!(config_check.status, CheckStatus::Error);
        assert_eq!(service_checks.len(), 2);
        assert!(service_checks.iter().all(|c| c.status == CheckStatus::Ok));
    }

    #[tokio::test]
    async fn test_invalid_service_url() {
        let mut settings = Settings::default();
        settings.service.url = "localhost".to_string();

        let results = check_service(&settings).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, CheckStatus::Error);
    }
}
