//! CLI command implementations.

mod ask;
mod config;
mod doctor;
mod session;

pub use ask::run_ask;
pub use config::run_config;
pub use doctor::run_doctor;
pub use session::run_session;

use crate::config::Settings;
use crate::method::Method;
use crate::orchestrator::Navigator;
use crate::service::HttpAnsweringService;
use std::sync::Arc;
use tracing::debug;

/// Build a navigator talking to the configured answering service.
fn navigator_for(settings: &Settings, method: Option<Method>) -> crate::Result<Navigator> {
    let service = HttpAnsweringService::new(&settings.service.url, settings.service.timeout())?;
    debug!("Answering service endpoint: {}", service.endpoint());

    let method = method.unwrap_or(settings.session.default_method);
    Ok(Navigator::new(Arc::new(service), method))
}
