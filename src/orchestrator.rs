//! Request orchestration for tnav.
//!
//! Owns the navigator state and drives it through file loads and answer
//! requests. Every change goes through [`NavigatorState::apply`].

use crate::error::{NavigatorError, Result};
use crate::method::Method;
use crate::presenter::{render, Rendering};
use crate::service::{AnswerRequest, AnswerResult, AnsweringService};
use crate::state::{Event, NavigatorState};
use crate::transcript::{read_transcript, LoadedTranscript};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// A submission that passed validation and is waiting for the service.
#[derive(Debug, Clone)]
pub struct PendingSubmit {
    /// Attempt token; only the latest attempt's completion is applied.
    pub attempt: u64,
    pub request: AnswerRequest,
}

/// Ties together the form, the answering service and the result.
pub struct Navigator {
    state: NavigatorState,
    service: Arc<dyn AnsweringService>,
}

impl Navigator {
    /// Create an idle navigator that sends requests to `service`.
    pub fn new(service: Arc<dyn AnsweringService>, method: Method) -> Self {
        Self {
            state: NavigatorState::with_method(method),
            service,
        }
    }

    /// Current state.
    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    /// What the result area shows right now.
    pub fn rendering(&self) -> Rendering {
        render(&self.state)
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.state.apply(Event::QuestionChanged(question.into()));
    }

    pub fn set_method(&mut self, method: Method) {
        self.state.apply(Event::MethodChanged(method));
    }

    /// Start a file selection and return its load token.
    pub fn begin_load(&mut self) -> u64 {
        let token = self.state.next_load_token();
        self.state.apply(Event::FileSelected { token });
        token
    }

    /// Apply the outcome of the read started with `token`.
    ///
    /// Returns `false` if a newer selection superseded it.
    pub fn complete_load(&mut self, token: u64, outcome: &Result<LoadedTranscript>) -> bool {
        match outcome {
            Ok(loaded) => self.state.apply(Event::FileLoaded {
                token,
                file_name: loaded.file_name.clone(),
                text: loaded.text.clone(),
            }),
            Err(e) => {
                warn!("Transcript read failed: {}", e);
                self.state.apply(Event::FileLoadFailed { token })
            }
        }
    }

    /// Select a file and read it. `None` is a cancelled selection.
    #[instrument(skip(self))]
    pub async fn select_file(&mut self, path: Option<&Path>) -> Result<()> {
        let Some(path) = path else {
            let token = self.state.next_load_token();
            self.state.apply(Event::SelectionCleared { token });
            return Ok(());
        };

        let token = self.begin_load();
        let outcome = read_transcript(path).await;
        self.complete_load(token, &outcome);

        outcome.map(|loaded| {
            info!("Loaded transcript {} ({} bytes)", loaded.file_name, loaded.text.len());
        })
    }

    /// Validate the form and enter the loading state.
    ///
    /// Fails with [`NavigatorError::Busy`] while a request is in flight, in
    /// which case nothing changes. Validation failures are recorded as the
    /// current error message.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit> {
        if self.state.is_loading() {
            return Err(NavigatorError::Busy);
        }

        if let Err(e) = self.state.validate() {
            self.state.apply(Event::SubmitRejected {
                message: e.user_message(),
            });
            return Err(e);
        }

        let attempt = self.state.next_attempt();
        self.state.apply(Event::SubmitStarted { attempt });

        Ok(PendingSubmit {
            attempt,
            request: AnswerRequest {
                transcript: self.state.transcript.raw_text.clone(),
                question: self.state.question.clone(),
                method: self.state.method,
            },
        })
    }

    /// Apply the service outcome for `attempt`.
    ///
    /// Returns `false` if the attempt is no longer the latest one.
    pub fn complete_submit(&mut self, attempt: u64, outcome: &Result<AnswerResult>) -> bool {
        match outcome {
            Ok(result) => self.state.apply(Event::SubmitSucceeded {
                attempt,
                result: result.clone(),
            }),
            Err(e) => {
                warn!("Answer request failed: {}", e);
                self.state.apply(Event::SubmitFailed { attempt })
            }
        }
    }

    /// Validate, send the current form to the service and record the outcome.
    #[instrument(skip(self), fields(method = %self.state.method))]
    pub async fn submit(&mut self) -> Result<AnswerResult> {
        let pending = self.begin_submit()?;
        let outcome = self.service.answer(&pending.request).await;
        self.complete_submit(pending.attempt, &outcome);
        outcome
    }
}
