//! Navigator state and its transition function.
//!
//! All mutation of the form, submission and result fields goes through
//! [`NavigatorState::apply`], one [`Event`] at a time. Each transition that
//! concludes an attempt sets exactly one of the error message or the answer,
//! so the two are never visible together.

use crate::error::{NavigatorError, FILE_READ_MESSAGE, REQUEST_FAILURE_MESSAGE};
use crate::method::Method;
use crate::service::AnswerResult;
use tracing::debug;

/// The transcript currently loaded into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptSource {
    /// Full decoded text of the file.
    pub raw_text: String,
    /// Name of the file the text came from.
    pub file_name: Option<String>,
}

impl TranscriptSource {
    fn clear(&mut self) {
        self.raw_text.clear();
        self.file_name = None;
    }
}

/// Whether a request to the answering service is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
}

/// Something that happened to the navigator.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A file was chosen and a read for it has started.
    FileSelected { token: u64 },
    /// The read for `token` finished and decoded as text.
    FileLoaded {
        token: u64,
        file_name: String,
        text: String,
    },
    /// The read for `token` failed.
    FileLoadFailed { token: u64 },
    /// The selection was cancelled or emptied.
    SelectionCleared { token: u64 },
    QuestionChanged(String),
    MethodChanged(Method),
    /// Validation refused a submission.
    SubmitRejected { message: String },
    SubmitStarted { attempt: u64 },
    SubmitSucceeded { attempt: u64, result: AnswerResult },
    SubmitFailed { attempt: u64 },
}

/// The single mutable state bundle owned by a navigator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigatorState {
    pub transcript: TranscriptSource,
    pub question: String,
    pub method: Method,
    pub submission: SubmissionState,
    pub result: Option<AnswerResult>,
    pub error: Option<String>,
    latest_load: u64,
    latest_attempt: u64,
}

impl NavigatorState {
    /// Create an idle state with the given method preselected.
    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.submission == SubmissionState::Loading
    }

    /// Token to attach to the next file selection.
    pub fn next_load_token(&self) -> u64 {
        self.latest_load + 1
    }

    /// Token to attach to the next submit attempt.
    pub fn next_attempt(&self) -> u64 {
        self.latest_attempt + 1
    }

    /// Check the form is ready to submit. The transcript is checked first.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.transcript.raw_text.is_empty() {
            return Err(NavigatorError::MissingTranscript);
        }
        if self.question.is_empty() {
            return Err(NavigatorError::MissingQuestion);
        }
        Ok(())
    }

    /// Apply an event. Returns `false` when the event was a stale completion
    /// and was discarded without changing anything.
    pub fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::FileSelected { token } => {
                self.latest_load = self.latest_load.max(token);
            }
            Event::FileLoaded {
                token,
                file_name,
                text,
            } => {
                if token != self.latest_load {
                    debug!(token, latest = self.latest_load, "Discarding stale file load");
                    return false;
                }
                self.transcript = TranscriptSource {
                    raw_text: text,
                    file_name: Some(file_name),
                };
                self.error = None;
                self.result = None;
            }
            Event::FileLoadFailed { token } => {
                if token != self.latest_load {
                    debug!(token, latest = self.latest_load, "Discarding stale file failure");
                    return false;
                }
                self.transcript.clear();
                self.result = None;
                self.error = Some(FILE_READ_MESSAGE.to_string());
            }
            Event::SelectionCleared { token } => {
                self.latest_load = self.latest_load.max(token);
                self.transcript.clear();
            }
            Event::QuestionChanged(question) => {
                self.question = question;
            }
            Event::MethodChanged(method) => {
                self.method = method;
            }
            Event::SubmitRejected { message } => {
                self.result = None;
                self.error = Some(message);
            }
            Event::SubmitStarted { attempt } => {
                self.latest_attempt = self.latest_attempt.max(attempt);
                self.submission = SubmissionState::Loading;
                self.error = None;
                self.result = None;
            }
            Event::SubmitSucceeded { attempt, result } => {
                if attempt != self.latest_attempt {
                    debug!(attempt, latest = self.latest_attempt, "Discarding stale answer");
                    return false;
                }
                self.submission = SubmissionState::Idle;
                self.error = None;
                self.result = Some(result);
            }
            Event::SubmitFailed { attempt } => {
                if attempt != self.latest_attempt {
                    debug!(attempt, latest = self.latest_attempt, "Discarding stale failure");
                    return false;
                }
                self.submission = SubmissionState::Idle;
                self.result = None;
                self.error = Some(REQUEST_FAILURE_MESSAGE.to_string());
            }
        }
        true
    }
}
