//! Answering service abstraction.
//!
//! The service receives a full transcript and a question and returns the
//! single most relevant chunk with its timestamp.

mod http;

pub use http::HttpAnsweringService;

use crate::error::Result;
use crate::method::Method;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of `POST /answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRequest {
    pub transcript: String,
    pub question: String,
    pub method: Method,
}

/// Successful response from the answering service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Timestamp of the chunk as written in the transcript (e.g. "00:01:23").
    pub timestamp: String,
    /// The most relevant excerpt.
    pub chunk: String,
    /// Method the service reports having used; may differ from the request.
    pub method_used: String,
}

/// Trait for services that pick a transcript chunk for a question.
#[async_trait]
pub trait AnsweringService: Send + Sync {
    /// Send one request and return the service's answer.
    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerResult>;
}
