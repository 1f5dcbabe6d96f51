//! tnav - Transcript Navigator
//!
//! A terminal client that sends a transcript and a question to an answering
//! service and shows the single most relevant excerpt with its timestamp.
//!
//! # Architecture
//!
//! - `transcript` - Reading transcript files into memory
//! - `state` - Form, submission and result state with its transition function
//! - `service` - The answering service trait and its HTTP client
//! - `orchestrator` - Drives file loads and submissions through the state
//! - `presenter` - Turns state into what the result area shows
//! - `config` - Configuration management
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use tnav::method::Method;
//! use tnav::orchestrator::Navigator;
//! use tnav::service::HttpAnsweringService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = HttpAnsweringService::new("http://localhost:8000", None)?;
//!     let mut navigator = Navigator::new(Arc::new(service), Method::Tfidf);
//!
//!     navigator.select_file(Some(Path::new("meeting.txt"))).await?;
//!     navigator.set_question("When did we agree on the budget?");
//!
//!     let answer = navigator.submit().await?;
//!     println!("[{}] {}", answer.timestamp, answer.chunk);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod method;
pub mod orchestrator;
pub mod presenter;
pub mod service;
pub mod state;
pub mod transcript;

pub use error::{NavigatorError, Result};
