//! Result presentation.

use crate::state::NavigatorState;

/// What the result area should show for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    /// Nothing to show yet.
    Empty,
    /// The last attempt failed.
    Error { message: String },
    /// The last attempt succeeded.
    Answer {
        /// Method reported by the service, uppercased.
        label: String,
        chunk: String,
        timestamp: String,
    },
}

/// Pick the rendering for the current state. An error takes precedence.
pub fn render(state: &NavigatorState) -> Rendering {
    if let Some(message) = &state.error {
        return Rendering::Error {
            message: message.clone(),
        };
    }

    match &state.result {
        Some(result) => Rendering::Answer {
            label: result.method_used.to_uppercase(),
            chunk: result.chunk.clone(),
            timestamp: result.timestamp.clone(),
        },
        None => Rendering::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::AnswerResult;
    use crate::state::Event;

    fn with_answer(method_used: &str) -> NavigatorState {
        let mut state = NavigatorState::default();
        state.apply(Event::SubmitStarted { attempt: 1 });
        state.apply(Event::SubmitSucceeded {
            attempt: 1,
            result: AnswerResult {
                timestamp: "00:01:23".to_string(),
                chunk: "relevant text".to_string(),
                method_used: method_used.to_string(),
            },
        });
        state
    }

    #[test]
    fn test_empty_state_renders_nothing() {
        assert_eq!(render(&NavigatorState::default()), Rendering::Empty);
    }

    #[test]
    fn test_answer_uses_uppercased_service_method() {
        assert_eq!(
            render(&with_answer("llm2")),
            Rendering::Answer {
                label: "LLM2".to_string(),
                chunk: "relevant text".to_string(),
                timestamp: "00:01:23".to_string(),
            }
        );
    }

    #[test]
    fn test_reported_method_is_not_reconciled() {
        let mut state = with_answer("tfidf");
        state.method = crate::method::Method::Llm2;
        match render(&state) {
            Rendering::Answer { label, .. } => assert_eq!(label, "TFIDF"),
            other => panic!("expected answer, got {:?}", other),
        }
    }

    #[test]
    fn test_error_renders_message() {
        let mut state = NavigatorState::default();
        state.apply(Event::SubmitRejected {
            message: "Please upload a transcript file.".to_string(),
        });
        assert_eq!(
            render(&state),
            Rendering::Error {
                message: "Please upload a transcript file.".to_string()
            }
        );
    }
}
