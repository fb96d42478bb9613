//! Typed state container for AI analysis requests.
//!
//! Explicit state, action, and reducer types per slice. Transitions are
//! pure functions from (state, action) to a new state; the store only owns
//! the current snapshot.

use serde_json::Value;

use crate::ai::AiClient;

/// Lifecycle of an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// No request issued yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Last request completed with a response.
    Succeeded,
    /// Last request failed.
    Failed,
}

/// State slice for the AI collaborator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AiState {
    /// Current request lifecycle position.
    pub status: RequestStatus,
    /// Failure message of the last rejected request.
    pub error: Option<String>,
    /// Messages returned by the last successful request.
    pub messages: Vec<Value>,
}

/// Transitions applied to [`AiState`].
#[derive(Debug, Clone)]
pub enum AiAction {
    /// A request was issued.
    AnalyzePending,
    /// The request completed with these messages.
    AnalyzeFulfilled(Vec<Value>),
    /// The request failed with this message.
    AnalyzeRejected(String),
}

/// Pure transition from the current state and an action to the next state.
pub fn reduce(state: &AiState, action: AiAction) -> AiState {
    match action {
        AiAction::AnalyzePending => AiState {
            status: RequestStatus::Loading,
            error: None,
            messages: state.messages.clone(),
        },
        AiAction::AnalyzeFulfilled(messages) => AiState {
            status: RequestStatus::Succeeded,
            error: None,
            messages,
        },
        AiAction::AnalyzeRejected(message) => AiState {
            status: RequestStatus::Failed,
            error: Some(message),
            messages: state.messages.clone(),
        },
    }
}

/// Store owning the AI slice and driving requests through it.
#[derive(Default)]
pub struct Store {
    ai: AiState,
}

impl Store {
    /// The current AI slice snapshot.
    pub fn ai(&self) -> &AiState {
        &self.ai
    }

    /// Apply one action to the AI slice.
    pub fn dispatch(&mut self, action: AiAction) {
        debug!("dispatching {action:?}");
        self.ai = reduce(&self.ai, action);
    }

    /// Run one analysis request through pending/fulfilled/rejected.
    ///
    /// Transport and HTTP failures land in [`AiState::error`] rather than
    /// propagating; the returned state reflects the final status.
    pub async fn analyze_file(&mut self, client: &AiClient, prompt: &str, file: &str) -> &AiState {
        self.dispatch(AiAction::AnalyzePending);
        match client.analyze(prompt, file).await {
            Ok(body) => {
                let messages = match body {
                    Value::Array(items) => items,
                    other => vec![other],
                };
                self.dispatch(AiAction::AnalyzeFulfilled(messages));
            }
            Err(e) => self.dispatch(AiAction::AnalyzeRejected(format!("{e:#}"))),
        }
        &self.ai
    }
}
