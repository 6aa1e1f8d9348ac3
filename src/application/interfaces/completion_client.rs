use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CompletionRequest;

/// Why a completion call produced no text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("completion endpoint timed out")]
    Timeout,

    #[error("completion endpoint unreachable: {0}")]
    Connection(String),

    #[error("completion endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed completion response: {0}")]
    MalformedBody(String),

    #[error("completion request failed: {0}")]
    Transport(String),
}

impl CompletionError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

/// Sends a prompt to a text-completion LLM and returns the generated text.
///
/// Implementors own transport, serialization and the call timeout; every
/// failure is reported as a [`CompletionError`] kind rather than a panic.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;

    /// Human-readable target, for logging.
    fn endpoint(&self) -> &str;
}
