use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Shown in place of a reply whenever the provider fails.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm currently experiencing technical difficulties. Please try again shortly.";

pub type ReplyFuture = Pin<Box<dyn Future<Output = Result<String, AssistantError>> + Send + 'static>>;

/// Text generation backend: one prompt in, one reply out.
pub trait AssistantProvider: Send + Sync {
    fn complete(&self, prompt: String) -> ReplyFuture;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    Request(String),
    EmptyResponse,
}

impl fmt::Display for AssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistantError::Request(msg) => write!(f, "assistant request failed: {}", msg),
            AssistantError::EmptyResponse => write!(f, "assistant returned an empty response"),
        }
    }
}

impl std::error::Error for AssistantError {}

/// Collapses a provider result into the text shown in the chat.
pub fn reply_or_fallback(result: Result<String, AssistantError>) -> String {
    match result {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            tracing::warn!(error = %AssistantError::EmptyResponse, "assistant fallback");
            FALLBACK_REPLY.to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "assistant fallback");
            FALLBACK_REPLY.to_string()
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/assistant.rs"]
mod tests;
