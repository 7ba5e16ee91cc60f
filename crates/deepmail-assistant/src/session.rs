use crate::AssistantError;
use chrono::{DateTime, Utc};
use deepmail_core::{ChatMessage, ChatRole};

/// Shown in place of a reply when the collaborator call fails; the
/// transcript never drops a turn silently.
const FALLBACK_REPLY: &str =
    "Sorry, I couldn't reach the assistant service. Please try again in a moment.";

/// One conversation with the assistant. Append-only transcript plus a
/// loading flag; session-scoped, never persisted. There is no
/// cancellation: a turn begun here completes (or falls back) whenever the
/// collaborator answers, regardless of what the shell is showing.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
    loading: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record the user turn and enter the loading state. Returns the
    /// prompt to send, or `None` when the input is blank or another turn
    /// is still in flight (the double-submission guard).
    pub fn begin(&mut self, input: &str, now: DateTime<Utc>) -> Option<String> {
        if self.loading || input.trim().is_empty() {
            return None;
        }

        self.history.push(ChatMessage {
            role: ChatRole::User,
            content: input.to_string(),
            timestamp: now,
        });
        self.loading = true;
        Some(input.to_string())
    }

    pub fn complete(&mut self, reply: impl Into<String>, now: DateTime<Utc>) {
        self.history.push(ChatMessage {
            role: ChatRole::Assistant,
            content: reply.into(),
            timestamp: now,
        });
        self.loading = false;
    }

    pub fn fail(&mut self, error: &AssistantError, now: DateTime<Utc>) {
        tracing::warn!(%error, "assistant turn failed, appending fallback reply");
        self.complete(FALLBACK_REPLY, now);
    }
}
