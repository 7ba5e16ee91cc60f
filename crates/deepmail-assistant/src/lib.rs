mod client;
mod error;
mod session;

pub use client::{GeminiClient, GenerativeClient};
pub use error::AssistantError;
pub use session::ChatSession;
