use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("assistant returned no usable candidate")]
    EmptyResponse,
    #[error("invalid config: {0}")]
    Config(String),
}
