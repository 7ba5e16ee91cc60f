use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("drive entries require a non-empty name")]
    EmptyName,
    #[error("no record with id {0}")]
    NotFound(Uuid),
    #[error("share link error: {0}")]
    Link(#[from] url::ParseError),
}
