use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("no managed user with id {0}")]
    NotFound(Uuid),
    #[error("administrator accounts cannot be suspended")]
    CannotSuspendAdmin,
}
