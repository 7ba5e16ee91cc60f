use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("a login is already in progress")]
    LoginInProgress,
    #[error("already logged in")]
    AlreadyLoggedIn,
    #[error("no active session")]
    NotLoggedIn,
    #[error(transparent)]
    Config(#[from] deepmail_config::ConfigError),
    #[error(transparent)]
    Workspace(#[from] deepmail_workspace::WorkspaceError),
    #[error(transparent)]
    Directory(#[from] deepmail_directory::DirectoryError),
}
