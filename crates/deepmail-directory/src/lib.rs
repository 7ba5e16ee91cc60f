mod error;
mod service;

pub use error::DirectoryError;
pub use service::{Directory, DirectoryStats};
