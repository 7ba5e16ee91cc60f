use crate::ConfigError;
use deepmail_core::UserProfile;
use std::fs;
use std::path::{Path, PathBuf};

/// The one persisted record: the logged-in session profile, stored as a
/// flat JSON object. Written on login, removed on logout. No versioning
/// or migration handling.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("profile.json"),
        }
    }

    pub fn load(&self) -> Result<Option<UserProfile>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn save(&self, profile: &UserProfile) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, content)?;
        tracing::debug!(email = %profile.email, "persisted session profile");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), ConfigError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
