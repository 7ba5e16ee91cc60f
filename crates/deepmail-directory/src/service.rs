use crate::DirectoryError;
use chrono::{DateTime, Utc};
use deepmail_core::{ManagedUser, Role, UserStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate figures for the admin overview cards. The storage figure is
/// a fixed label, matching the mock data pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub active: usize,
    pub suspended: usize,
    pub storage_label: String,
}

const GLOBAL_STORAGE_LABEL: &str = "256.8 GB";

/// The administrator-editable user directory. Separate from the live
/// session profile; the controller reconciles the two by email.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: Vec<ManagedUser>,
}

impl Directory {
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            users: deepmail_workspace::seed_managed_users(now),
        }
    }

    pub fn from_users(users: Vec<ManagedUser>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[ManagedUser] {
        &self.users
    }

    pub fn get(&self, id: Uuid) -> Option<&ManagedUser> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Reassign a user's role. Returns the updated record so the caller
    /// can run session role sync against it.
    pub fn set_role(&mut self, id: Uuid, role: Role) -> Result<&ManagedUser, DirectoryError> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(DirectoryError::NotFound(id))?;

        tracing::info!(user = %user.email, from = user.role.as_str(), to = role.as_str(), "role change");
        user.role = role;
        Ok(user)
    }

    /// Flip active/suspended. Admin rows have no suspend control in the
    /// console; the service refuses rather than trusting the caller.
    pub fn toggle_status(&mut self, id: Uuid) -> Result<&ManagedUser, DirectoryError> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(DirectoryError::NotFound(id))?;

        if user.role == Role::Admin {
            return Err(DirectoryError::CannotSuspendAdmin);
        }

        user.status = match user.status {
            UserStatus::Active => UserStatus::Suspended,
            UserStatus::Suspended => UserStatus::Active,
        };
        Ok(user)
    }

    pub fn stats(&self) -> DirectoryStats {
        let active = self
            .users
            .iter()
            .filter(|user| user.status == UserStatus::Active)
            .count();

        DirectoryStats {
            total: self.users.len(),
            active,
            suspended: self.users.len() - active,
            storage_label: GLOBAL_STORAGE_LABEL.to_string(),
        }
    }

    /// The console table's search box: case-insensitive name/email match.
    pub fn search(&self, query: &str) -> Vec<&ManagedUser> {
        let needle = query.to_lowercase();
        self.users
            .iter()
            .filter(|user| {
                user.name.to_lowercase().contains(&needle)
                    || user.email.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
