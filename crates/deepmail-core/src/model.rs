use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Privilege tiers, ordered ascending. `Viewer` is read-only; `Editor` and
/// up may mutate mail and drive content; `Admin` manages the directory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Viewer,
    Editor,
    Manager,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Editor => "editor",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    pub const ALL: [Role; 4] = [Role::Viewer, Role::Editor, Role::Manager, Role::Admin];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthProvider {
    Google,
    Email,
}

/// The single logged-in identity record. Persisted as one flat object;
/// distinct from the admin-editable [`ManagedUser`] directory entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub avatar: Option<Url>,
    pub provider: AuthProvider,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Mail,
    Drive,
    Shared,
    Trash,
    Admin,
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::Mail
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MailboxFolder {
    Inbox,
    Sent,
    Drafts,
    Spam,
    Trash,
}

impl Default for MailboxFolder {
    fn default() -> Self {
        Self::Inbox
    }
}

impl MailboxFolder {
    pub const ALL: [MailboxFolder; 5] = [
        MailboxFolder::Inbox,
        MailboxFolder::Sent,
        MailboxFolder::Drafts,
        MailboxFolder::Spam,
        MailboxFolder::Trash,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub id: Uuid,
    pub file_name: String,
    pub size_label: String,
    pub mime_type: String,
    /// Download reference; seed data carries a placeholder.
    pub reference: String,
}

/// A mail record. Belongs to exactly one folder; immutable after creation
/// except the `read` and `starred` flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Email {
    pub id: Uuid,
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub folder: MailboxFolder,
    pub attachments: Vec<Attachment>,
    pub starred: bool,
    pub thread_id: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    File,
    Folder,
}

/// A drive item. `parent_id` records hierarchy but nothing traverses it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DriveEntry {
    pub id: Uuid,
    pub name: String,
    pub kind: FileKind,
    pub extension: Option<String>,
    pub size_label: String,
    pub owner: String,
    pub modified: DateTime<Utc>,
    pub starred: bool,
    pub shared: bool,
    pub tags: Vec<String>,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Suspended,
}

/// An entry in the administrator-editable user directory. Linked to the
/// live session profile only by email equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManagedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub storage_used: String,
    pub joined_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
