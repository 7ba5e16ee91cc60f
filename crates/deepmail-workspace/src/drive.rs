use crate::{filter, WorkspaceError};
use chrono::{DateTime, Utc};
use deepmail_core::{DriveEntry, FileKind};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SharePermission {
    Viewer,
    Editor,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GeneralAccess {
    Restricted,
    Anyone,
}

/// State behind the share dialog: a recipient set, the link permission,
/// and whether the link works for anyone or only invited people.
#[derive(Debug, Clone)]
pub struct ShareDraft {
    entry_id: Uuid,
    recipients: Vec<String>,
    pub permission: SharePermission,
    pub general_access: GeneralAccess,
}

impl ShareDraft {
    pub fn new(entry_id: Uuid) -> Self {
        Self {
            entry_id,
            recipients: Vec::new(),
            permission: SharePermission::Viewer,
            general_access: GeneralAccess::Restricted,
        }
    }

    pub fn entry_id(&self) -> Uuid {
        self.entry_id
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    /// Whitespace is trimmed; empty and duplicate addresses are ignored.
    pub fn add_recipient(&mut self, raw: &str) {
        let address = raw.trim();
        if address.is_empty() {
            return;
        }
        if !self.recipients.iter().any(|existing| existing == address) {
            self.recipients.push(address.to_string());
        }
    }

    pub fn remove_recipient(&mut self, address: &str) {
        self.recipients.retain(|existing| existing != address);
    }

    pub fn link(&self, base: &str) -> Result<Url, WorkspaceError> {
        let raw = format!("{}/{}", base.trim_end_matches('/'), self.entry_id);
        Ok(Url::parse(&raw)?)
    }

    pub fn success_message(&self, entry: &DriveEntry) -> String {
        format!(
            "Successfully shared \"{}\" with {} recipients.",
            entry.name,
            self.recipients.len()
        )
    }
}

/// In-memory drive. Seeded once at startup; mutations vanish on restart.
#[derive(Debug, Clone, Default)]
pub struct DriveStore {
    entries: Vec<DriveEntry>,
}

impl DriveStore {
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            entries: crate::fixtures::seed_entries(now),
        }
    }

    pub fn from_entries(entries: Vec<DriveEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DriveEntry] {
        &self.entries
    }

    pub fn get(&self, id: Uuid) -> Option<&DriveEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn visible(&self, query: &str) -> Vec<&DriveEntry> {
        filter::filter_entries(&self.entries, query)
    }

    pub fn create_folder(
        &mut self,
        name: &str,
        owner: &str,
        now: DateTime<Utc>,
    ) -> Result<Uuid, WorkspaceError> {
        self.add_entry(name, FileKind::Folder, None, "0 KB", owner, now)
    }

    pub fn upload(
        &mut self,
        name: &str,
        size_label: &str,
        owner: &str,
        now: DateTime<Utc>,
    ) -> Result<Uuid, WorkspaceError> {
        let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase());
        self.add_entry(name, FileKind::File, extension, size_label, owner, now)
    }

    pub fn toggle_star(&mut self, id: Uuid) -> Result<bool, WorkspaceError> {
        let entry = self.get_mut(id)?;
        entry.starred = !entry.starred;
        Ok(entry.starred)
    }

    /// Apply a completed share dialog: the entry is flagged shared and the
    /// dialog's success message is returned for the notice center.
    pub fn complete_share(&mut self, draft: &ShareDraft) -> Result<String, WorkspaceError> {
        let entry = self.get_mut(draft.entry_id())?;
        entry.shared = true;
        let message = draft.success_message(entry);
        tracing::info!(entry = %entry.name, recipients = draft.recipients().len(), "shared drive entry");
        Ok(message)
    }

    fn add_entry(
        &mut self,
        name: &str,
        kind: FileKind,
        extension: Option<String>,
        size_label: &str,
        owner: &str,
        now: DateTime<Utc>,
    ) -> Result<Uuid, WorkspaceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkspaceError::EmptyName);
        }

        let id = Uuid::new_v4();
        self.entries.insert(
            0,
            DriveEntry {
                id,
                name: name.to_string(),
                kind,
                extension,
                size_label: size_label.to_string(),
                owner: owner.to_string(),
                modified: now,
                starred: false,
                shared: false,
                tags: vec![],
                parent_id: None,
            },
        );
        Ok(id)
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut DriveEntry, WorkspaceError> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(WorkspaceError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_folder_rejects_blank_names() {
        let mut store = DriveStore::seeded(Utc::now());
        assert!(matches!(
            store.create_folder("   ", "Me", Utc::now()),
            Err(WorkspaceError::EmptyName)
        ));
    }

    #[test]
    fn upload_derives_extension_and_lands_on_top() {
        let mut store = DriveStore::seeded(Utc::now());
        let id = store
            .upload("Quarterly Report.PDF", "1.1 MB", "Me", Utc::now())
            .expect("upload");

        let entry = store.get(id).expect("entry");
        assert_eq!(entry.kind, FileKind::File);
        assert_eq!(entry.extension.as_deref(), Some("pdf"));
        assert_eq!(store.entries()[0].id, id);
    }

    #[test]
    fn share_draft_dedupes_recipients_and_builds_link() {
        let store = DriveStore::seeded(Utc::now());
        let entry = &store.entries()[0];

        let mut draft = ShareDraft::new(entry.id);
        draft.add_recipient(" alex@example.com ");
        draft.add_recipient("alex@example.com");
        draft.add_recipient("");
        draft.add_recipient("sam@example.com");
        assert_eq!(draft.recipients().len(), 2);

        let link = draft.link("https://deepmail.cloud/s").expect("link");
        assert_eq!(
            link.as_str(),
            format!("https://deepmail.cloud/s/{}", entry.id)
        );
    }

    #[test]
    fn completing_a_share_marks_the_entry_and_reports() {
        let mut store = DriveStore::seeded(Utc::now());
        let id = store.entries()[0].id;

        let mut draft = ShareDraft::new(id);
        draft.add_recipient("alex@example.com");
        draft.add_recipient("sam@example.com");

        let message = store.complete_share(&draft).expect("share");
        assert_eq!(
            message,
            "Successfully shared \"Business Strategy 2024\" with 2 recipients."
        );
        assert!(store.get(id).expect("entry").shared);
    }

    #[test]
    fn removing_a_recipient_shrinks_the_set() {
        let mut draft = ShareDraft::new(Uuid::new_v4());
        draft.add_recipient("a@example.com");
        draft.add_recipient("b@example.com");
        draft.remove_recipient("a@example.com");
        assert_eq!(draft.recipients(), ["b@example.com".to_string()]);
    }
}
