use crate::{filter, WorkspaceError};
use chrono::{DateTime, Utc};
use deepmail_core::{Email, MailboxFolder, UserProfile};
use uuid::Uuid;

/// A message being written. Reply and forward drafts prefill these fields
/// from the original message.
#[derive(Debug, Clone, Default)]
pub struct OutgoingMail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    /// Replies stay on the original thread; everything else starts one.
    pub thread_id: Option<String>,
}

impl OutgoingMail {
    /// Prefill for replying: back to the sender, `Re: ` subject, same
    /// thread.
    pub fn reply_to(original: &Email) -> Self {
        Self {
            recipient: original.sender.clone(),
            subject: prefixed("Re: ", &original.subject),
            body: String::new(),
            thread_id: Some(original.thread_id.clone()),
        }
    }

    /// Prefill for forwarding: empty recipient, `Fwd: ` subject, original
    /// body quoted below, fresh thread.
    pub fn forward_of(original: &Email) -> Self {
        Self {
            recipient: String::new(),
            subject: prefixed("Fwd: ", &original.subject),
            body: format!(
                "\n\n---------- Forwarded message ----------\nFrom: {}\nSubject: {}\n\n{}",
                original.sender, original.subject, original.body
            ),
            thread_id: None,
        }
    }
}

/// In-memory mailbox. Seeded once at startup; mutations vanish on restart.
#[derive(Debug, Clone, Default)]
pub struct MailStore {
    emails: Vec<Email>,
}

impl MailStore {
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            emails: crate::fixtures::seed_emails(now),
        }
    }

    pub fn from_emails(emails: Vec<Email>) -> Self {
        Self { emails }
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn get(&self, id: Uuid) -> Option<&Email> {
        self.emails.iter().find(|email| email.id == id)
    }

    pub fn visible(&self, folder: MailboxFolder, query: &str) -> Vec<&Email> {
        filter::filter_emails(&self.emails, folder, query)
    }

    pub fn unread_count(&self, folder: MailboxFolder) -> usize {
        self.emails
            .iter()
            .filter(|email| email.folder == folder && !email.read)
            .count()
    }

    /// Insert an incoming message at the top of its folder.
    pub fn deliver(&mut self, email: Email) {
        self.emails.insert(0, email);
    }

    pub fn mark_read(&mut self, id: Uuid) -> Result<(), WorkspaceError> {
        let email = self.get_mut(id)?;
        email.read = true;
        Ok(())
    }

    pub fn toggle_star(&mut self, id: Uuid) -> Result<bool, WorkspaceError> {
        let email = self.get_mut(id)?;
        email.starred = !email.starred;
        Ok(email.starred)
    }

    /// File an outgoing message under Sent. Returns the new id.
    pub fn send(
        &mut self,
        outgoing: OutgoingMail,
        sender: &UserProfile,
        now: DateTime<Utc>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let thread_id = outgoing
            .thread_id
            .unwrap_or_else(|| format!("thread-{id}"));

        tracing::info!(recipient = %outgoing.recipient, "filing outgoing mail");
        self.emails.insert(
            0,
            Email {
                id,
                sender: sender.name.clone(),
                recipient: outgoing.recipient,
                subject: outgoing.subject,
                body: outgoing.body,
                timestamp: now,
                read: true,
                folder: MailboxFolder::Sent,
                attachments: vec![],
                starred: false,
                thread_id,
            },
        );
        id
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut Email, WorkspaceError> {
        self.emails
            .iter_mut()
            .find(|email| email.id == id)
            .ok_or(WorkspaceError::NotFound(id))
    }
}

/// The message injected into the Inbox when a login completes.
pub fn welcome_email(profile: &UserProfile, now: DateTime<Utc>) -> Email {
    Email {
        id: Uuid::new_v4(),
        sender: "DeepMail Team".to_string(),
        recipient: profile.email.clone(),
        subject: format!("Welcome to DeepMail, {}!", profile.name),
        body: format!(
            "Hi {name},\n\nWelcome to your new unified intelligence workspace. We've \
             brought together your emails, files, and AI assistant into one seamless \
             experience.\n\nYour assigned role is: {role}.\n\nHappy productivity!\nThe \
             DeepMail Team",
            name = profile.name,
            role = profile.role.as_str().to_ascii_uppercase(),
        ),
        timestamp: now,
        read: false,
        folder: MailboxFolder::Inbox,
        attachments: vec![],
        starred: true,
        thread_id: "welcome-thread".to_string(),
    }
}

fn prefixed(prefix: &str, subject: &str) -> String {
    if subject.starts_with(prefix) {
        subject.to_string()
    } else {
        format!("{prefix}{subject}")
    }
}
