use chrono::{DateTime, Duration, TimeZone, Utc};
use deepmail_core::{
    Attachment, DriveEntry, Email, FileKind, MailboxFolder, ManagedUser, Role, UserStatus,
};
use uuid::Uuid;

/// Seed data. Everything here is created once at startup; relative
/// timestamps are offsets from the injected `now` so the mock inbox always
/// looks fresh.
pub fn seed_emails(now: DateTime<Utc>) -> Vec<Email> {
    vec![
        Email {
            id: Uuid::from_u128(0x01),
            sender: "Alex Rivera".to_string(),
            recipient: "me@deepmail.com".to_string(),
            subject: "Project Proposal: Q4 Scaling".to_string(),
            body: "Hi Team,\n\nI have attached the updated Q4 scaling proposal for your \
                   review. We need to finalize this by Friday.\n\nBest regards,\nAlex"
                .to_string(),
            timestamp: now - Duration::minutes(30),
            read: false,
            folder: MailboxFolder::Inbox,
            attachments: vec![Attachment {
                id: Uuid::from_u128(0xA1),
                file_name: "Q4_Proposal.pdf".to_string(),
                size_label: "2.4 MB".to_string(),
                mime_type: "application/pdf".to_string(),
                reference: "#".to_string(),
            }],
            starred: true,
            thread_id: "thread-1".to_string(),
        },
        Email {
            id: Uuid::from_u128(0x02),
            sender: "GitHub".to_string(),
            recipient: "me@deepmail.com".to_string(),
            subject: "[Security Alert] Unusual login activity detected".to_string(),
            body: "A login to your account was detected from a new location: San \
                   Francisco, CA.\n\nIf this was you, you can safely ignore this email."
                .to_string(),
            timestamp: now - Duration::hours(2),
            read: true,
            folder: MailboxFolder::Inbox,
            attachments: vec![],
            starred: false,
            thread_id: "thread-2".to_string(),
        },
        Email {
            id: Uuid::from_u128(0x03),
            sender: "DeepMail Support".to_string(),
            recipient: "me@deepmail.com".to_string(),
            subject: "Welcome to DeepMail!".to_string(),
            body: "Welcome! Explore your new unified workspace where your emails and \
                   files live together."
                .to_string(),
            timestamp: now - Duration::hours(24),
            read: true,
            folder: MailboxFolder::Inbox,
            attachments: vec![],
            starred: false,
            thread_id: "thread-3".to_string(),
        },
    ]
}

pub fn seed_entries(now: DateTime<Utc>) -> Vec<DriveEntry> {
    vec![
        DriveEntry {
            id: Uuid::from_u128(0xF1),
            name: "Business Strategy 2024".to_string(),
            kind: FileKind::File,
            extension: Some("pdf".to_string()),
            size_label: "4.5 MB".to_string(),
            owner: "Me".to_string(),
            modified: now - Duration::hours(5),
            starred: true,
            shared: false,
            tags: vec!["Work".to_string(), "Important".to_string()],
            parent_id: None,
        },
        DriveEntry {
            id: Uuid::from_u128(0xF2),
            name: "Vacation Photos".to_string(),
            kind: FileKind::Folder,
            extension: None,
            size_label: "128 MB".to_string(),
            owner: "Me".to_string(),
            modified: now - Duration::hours(48),
            starred: false,
            shared: true,
            tags: vec!["Personal".to_string()],
            parent_id: None,
        },
        DriveEntry {
            id: Uuid::from_u128(0xF3),
            name: "Logo_Final_v2".to_string(),
            kind: FileKind::File,
            extension: Some("png".to_string()),
            size_label: "1.2 MB".to_string(),
            owner: "Me".to_string(),
            modified: now - Duration::hours(12),
            starred: false,
            shared: false,
            tags: vec!["Design".to_string()],
            parent_id: None,
        },
    ]
}

pub fn seed_managed_users(now: DateTime<Utc>) -> Vec<ManagedUser> {
    vec![
        ManagedUser {
            id: Uuid::from_u128(0xB1),
            name: "John Doe".to_string(),
            email: "john.doe@gmail.com".to_string(),
            status: UserStatus::Active,
            storage_used: "12.4 GB".to_string(),
            joined_at: date(2023, 1, 15, now),
            last_active_at: now,
            role: Role::Editor,
        },
        ManagedUser {
            id: Uuid::from_u128(0xB2),
            name: "Sarah Connor".to_string(),
            email: "s.connor@sky.net".to_string(),
            status: UserStatus::Active,
            storage_used: "45.2 GB".to_string(),
            joined_at: date(2023, 5, 20, now),
            last_active_at: now - Duration::hours(2),
            role: Role::Manager,
        },
        ManagedUser {
            id: Uuid::from_u128(0xB3),
            name: "Marcus Wright".to_string(),
            email: "m.wright@resistance.org".to_string(),
            status: UserStatus::Suspended,
            storage_used: "2.1 GB".to_string(),
            joined_at: date(2024, 2, 10, now),
            last_active_at: now - Duration::days(5),
            role: Role::Viewer,
        },
        ManagedUser {
            id: Uuid::from_u128(0xB4),
            name: "Administrator".to_string(),
            email: "admin@deepmail.com".to_string(),
            status: UserStatus::Active,
            storage_used: "0.5 GB".to_string(),
            joined_at: date(2022, 12, 1, now),
            last_active_at: now,
            role: Role::Admin,
        },
    ]
}

fn date(year: i32, month: u32, day: u32, fallback: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_collections_have_expected_shape() {
        let now = Utc::now();
        let emails = seed_emails(now);
        assert_eq!(emails.len(), 3);
        assert!(emails.iter().all(|e| e.folder == MailboxFolder::Inbox));
        assert_eq!(emails[0].attachments.len(), 1);

        let entries = seed_entries(now);
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|f| !f.name.is_empty()));

        let users = seed_managed_users(now);
        assert_eq!(users.len(), 4);
        assert_eq!(
            users.iter().filter(|u| u.status == UserStatus::Active).count(),
            3
        );
    }
}
