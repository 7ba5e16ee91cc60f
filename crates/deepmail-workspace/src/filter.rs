use deepmail_core::{DriveEntry, Email, MailboxFolder};

/// Case-insensitive substring match over subject or sender.
pub fn email_matches(email: &Email, query: &str) -> bool {
    contains_ci(&email.subject, query) || contains_ci(&email.sender, query)
}

/// Case-insensitive substring match over the entry name.
pub fn entry_matches(entry: &DriveEntry, query: &str) -> bool {
    contains_ci(&entry.name, query)
}

/// Visible subset of a mailbox: folder restriction plus the query
/// predicate. Stable — original relative order is preserved, an empty
/// query passes everything through. Plain linear scan; the backing
/// collections are small, static, and in memory, so no index is kept.
pub fn filter_emails<'a>(
    emails: &'a [Email],
    folder: MailboxFolder,
    query: &str,
) -> Vec<&'a Email> {
    emails
        .iter()
        .filter(|email| email.folder == folder && email_matches(email, query))
        .collect()
}

pub fn filter_entries<'a>(entries: &'a [DriveEntry], query: &str) -> Vec<&'a DriveEntry> {
    entries
        .iter()
        .filter(|entry| entry_matches(entry, query))
        .collect()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
