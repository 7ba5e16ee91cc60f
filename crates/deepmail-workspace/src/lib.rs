mod drive;
mod error;
mod filter;
mod fixtures;
mod mail;

pub use drive::{DriveStore, GeneralAccess, ShareDraft, SharePermission};
pub use error::WorkspaceError;
pub use filter::{email_matches, entry_matches, filter_emails, filter_entries};
pub use fixtures::{seed_emails, seed_entries, seed_managed_users};
pub use mail::{welcome_email, MailStore, OutgoingMail};
