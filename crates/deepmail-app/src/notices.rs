use chrono::{DateTime, Duration, Utc};

/// How long a notice stays up before auto-dismissing.
const NOTICE_TTL_MS: i64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Notice {
    fn posted(message: String, now: DateTime<Utc>) -> Self {
        Self {
            message,
            expires_at: now + Duration::milliseconds(NOTICE_TTL_MS),
        }
    }

    fn live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Transient notifications. At most one error and one success are shown
/// concurrently, each on its own 3-second timer; posting replaces the
/// slot and restarts its deadline.
#[derive(Debug, Clone, Default)]
pub struct NoticeCenter {
    error: Option<Notice>,
    success: Option<Notice>,
}

impl NoticeCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_error(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.error = Some(Notice::posted(message.into(), now));
    }

    pub fn post_success(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.success = Some(Notice::posted(message.into(), now));
    }

    pub fn error(&self, now: DateTime<Utc>) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|notice| notice.live(now))
            .map(|notice| notice.message.as_str())
    }

    pub fn success(&self, now: DateTime<Utc>) -> Option<&str> {
        self.success
            .as_ref()
            .filter(|notice| notice.live(now))
            .map(|notice| notice.message.as_str())
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    /// Drop expired notices. Readers already filter by deadline, so this
    /// only reclaims the slots.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.error.as_ref().is_some_and(|notice| !notice.live(now)) {
            self.error = None;
        }
        if self.success.as_ref().is_some_and(|notice| !notice.live(now)) {
            self.success = None;
        }
    }

    pub fn clear(&mut self) {
        self.error = None;
        self.success = None;
    }
}
