/// Static demo passkey. Not a security boundary: a real deployment swaps
/// this gate for an actual credential check, which is why the comparison
/// lives here and nowhere else.
const ADMIN_PASSKEY: &str = "deepmail-admin-2025";

const INVALID_PASSKEY: &str = "Invalid passkey. Access denied.";

/// Gate in front of the admin console. Holds the prompt dialog state:
/// once `verify` succeeds the gate stays open until `reset` (logout).
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    authenticated: bool,
    prompt_open: bool,
    input: String,
    error: Option<String>,
}

impl AdminGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn prompt_open(&self) -> bool {
        self.prompt_open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Returns true when access is already granted; otherwise opens the
    /// passkey prompt and returns false.
    pub fn request_access(&mut self) -> bool {
        if self.authenticated {
            return true;
        }
        self.prompt_open = true;
        false
    }

    /// Exact string comparison against the passkey. On mismatch the error
    /// is set and the input cleared for retry; no attempt counter.
    pub fn verify(&mut self) -> bool {
        if self.input == ADMIN_PASSKEY {
            self.authenticated = true;
            self.prompt_open = false;
            self.error = None;
            self.input.clear();
            true
        } else {
            tracing::warn!("admin gate rejected a passkey attempt");
            self.error = Some(INVALID_PASSKEY.to_string());
            self.input.clear();
            false
        }
    }

    pub fn cancel(&mut self) {
        self.prompt_open = false;
        self.input.clear();
        self.error = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
