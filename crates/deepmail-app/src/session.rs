use deepmail_core::{AuthProvider, Role, UserProfile};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated verification delay for a direct credential login.
pub const CREDENTIAL_LOGIN_DELAY: Duration = Duration::from_millis(1500);
/// Simulated delay when picking a federated account.
pub const FEDERATED_LOGIN_DELAY: Duration = Duration::from_millis(1000);
/// The splash screen runs for this long before the session goes live.
pub const SPLASH_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    LoggedOut,
    Authenticating,
    SplashTransition,
    LoggedIn,
}

impl Default for SessionPhase {
    fn default() -> Self {
        Self::LoggedOut
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A federated account chooser entry.
#[derive(Debug, Clone)]
pub struct FederatedAccount {
    pub name: String,
    pub email: String,
}

/// Every sign-up path lands as an editor; the directory can promote or
/// demote afterwards.
pub(crate) fn profile_from_credentials(credentials: &Credentials) -> UserProfile {
    let name = credentials
        .email
        .split('@')
        .next()
        .filter(|local| !local.is_empty())
        .unwrap_or("User")
        .to_string();

    UserProfile {
        name,
        email: credentials.email.clone(),
        avatar: None,
        provider: AuthProvider::Email,
        role: Role::Editor,
    }
}

pub(crate) fn profile_from_federated(account: &FederatedAccount) -> UserProfile {
    UserProfile {
        name: account.name.clone(),
        email: account.email.clone(),
        avatar: None,
        provider: AuthProvider::Google,
        role: Role::Editor,
    }
}
