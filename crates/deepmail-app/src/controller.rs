use crate::clock::{Clock, SystemClock};
use crate::notices::NoticeCenter;
use crate::session::{
    profile_from_credentials, profile_from_federated, Credentials, FederatedAccount, SessionPhase,
    CREDENTIAL_LOGIN_DELAY, FEDERATED_LOGIN_DELAY, SPLASH_DELAY,
};
use crate::AppError;
use anyhow::Context;
use deepmail_access::{evaluate, Action, AdminGate, Decision};
use deepmail_assistant::{AssistantError, ChatSession, GeminiClient, GenerativeClient};
use deepmail_config::{AppConfig, ConfigManager, ProfileStore};
use deepmail_core::{
    DriveEntry, Email, MailboxFolder, Role, UserProfile, ViewMode,
};
use deepmail_directory::Directory;
use deepmail_workspace::{welcome_email, DriveStore, MailStore, OutgoingMail, ShareDraft};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// The application state behind the shell: session, view state, stores,
/// directory, chat, gate, and notices, with every gated action routed
/// through the central policy evaluator.
pub struct Workspace {
    clock: Arc<dyn Clock>,
    config: AppConfig,
    profiles: ProfileStore,
    assistant: Option<Arc<dyn GenerativeClient>>,

    phase: SessionPhase,
    profile: Option<UserProfile>,
    view: ViewMode,
    mail_folder: MailboxFolder,
    selected_email: Option<Uuid>,
    search_query: String,
    compose_open: bool,

    mail: MailStore,
    drive: DriveStore,
    directory: Directory,
    chat: ChatSession,
    gate: AdminGate,
    notices: NoticeCenter,
}

impl Workspace {
    /// Bootstrap with platform config dirs and the real clock.
    pub fn initialize() -> anyhow::Result<Self> {
        let config_manager = ConfigManager::new().context("initialize config manager")?;
        let config = config_manager.load().context("load app config")?;
        let profiles = ProfileStore::new(config_manager.data_dir());

        let assistant: Option<Arc<dyn GenerativeClient>> = if config.assistant.enabled {
            match GeminiClient::new(
                &config.assistant.api_base,
                &config.assistant.model,
                config.assistant.api_key.clone(),
            ) {
                Ok(client) => Some(Arc::new(client)),
                Err(err) => {
                    tracing::warn!(%err, "assistant unavailable, chat will answer with fallbacks");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self::new(Arc::new(SystemClock), profiles, config, assistant))
    }

    pub fn new(
        clock: Arc<dyn Clock>,
        profiles: ProfileStore,
        config: AppConfig,
        assistant: Option<Arc<dyn GenerativeClient>>,
    ) -> Self {
        let now = clock.now();
        Self {
            clock,
            config,
            profiles,
            assistant,
            phase: SessionPhase::LoggedOut,
            profile: None,
            view: ViewMode::default(),
            mail_folder: MailboxFolder::default(),
            selected_email: None,
            search_query: String::new(),
            compose_open: false,
            mail: MailStore::seeded(now),
            drive: DriveStore::seeded(now),
            directory: Directory::seeded(now),
            chat: ChatSession::new(),
            gate: AdminGate::new(),
            notices: NoticeCenter::new(),
        }
    }

    // ---- Session lifecycle ----

    /// Re-enter a previously persisted session. Skips the splash and the
    /// welcome mail: those run once per login, not once per process.
    pub fn restore(&mut self) -> Result<bool, AppError> {
        if self.phase != SessionPhase::LoggedOut {
            return Err(AppError::AlreadyLoggedIn);
        }

        match self.profiles.load()? {
            Some(profile) => {
                tracing::info!(email = %profile.email, "restored persisted session");
                self.profile = Some(profile);
                self.phase = SessionPhase::LoggedIn;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn login(&mut self, credentials: Credentials) -> Result<(), AppError> {
        let profile = profile_from_credentials(&credentials);
        self.run_login(profile, CREDENTIAL_LOGIN_DELAY).await
    }

    pub async fn login_federated(&mut self, account: FederatedAccount) -> Result<(), AppError> {
        let profile = profile_from_federated(&account);
        self.run_login(profile, FEDERATED_LOGIN_DELAY).await
    }

    async fn run_login(
        &mut self,
        profile: UserProfile,
        verify_delay: Duration,
    ) -> Result<(), AppError> {
        match self.phase {
            SessionPhase::LoggedOut => {}
            SessionPhase::Authenticating | SessionPhase::SplashTransition => {
                return Err(AppError::LoginInProgress)
            }
            SessionPhase::LoggedIn => return Err(AppError::AlreadyLoggedIn),
        }

        // Simulated verification: always succeeds after the fixed delay.
        self.phase = SessionPhase::Authenticating;
        self.clock.sleep(verify_delay).await;

        self.phase = SessionPhase::SplashTransition;
        self.clock.sleep(SPLASH_DELAY).await;

        if let Err(err) = self.profiles.save(&profile) {
            self.phase = SessionPhase::LoggedOut;
            return Err(err.into());
        }

        let now = self.clock.now();
        self.mail.deliver(welcome_email(&profile, now));
        tracing::info!(email = %profile.email, role = profile.role.as_str(), "session established");

        self.profile = Some(profile);
        self.phase = SessionPhase::LoggedIn;
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), AppError> {
        self.profiles.clear()?;
        self.profile = None;
        self.phase = SessionPhase::LoggedOut;
        self.view = ViewMode::Mail;
        self.mail_folder = MailboxFolder::Inbox;
        self.selected_email = None;
        self.search_query.clear();
        self.compose_open = false;
        self.gate.reset();
        self.notices.clear();
        Ok(())
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    // ---- View state ----

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn mail_folder(&self) -> MailboxFolder {
        self.mail_folder
    }

    pub fn set_mail_folder(&mut self, folder: MailboxFolder) {
        self.mail_folder = folder;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn compose_open(&self) -> bool {
        self.compose_open
    }

    pub fn close_compose(&mut self) {
        self.compose_open = false;
    }

    /// The mail list for the current folder and query, filtered
    /// synchronously on every call.
    pub fn visible_emails(&self) -> Vec<&Email> {
        self.mail.visible(self.mail_folder, &self.search_query)
    }

    pub fn visible_entries(&self) -> Vec<&DriveEntry> {
        self.drive.visible(&self.search_query)
    }

    pub fn select_email(&mut self, id: Uuid) -> Result<(), AppError> {
        self.mail.mark_read(id)?;
        self.selected_email = Some(id);
        Ok(())
    }

    pub fn selected_email(&self) -> Option<&Email> {
        self.selected_email.and_then(|id| self.mail.get(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected_email = None;
    }

    // ---- Gated mail actions ----

    /// Open the compose modal, or post the denial toast and leave it
    /// closed. Returns whether the modal is open.
    pub fn attempt_compose(&mut self) -> Result<bool, AppError> {
        if self.authorize(Action::ComposeMail)? {
            self.compose_open = true;
        }
        Ok(self.compose_open)
    }

    pub fn begin_reply(&mut self, id: Uuid) -> Result<Option<OutgoingMail>, AppError> {
        if !self.authorize(Action::ReplyMail)? {
            return Ok(None);
        }
        let original = self.mail.get(id).ok_or(AppError::Workspace(
            deepmail_workspace::WorkspaceError::NotFound(id),
        ))?;
        let draft = OutgoingMail::reply_to(original);
        self.compose_open = true;
        Ok(Some(draft))
    }

    pub fn begin_forward(&mut self, id: Uuid) -> Result<Option<OutgoingMail>, AppError> {
        if !self.authorize(Action::ForwardMail)? {
            return Ok(None);
        }
        let original = self.mail.get(id).ok_or(AppError::Workspace(
            deepmail_workspace::WorkspaceError::NotFound(id),
        ))?;
        let draft = OutgoingMail::forward_of(original);
        self.compose_open = true;
        Ok(Some(draft))
    }

    pub fn send_mail(&mut self, outgoing: OutgoingMail) -> Result<Option<Uuid>, AppError> {
        if !self.authorize(Action::ComposeMail)? {
            return Ok(None);
        }
        let sender = self.require_profile()?.clone();
        let now = self.clock.now();
        let id = self.mail.send(outgoing, &sender, now);
        self.compose_open = false;
        Ok(Some(id))
    }

    pub fn toggle_email_star(&mut self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.mail.toggle_star(id)?)
    }

    pub fn mail(&self) -> &MailStore {
        &self.mail
    }

    // ---- Gated drive actions ----

    pub fn attempt_upload(
        &mut self,
        name: &str,
        size_label: &str,
    ) -> Result<Option<Uuid>, AppError> {
        if !self.authorize(Action::UploadFile)? {
            return Ok(None);
        }
        let owner = self.require_profile()?.name.clone();
        let now = self.clock.now();
        Ok(Some(self.drive.upload(name, size_label, &owner, now)?))
    }

    pub fn attempt_create_folder(&mut self, name: &str) -> Result<Option<Uuid>, AppError> {
        if !self.authorize(Action::CreateFolder)? {
            return Ok(None);
        }
        let owner = self.require_profile()?.name.clone();
        let now = self.clock.now();
        Ok(Some(self.drive.create_folder(name, &owner, now)?))
    }

    pub fn begin_share(&mut self, id: Uuid) -> Result<Option<ShareDraft>, AppError> {
        if !self.authorize(Action::ShareFile)? {
            return Ok(None);
        }
        match self.drive.get(id) {
            Some(entry) => Ok(Some(ShareDraft::new(entry.id))),
            None => Err(AppError::Workspace(
                deepmail_workspace::WorkspaceError::NotFound(id),
            )),
        }
    }

    pub fn complete_share(&mut self, draft: &ShareDraft) -> Result<(), AppError> {
        let message = self.drive.complete_share(draft)?;
        let now = self.clock.now();
        self.notices.post_success(message, now);
        Ok(())
    }

    pub fn drive(&self) -> &DriveStore {
        &self.drive
    }

    // ---- Admin console ----

    /// Enter the admin view, or open the passkey prompt when the session
    /// has not unlocked it yet. Returns whether the view switched.
    pub fn open_admin(&mut self) -> bool {
        if self.gate.request_access() {
            self.view = ViewMode::Admin;
            true
        } else {
            false
        }
    }

    pub fn submit_admin_passkey(&mut self, input: &str) -> bool {
        self.gate.set_input(input);
        if self.gate.verify() {
            self.view = ViewMode::Admin;
            true
        } else {
            false
        }
    }

    pub fn cancel_admin_prompt(&mut self) {
        self.gate.cancel();
    }

    pub fn admin_gate(&self) -> &AdminGate {
        &self.gate
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Reassign a managed user's role, then reconcile the live session:
    /// when the edited row's email matches the logged-in profile, the
    /// session role follows immediately (an admin can demote themselves
    /// mid-session).
    pub fn update_user_role(&mut self, id: Uuid, role: Role) -> Result<(), AppError> {
        let (email, role) = {
            let user = self.directory.set_role(id, role)?;
            (user.email.clone(), user.role)
        };
        self.sync_session_role(&email, role)
    }

    pub fn toggle_user_status(&mut self, id: Uuid) -> Result<(), AppError> {
        let (email, role) = {
            let user = self.directory.toggle_status(id)?;
            (user.email.clone(), user.role)
        };
        // Directory updates always reconcile, even when only the status
        // changed; the role copy is a no-op in that case.
        self.sync_session_role(&email, role)
    }

    fn sync_session_role(&mut self, email: &str, role: Role) -> Result<(), AppError> {
        let Some(profile) = self.profile.as_mut() else {
            return Ok(());
        };
        if profile.email == email && profile.role != role {
            profile.role = role;
            self.profiles.save(profile)?;
            tracing::info!(role = role.as_str(), "session role synchronized from directory");
        }
        Ok(())
    }

    // ---- Notices ----

    pub fn error_notice(&self) -> Option<&str> {
        self.notices.error(self.clock.now())
    }

    pub fn success_notice(&self) -> Option<&str> {
        self.notices.success(self.clock.now())
    }

    pub fn dismiss_error_notice(&mut self) {
        self.notices.dismiss_error();
    }

    pub fn dismiss_success_notice(&mut self) {
        self.notices.dismiss_success();
    }

    // ---- Assistant ----

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    /// One chat turn: record the user message, call the collaborator,
    /// append its reply (or the fallback bubble). Fire-and-forget from
    /// the shell's perspective; there is no cancellation.
    pub async fn send_chat(&mut self, input: &str) {
        // The collaborator sees the transcript as it was before this turn.
        let history = self.chat.history().to_vec();
        let now = self.clock.now();
        let Some(prompt) = self.chat.begin(input, now) else {
            return;
        };

        let Some(client) = self.assistant.clone() else {
            let err = AssistantError::Config("assistant is not configured".to_string());
            self.chat.fail(&err, self.clock.now());
            return;
        };

        match client.reply(&history, &prompt).await {
            Ok(reply) => self.chat.complete(reply, self.clock.now()),
            Err(err) => self.chat.fail(&err, self.clock.now()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ---- Internal ----

    fn require_profile(&self) -> Result<&UserProfile, AppError> {
        self.profile.as_ref().ok_or(AppError::NotLoggedIn)
    }

    fn authorize(&mut self, action: Action) -> Result<bool, AppError> {
        let role = self.require_profile()?.role;
        match evaluate(role, action) {
            Decision::Allowed => Ok(true),
            Decision::Denied { message } => {
                tracing::debug!(?action, role = role.as_str(), "action denied");
                let now = self.clock.now();
                self.notices.post_error(message, now);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use async_trait::async_trait;
    use chrono::Utc;
    use deepmail_core::{AuthProvider, ChatMessage};

    struct EchoClient;

    #[async_trait]
    impl GenerativeClient for EchoClient {
        async fn reply(
            &self,
            history: &[ChatMessage],
            prompt: &str,
        ) -> Result<String, AssistantError> {
            Ok(format!("echo: {prompt} ({} prior turns)", history.len()))
        }
    }

    struct FailingClient;

    #[async_trait]
    impl GenerativeClient for FailingClient {
        async fn reply(
            &self,
            _history: &[ChatMessage],
            _prompt: &str,
        ) -> Result<String, AssistantError> {
            Err(AssistantError::EmptyResponse)
        }
    }

    fn scratch_store() -> ProfileStore {
        let dir = std::env::temp_dir().join(format!("deepmail-app-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("scratch dir");
        ProfileStore::new(&dir)
    }

    fn workspace_with(
        assistant: Option<Arc<dyn GenerativeClient>>,
    ) -> (Workspace, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::starting_at(Utc::now()));
        let workspace = Workspace::new(
            clock.clone(),
            scratch_store(),
            AppConfig::default(),
            assistant,
        );
        (workspace, clock)
    }

    async fn logged_in(email: &str) -> (Workspace, Arc<ManualClock>) {
        let (mut workspace, clock) = workspace_with(None);
        workspace
            .login(Credentials {
                email: email.to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .expect("login");
        (workspace, clock)
    }

    fn restored_with_role(role: Role) -> (Workspace, Arc<ManualClock>) {
        let store = scratch_store();
        store
            .save(&UserProfile {
                name: "casey".to_string(),
                email: "casey@example.com".to_string(),
                avatar: None,
                provider: AuthProvider::Email,
                role,
            })
            .expect("seed profile");

        let clock = Arc::new(ManualClock::starting_at(Utc::now()));
        let mut workspace =
            Workspace::new(clock.clone(), store, AppConfig::default(), None);
        assert!(workspace.restore().expect("restore"));
        (workspace, clock)
    }

    #[tokio::test]
    async fn login_runs_the_full_sequence_and_delivers_one_welcome_mail() {
        let (workspace, _clock) = logged_in("ada@example.com").await;

        assert_eq!(workspace.phase(), SessionPhase::LoggedIn);
        let profile = workspace.profile().expect("profile");
        assert_eq!(profile.role, Role::Editor);
        assert_eq!(profile.name, "ada");

        let inbox = workspace.visible_emails();
        assert_eq!(inbox.len(), 4, "three seeds plus the welcome mail");

        let welcome = inbox[0];
        assert_eq!(welcome.subject, "Welcome to DeepMail, ada!");
        assert_eq!(welcome.recipient, "ada@example.com");
        assert!(!welcome.read);
        assert!(welcome.starred);

        let new_unread: Vec<_> = inbox
            .iter()
            .filter(|email| !email.read && email.thread_id == "welcome-thread")
            .collect();
        assert_eq!(new_unread.len(), 1);
    }

    #[tokio::test]
    async fn restore_skips_splash_and_welcome_mail() {
        let (workspace, _clock) = restored_with_role(Role::Editor);

        assert_eq!(workspace.phase(), SessionPhase::LoggedIn);
        assert_eq!(
            workspace.visible_emails().len(),
            3,
            "no welcome mail on restore"
        );
    }

    #[tokio::test]
    async fn login_while_authenticating_is_rejected() {
        let (mut workspace, _clock) = workspace_with(None);
        workspace.phase = SessionPhase::Authenticating;

        let result = workspace
            .login(Credentials {
                email: "ada@example.com".to_string(),
                password: "pw".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::LoginInProgress)));
    }

    #[tokio::test]
    async fn login_after_login_is_rejected() {
        let (mut workspace, _clock) = logged_in("ada@example.com").await;
        let result = workspace
            .login(Credentials {
                email: "other@example.com".to_string(),
                password: "pw".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::AlreadyLoggedIn)));
    }

    #[tokio::test]
    async fn viewer_compose_is_denied_with_the_exact_toast() {
        let (mut workspace, clock) = restored_with_role(Role::Viewer);

        let opened = workspace.attempt_compose().expect("attempt");
        assert!(!opened);
        assert!(!workspace.compose_open());
        assert_eq!(
            workspace.error_notice(),
            Some("Permission Denied: Your account is restricted to Read-Only mode.")
        );

        clock.advance(Duration::from_millis(3001));
        assert_eq!(workspace.error_notice(), None, "toast auto-dismisses");
    }

    #[tokio::test]
    async fn editor_compose_opens_the_modal() {
        let (mut workspace, _clock) = restored_with_role(Role::Editor);
        assert!(workspace.attempt_compose().expect("attempt"));
        assert!(workspace.compose_open());
        assert_eq!(workspace.error_notice(), None);
    }

    #[tokio::test]
    async fn viewer_drive_actions_post_their_specific_toasts() {
        let (mut workspace, _clock) = restored_with_role(Role::Viewer);

        assert!(workspace
            .attempt_upload("notes.txt", "1 KB")
            .expect("upload")
            .is_none());
        assert_eq!(
            workspace.error_notice(),
            Some("Viewer role cannot upload files.")
        );

        assert!(workspace
            .attempt_create_folder("Projects")
            .expect("create folder")
            .is_none());
        assert_eq!(
            workspace.error_notice(),
            Some("Viewer role cannot create folders.")
        );
    }

    #[tokio::test]
    async fn admin_gate_grants_on_the_passkey_and_rejects_otherwise() {
        let (mut workspace, _clock) = restored_with_role(Role::Editor);

        assert!(!workspace.open_admin());
        assert!(workspace.admin_gate().prompt_open());
        assert_eq!(workspace.view(), ViewMode::Mail);

        assert!(!workspace.submit_admin_passkey("wrong"));
        assert_eq!(
            workspace.admin_gate().error(),
            Some("Invalid passkey. Access denied.")
        );
        assert!(workspace.admin_gate().input().is_empty());
        assert_eq!(workspace.view(), ViewMode::Mail);

        assert!(workspace.submit_admin_passkey("deepmail-admin-2025"));
        assert_eq!(workspace.view(), ViewMode::Admin);
        assert!(workspace.admin_gate().is_authenticated());
        assert_eq!(workspace.admin_gate().error(), None);

        // Subsequent entries skip the prompt.
        workspace.set_view(ViewMode::Mail);
        assert!(workspace.open_admin());
        assert_eq!(workspace.view(), ViewMode::Admin);
    }

    #[tokio::test]
    async fn directory_role_edit_syncs_the_matching_session() {
        let (mut workspace, _clock) = workspace_with(None);
        workspace
            .login_federated(FederatedAccount {
                name: "John Doe".to_string(),
                email: "john.doe@gmail.com".to_string(),
            })
            .await
            .expect("login");

        let john = workspace
            .directory()
            .users()
            .iter()
            .find(|user| user.email == "john.doe@gmail.com")
            .expect("seeded john")
            .id;

        workspace
            .update_user_role(john, Role::Manager)
            .expect("update role");
        assert_eq!(workspace.profile().expect("profile").role, Role::Manager);
    }

    #[tokio::test]
    async fn directory_edit_for_another_email_leaves_the_session_alone() {
        let (mut workspace, _clock) = logged_in("ada@example.com").await;

        let sarah = workspace
            .directory()
            .users()
            .iter()
            .find(|user| user.email == "s.connor@sky.net")
            .expect("seeded sarah")
            .id;

        workspace
            .update_user_role(sarah, Role::Admin)
            .expect("update role");
        assert_eq!(workspace.profile().expect("profile").role, Role::Editor);
    }

    #[tokio::test]
    async fn search_for_alex_returns_only_the_rivera_mail() {
        let (mut workspace, _clock) = logged_in("ada@example.com").await;

        workspace.set_search_query("alex");
        let hits = workspace.visible_emails();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sender, "Alex Rivera");
    }

    #[tokio::test]
    async fn sent_mail_shows_up_under_the_sent_folder() {
        let (mut workspace, _clock) = logged_in("ada@example.com").await;

        let id = workspace
            .send_mail(OutgoingMail {
                recipient: "alex@example.com".to_string(),
                subject: "Re: Project Proposal".to_string(),
                body: "Looks good.".to_string(),
                thread_id: None,
            })
            .expect("send")
            .expect("allowed");

        assert!(!workspace.compose_open());
        workspace.set_mail_folder(MailboxFolder::Sent);
        let sent = workspace.visible_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].id, id);
    }

    #[tokio::test]
    async fn completing_a_share_posts_the_success_notice() {
        let (mut workspace, _clock) = logged_in("ada@example.com").await;

        let entry = workspace.drive().entries()[0].id;
        let mut draft = workspace
            .begin_share(entry)
            .expect("begin share")
            .expect("allowed");
        draft.add_recipient("alex@example.com");
        draft.add_recipient("sam@example.com");

        workspace.complete_share(&draft).expect("share");
        assert_eq!(
            workspace.success_notice(),
            Some("Successfully shared \"Business Strategy 2024\" with 2 recipients.")
        );
        assert!(workspace.drive().get(entry).expect("entry").shared);
    }

    #[tokio::test]
    async fn chat_round_trip_appends_both_turns() {
        let (mut workspace, _clock) = workspace_with(Some(Arc::new(EchoClient)));

        workspace.send_chat("Summarize unread messages from Alex").await;
        let history = workspace.chat().history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "Summarize unread messages from Alex");
        assert!(history[1].content.starts_with("echo: "));
        assert!(history[1].content.contains("0 prior turns"));
        assert!(!workspace.chat().is_loading());
    }

    #[tokio::test]
    async fn chat_failure_appends_the_fallback_bubble() {
        let (mut workspace, _clock) = workspace_with(Some(Arc::new(FailingClient)));

        workspace.send_chat("hello").await;
        let history = workspace.chat().history();
        assert_eq!(history.len(), 2);
        assert!(history[1].content.starts_with("Sorry, I couldn't reach"));
    }

    #[tokio::test]
    async fn logout_clears_session_view_and_gate() {
        let (mut workspace, _clock) = logged_in("ada@example.com").await;
        workspace.submit_admin_passkey("deepmail-admin-2025");
        workspace.set_search_query("alex");

        workspace.logout().expect("logout");

        assert_eq!(workspace.phase(), SessionPhase::LoggedOut);
        assert!(workspace.profile().is_none());
        assert_eq!(workspace.view(), ViewMode::Mail);
        assert_eq!(workspace.mail_folder(), MailboxFolder::Inbox);
        assert!(workspace.search_query().is_empty());
        assert!(!workspace.admin_gate().is_authenticated());
        assert!(!workspace.restore().expect("restore"), "profile was cleared");
    }
}
