use deepmail_core::Role;
use serde::{Deserialize, Serialize};

const READ_ONLY_DENIAL: &str =
    "Permission Denied: Your account is restricted to Read-Only mode.";
const UPLOAD_DENIAL: &str = "Viewer role cannot upload files.";
const CREATE_FOLDER_DENIAL: &str = "Viewer role cannot create folders.";
const MANAGE_USERS_DENIAL: &str = "Permission Denied: Administrator access required.";

/// Every gated operation in the workspace. Call sites ask the evaluator
/// instead of carrying their own role checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ComposeMail,
    ReplyMail,
    ForwardMail,
    UploadFile,
    CreateFolder,
    ShareFile,
    ManageUsers,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Allowed,
    Denied { message: String },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn denial_message(&self) -> Option<&str> {
        match self {
            Decision::Allowed => None,
            Decision::Denied { message } => Some(message),
        }
    }
}

/// The single permission policy. Pure function of (role, action).
pub fn evaluate(role: Role, action: Action) -> Decision {
    match action {
        Action::ComposeMail | Action::ReplyMail | Action::ForwardMail | Action::ShareFile => {
            deny_viewer(role, READ_ONLY_DENIAL)
        }
        Action::UploadFile => deny_viewer(role, UPLOAD_DENIAL),
        Action::CreateFolder => deny_viewer(role, CREATE_FOLDER_DENIAL),
        Action::ManageUsers => {
            if role < Role::Admin {
                denied(MANAGE_USERS_DENIAL)
            } else {
                Decision::Allowed
            }
        }
    }
}

fn deny_viewer(role: Role, message: &str) -> Decision {
    if role == Role::Viewer {
        denied(message)
    } else {
        Decision::Allowed
    }
}

fn denied(message: &str) -> Decision {
    Decision::Denied {
        message: message.to_string(),
    }
}
