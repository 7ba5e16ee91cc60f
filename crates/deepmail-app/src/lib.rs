mod clock;
mod controller;
mod error;
mod notices;
mod session;
mod telemetry;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::Workspace;
pub use error::AppError;
pub use notices::{Notice, NoticeCenter};
pub use session::{
    Credentials, FederatedAccount, SessionPhase, CREDENTIAL_LOGIN_DELAY, FEDERATED_LOGIN_DELAY,
    SPLASH_DELAY,
};
pub use telemetry::init_tracing;
