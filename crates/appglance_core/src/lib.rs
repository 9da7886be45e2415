//! Appglance core: pure share-intake state machine and report rendering.
mod effect;
mod extract;
mod msg;
mod notification;
mod state;
mod types;
mod update;

pub use effect::Effect;
pub use extract::extract_app_id;
pub use msg::Msg;
pub use notification::{fallback_notification, report_notification, Notification};
pub use state::RunState;
pub use types::{AppReport, FailureReason, FetchOutcome, RunId, RunPhase};
pub use update::update;
