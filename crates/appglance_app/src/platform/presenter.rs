use appglance_core::{Notification, RunId};
use appglance_engine::NotificationPresenter;
use pipeline_logging::pipeline_debug;

use super::permission::PermissionState;

/// Renders notifications on the terminal, the CLI stand-in for a system
/// notification tray. With permission denied it swallows them silently.
pub struct ConsolePresenter {
    permission: PermissionState,
}

impl ConsolePresenter {
    pub fn new(permission: PermissionState) -> Self {
        Self { permission }
    }
}

impl NotificationPresenter for ConsolePresenter {
    fn present(&self, run_id: RunId, notification: &Notification) {
        if self.permission == PermissionState::Denied {
            pipeline_debug!("run {run_id}: notification suppressed (permission denied)");
            return;
        }
        println!("{}", notification.title);
        println!("{}", notification.body);
    }
}
