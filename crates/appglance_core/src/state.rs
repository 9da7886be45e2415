use crate::{FailureReason, RunPhase};

/// Ephemeral state for one share event. Created on intake, driven to
/// `RunPhase::Done` by `update`, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunState {
    phase: RunPhase,
    shared_text: String,
    app_id: Option<String>,
    last_failure: Option<FailureReason>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// The original share payload, kept for fallback rendering.
    pub fn shared_text(&self) -> &str {
        &self.shared_text
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// The failure that forced fallback rendering, if any. Deadline
    /// expiry is not recorded here; it is a liveness event, not a fault.
    pub fn last_failure(&self) -> Option<&FailureReason> {
        self.last_failure.as_ref()
    }

    pub(crate) fn begin(&mut self, shared_text: String, app_id: Option<String>) {
        self.shared_text = shared_text;
        self.app_id = app_id;
    }

    pub(crate) fn set_phase(&mut self, phase: RunPhase) {
        self.phase = phase;
    }

    pub(crate) fn record_failure(&mut self, reason: FailureReason) {
        self.last_failure = Some(reason);
    }
}
