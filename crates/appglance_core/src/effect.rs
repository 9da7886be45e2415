use crate::Notification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the run deadline timer.
    StartDeadline,
    /// Issue the analytics fetch for the extracted identifier.
    StartFetch { app_id: String },
    /// Dispatch the terminal notification. Emitted at most once per run.
    Notify(Notification),
    /// Abort the in-flight fetch; best effort, a late result is discarded.
    CancelFetch,
    /// Disarm the deadline timer.
    CancelDeadline,
}
