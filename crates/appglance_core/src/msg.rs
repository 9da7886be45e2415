#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A share payload arrived from the host platform.
    ShareReceived(String),
    /// The fetch task finished, successfully or not.
    FetchCompleted(crate::FetchOutcome),
    /// The run deadline fired before the fetch finished.
    DeadlineElapsed,
    /// Fallback for placeholder wiring.
    NoOp,
}
