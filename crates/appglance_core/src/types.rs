use std::fmt;

pub type RunId = u64;

/// One app's figures as reported by the analytics API. All fields arrive
/// pre-formatted for display and are passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppReport {
    pub name: String,
    pub downloads: String,
    pub revenue: String,
}

/// Why a fetch produced no report. Every variant maps to the same
/// raw-text fallback rendering; the distinction survives in logs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    Network,
    HttpStatus(u16),
    Parse,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Network => write!(f, "network error"),
            FailureReason::HttpStatus(code) => write!(f, "http status {code}"),
            FailureReason::Parse => write!(f, "unexpected response shape"),
        }
    }
}

pub type FetchOutcome = Result<AppReport, FailureReason>;

/// Lifecycle of a single pipeline run. `Done` is terminal and is entered
/// exactly once; messages arriving in `Done` have no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    AwaitingFetch,
    Done,
}
