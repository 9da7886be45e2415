//! Appglance engine: analytics report fetching and pipeline execution.
mod engine;
mod fetch;
mod report;
mod runner;

pub use engine::{IntakeHandle, IntakeSettings};
pub use fetch::{FetchError, FetchSettings, HttpReportFetcher, ReportFetcher};
pub use report::parse_report;
pub use runner::{
    ChannelEventSink, EventSink, IntakeEvent, NotificationPresenter, PipelineRunner,
    DEFAULT_DEADLINE,
};
