use std::sync::Arc;
use std::time::Duration;

use appglance_core::{update, Effect, Msg, Notification, RunId, RunState};
use pipeline_logging::{pipeline_error, pipeline_info, pipeline_warn};
use tokio_util::sync::CancellationToken;

use crate::fetch::ReportFetcher;

/// Maximum end-to-end latency of a run before the raw-text fallback is
/// forced.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(5);

/// The platform collaborator that renders a user-visible message.
/// Dispatch is fire-and-forget; delivery is the platform's problem.
pub trait NotificationPresenter: Send + Sync {
    fn present(&self, run_id: RunId, notification: &Notification);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeEvent {
    RunStarted { run_id: RunId },
    RunCompleted { run_id: RunId },
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: IntakeEvent);
}

pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<IntakeEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<IntakeEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: IntakeEvent) {
        let _ = self.tx.send(event);
    }
}

/// Drives one share event from intake to its terminal notification.
///
/// All sequencing decisions live in `appglance_core::update`; the runner
/// only executes effects and feeds back whichever of the fetch task and
/// the deadline timer finishes first. Because the runner loop is the sole
/// caller of `update` for its run, the core's terminal-phase check is an
/// atomic guard against double notification.
pub struct PipelineRunner {
    fetcher: Arc<dyn ReportFetcher>,
    presenter: Arc<dyn NotificationPresenter>,
    deadline: Duration,
}

impl PipelineRunner {
    pub fn new(
        fetcher: Arc<dyn ReportFetcher>,
        presenter: Arc<dyn NotificationPresenter>,
        deadline: Duration,
    ) -> Self {
        Self {
            fetcher,
            presenter,
            deadline,
        }
    }

    pub async fn run(&self, run_id: RunId, shared_text: String, sink: &dyn EventSink) {
        sink.emit(IntakeEvent::RunStarted { run_id });
        pipeline_info!("run {run_id}: intake, payload_len={}", shared_text.len());

        let (mut state, effects) = update(RunState::new(), Msg::ShareReceived(shared_text));
        let mut fetch_app_id = None;
        for effect in effects {
            match effect {
                // The deadline is armed together with the fetch below.
                Effect::StartDeadline => {}
                Effect::StartFetch { app_id } => fetch_app_id = Some(app_id),
                Effect::Notify(notification) => self.dispatch(run_id, &state, &notification),
                Effect::CancelFetch | Effect::CancelDeadline => {}
            }
        }

        if let Some(app_id) = fetch_app_id {
            pipeline_info!("run {run_id}: fetching report for {app_id}");
            let cancel = CancellationToken::new();
            let fetch_cancel = cancel.clone();
            let fetcher = Arc::clone(&self.fetcher);
            let fetch_task = tokio::spawn(async move {
                tokio::select! {
                    outcome = fetcher.fetch(&app_id) => Some(outcome),
                    () = fetch_cancel.cancelled() => None,
                }
            });

            let msg = tokio::select! {
                joined = fetch_task => match joined {
                    Ok(Some(Ok(report))) => Msg::FetchCompleted(Ok(report)),
                    Ok(Some(Err(err))) => {
                        pipeline_warn!("run {run_id}: fetch failed: {err}");
                        Msg::FetchCompleted(Err(err.reason))
                    }
                    // Cancellation only happens after the deadline branch
                    // has already won, so a cancelled join is inert.
                    Ok(None) => Msg::NoOp,
                    Err(join_err) => {
                        pipeline_error!("run {run_id}: fetch task aborted: {join_err}");
                        Msg::FetchCompleted(Err(appglance_core::FailureReason::Network))
                    }
                },
                () = tokio::time::sleep(self.deadline) => {
                    pipeline_warn!(
                        "run {run_id}: deadline elapsed after {:?}, forcing fallback",
                        self.deadline
                    );
                    Msg::DeadlineElapsed
                }
            };

            let (next, effects) = update(state, msg);
            state = next;
            for effect in effects {
                match effect {
                    Effect::Notify(notification) => self.dispatch(run_id, &state, &notification),
                    // Best effort; a response landing after this is dropped
                    // with the detached task.
                    Effect::CancelFetch => cancel.cancel(),
                    // The sleep future lost the select and is already gone.
                    Effect::CancelDeadline => {}
                    Effect::StartDeadline | Effect::StartFetch { .. } => {}
                }
            }
        }

        sink.emit(IntakeEvent::RunCompleted { run_id });
    }

    fn dispatch(&self, run_id: RunId, state: &RunState, notification: &Notification) {
        if let Some(reason) = state.last_failure() {
            pipeline_warn!("run {run_id}: falling back to raw text after {reason}");
        }
        pipeline_info!("run {run_id}: notifying \"{}\"", notification.title);
        self.presenter.present(run_id, notification);
    }
}
