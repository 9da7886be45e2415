use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use appglance_core::RunId;

use crate::fetch::{FetchSettings, HttpReportFetcher};
use crate::runner::{
    ChannelEventSink, IntakeEvent, NotificationPresenter, PipelineRunner, DEFAULT_DEADLINE,
};

#[derive(Debug, Clone)]
pub struct IntakeSettings {
    pub fetch: FetchSettings,
    pub deadline: Duration,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            deadline: DEFAULT_DEADLINE,
        }
    }
}

enum IntakeCommand {
    Share { run_id: RunId, text: String },
}

/// Host-side handle to the intake pipeline. Owns a dedicated thread with
/// its own tokio runtime; each share event becomes an independent run,
/// unordered relative to the others.
pub struct IntakeHandle {
    cmd_tx: mpsc::Sender<IntakeCommand>,
    event_rx: mpsc::Receiver<IntakeEvent>,
    next_run_id: AtomicU64,
}

impl IntakeHandle {
    pub fn new(settings: IntakeSettings, presenter: Arc<dyn NotificationPresenter>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(HttpReportFetcher::new(settings.fetch));
        let runner = Arc::new(PipelineRunner::new(fetcher, presenter, settings.deadline));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let runner = Arc::clone(&runner);
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    match command {
                        IntakeCommand::Share { run_id, text } => {
                            let sink = ChannelEventSink::new(event_tx);
                            runner.run(run_id, text, &sink).await;
                        }
                    }
                });
            }
        });

        Self {
            cmd_tx,
            event_rx,
            next_run_id: AtomicU64::new(1),
        }
    }

    /// Submits a share payload and returns immediately; the run completes
    /// in the background within the deadline.
    pub fn share(&self, text: impl Into<String>) -> RunId {
        let run_id = self.next_run_id.fetch_add(1, Ordering::Relaxed);
        let _ = self.cmd_tx.send(IntakeCommand::Share {
            run_id,
            text: text.into(),
        });
        run_id
    }

    pub fn try_recv(&self) -> Option<IntakeEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<IntakeEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}
