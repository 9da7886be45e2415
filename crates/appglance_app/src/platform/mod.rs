//! Host glue: reads the share payload, wires the pipeline to the
//! terminal, and waits for the run to finish.

mod logging;
mod permission;
mod presenter;
mod settings;

use std::io::Read;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use appglance_core::RunId;
use appglance_engine::{FetchSettings, IntakeEvent, IntakeHandle, IntakeSettings};
use pipeline_logging::{pipeline_info, pipeline_warn};

use self::permission::PermissionState;
use self::presenter::ConsolePresenter;

/// Scheduling slack on top of the pipeline deadline when waiting for the
/// completion signal.
const COMPLETION_GRACE: Duration = Duration::from_secs(2);

pub fn run() -> anyhow::Result<()> {
    logging::initialize();

    let shared_text = read_shared_text()?;
    let settings = settings::load();

    let permission = permission::check(&settings);
    if permission == PermissionState::Denied {
        pipeline_warn!("notifications disabled; results will only reach the log");
    }

    let deadline = Duration::from_secs(settings.deadline_secs);
    let handle = IntakeHandle::new(
        IntakeSettings {
            fetch: FetchSettings {
                endpoint: settings.endpoint.clone(),
                ..FetchSettings::default()
            },
            deadline,
        },
        Arc::new(ConsolePresenter::new(permission)),
    );

    let run_id = handle.share(shared_text);
    pipeline_info!("share submitted as run {run_id}");

    wait_for_completion(&handle, run_id, deadline + COMPLETION_GRACE);
    Ok(())
}

fn read_shared_text() -> anyhow::Result<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading shared text from stdin")?;
    let text = buffer.trim().to_string();
    anyhow::ensure!(!text.is_empty(), "no shared text given (argument or stdin)");
    Ok(text)
}

/// Blocks until the run signals completion. The pipeline deadline makes
/// this bounded; the extra wait only covers scheduling overhead.
fn wait_for_completion(handle: &IntakeHandle, run_id: RunId, wait: Duration) {
    let give_up_at = Instant::now() + wait;
    loop {
        let remaining = give_up_at.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            pipeline_warn!("run {run_id} did not signal completion in {wait:?}");
            return;
        }
        match handle.recv_timeout(remaining) {
            Some(IntakeEvent::RunCompleted { run_id: id }) if id == run_id => {
                pipeline_info!("run {run_id} completed");
                return;
            }
            Some(_) => {}
            None => {
                pipeline_warn!("run {run_id} did not signal completion in {wait:?}");
                return;
            }
        }
    }
}
