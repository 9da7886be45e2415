use crate::{
    extract_app_id, fallback_notification, report_notification, Effect, Msg, RunPhase, RunState,
};

/// Pure update function: applies a message to run state and returns any
/// effects.
///
/// The deadline timer and the fetch task race; whichever message lands
/// first moves the run to `Done`, and the loser arrives to find the run
/// already terminal and produces nothing. That check is what guarantees
/// exactly one notification per run.
pub fn update(mut state: RunState, msg: Msg) -> (RunState, Vec<Effect>) {
    let effects = match msg {
        Msg::ShareReceived(text) => {
            if state.phase() != RunPhase::Idle {
                return (state, Vec::new());
            }
            match extract_app_id(&text) {
                Some(app_id) => {
                    state.begin(text, Some(app_id.clone()));
                    state.set_phase(RunPhase::AwaitingFetch);
                    vec![Effect::StartDeadline, Effect::StartFetch { app_id }]
                }
                None => {
                    let notification = fallback_notification(&text);
                    state.begin(text, None);
                    state.set_phase(RunPhase::Done);
                    vec![Effect::Notify(notification)]
                }
            }
        }
        Msg::FetchCompleted(outcome) => {
            if state.phase() != RunPhase::AwaitingFetch {
                return (state, Vec::new());
            }
            let notification = match outcome {
                Ok(report) => report_notification(&report),
                Err(reason) => {
                    state.record_failure(reason);
                    fallback_notification(state.shared_text())
                }
            };
            state.set_phase(RunPhase::Done);
            vec![Effect::CancelDeadline, Effect::Notify(notification)]
        }
        Msg::DeadlineElapsed => {
            if state.phase() != RunPhase::AwaitingFetch {
                return (state, Vec::new());
            }
            let notification = fallback_notification(state.shared_text());
            state.set_phase(RunPhase::Done);
            vec![Effect::CancelFetch, Effect::Notify(notification)]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
