//! The deadline timer and the fetch completion race each other; these
//! tests pin down that the loser is always a no-op and a run never
//! dispatches more than one notification.

use std::sync::Once;

use appglance_core::{update, AppReport, Effect, FailureReason, Msg, RunPhase, RunState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pipeline_logging::initialize_for_tests);
}

fn awaiting_fetch() -> RunState {
    let msg = Msg::ShareReceived("https://store.example/app?id=com.foo.bar".to_string());
    let (state, _effects) = update(RunState::new(), msg);
    assert_eq!(state.phase(), RunPhase::AwaitingFetch);
    state
}

fn sample_report() -> AppReport {
    AppReport {
        name: "Foo Bar".to_string(),
        downloads: "1.2M".to_string(),
        revenue: "$340K".to_string(),
    }
}

fn notify_count(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|effect| matches!(effect, Effect::Notify(_)))
        .count()
}

#[test]
fn late_deadline_after_fetch_completion_is_ignored() {
    init_logging();
    let (state, first) = update(awaiting_fetch(), Msg::FetchCompleted(Ok(sample_report())));
    assert_eq!(notify_count(&first), 1);

    let (state, second) = update(state, Msg::DeadlineElapsed);
    assert_eq!(state.phase(), RunPhase::Done);
    assert!(second.is_empty());
}

#[test]
fn late_fetch_result_after_deadline_is_ignored() {
    init_logging();
    let (state, first) = update(awaiting_fetch(), Msg::DeadlineElapsed);
    assert_eq!(notify_count(&first), 1);

    // The aborted fetch may still deliver; its result must be discarded.
    let (state, second) = update(state, Msg::FetchCompleted(Ok(sample_report())));
    assert_eq!(state.phase(), RunPhase::Done);
    assert!(second.is_empty());
    assert_eq!(state.last_failure(), None);
}

#[test]
fn duplicate_fetch_completion_is_ignored() {
    init_logging();
    let (state, first) = update(awaiting_fetch(), Msg::FetchCompleted(Err(FailureReason::Network)));
    assert_eq!(notify_count(&first), 1);

    let (_state, second) = update(state, Msg::FetchCompleted(Ok(sample_report())));
    assert!(second.is_empty());
}

#[test]
fn share_received_on_started_run_is_ignored() {
    init_logging();
    let (state, effects) = update(
        awaiting_fetch(),
        Msg::ShareReceived("https://other.example/?id=com.other".to_string()),
    );
    assert!(effects.is_empty());
    assert_eq!(state.app_id(), Some("com.foo.bar"));
}

#[test]
fn exactly_one_notification_across_any_message_order() {
    init_logging();
    let orders: Vec<Vec<Msg>> = vec![
        vec![Msg::FetchCompleted(Ok(sample_report())), Msg::DeadlineElapsed],
        vec![Msg::DeadlineElapsed, Msg::FetchCompleted(Ok(sample_report()))],
        vec![
            Msg::DeadlineElapsed,
            Msg::DeadlineElapsed,
            Msg::FetchCompleted(Err(FailureReason::Parse)),
        ],
    ];

    for msgs in orders {
        let mut state = awaiting_fetch();
        let mut notifications = 0;
        for msg in msgs {
            let (next, effects) = update(state, msg);
            state = next;
            notifications += notify_count(&effects);
        }
        assert_eq!(state.phase(), RunPhase::Done);
        assert_eq!(notifications, 1);
    }
}
