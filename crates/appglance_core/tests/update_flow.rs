use std::sync::Once;

use appglance_core::{
    update, AppReport, Effect, FailureReason, Msg, Notification, RunPhase, RunState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pipeline_logging::initialize_for_tests);
}

fn share(text: &str) -> (RunState, Vec<Effect>) {
    update(RunState::new(), Msg::ShareReceived(text.to_string()))
}

fn sample_report() -> AppReport {
    AppReport {
        name: "Foo Bar".to_string(),
        downloads: "1.2M".to_string(),
        revenue: "$340K".to_string(),
    }
}

#[test]
fn share_with_identifier_starts_deadline_and_fetch() {
    init_logging();
    let (state, effects) = share("https://store.example/app?id=com.foo.bar");

    assert_eq!(state.phase(), RunPhase::AwaitingFetch);
    assert_eq!(state.app_id(), Some("com.foo.bar"));
    assert_eq!(
        effects,
        vec![
            Effect::StartDeadline,
            Effect::StartFetch {
                app_id: "com.foo.bar".to_string(),
            },
        ]
    );
}

#[test]
fn share_without_identifier_renders_raw_text_immediately() {
    init_logging();
    let (state, effects) = share("just some text");

    assert_eq!(state.phase(), RunPhase::Done);
    assert_eq!(state.app_id(), None);
    assert_eq!(
        effects,
        vec![Effect::Notify(Notification {
            title: "Something went wrong".to_string(),
            body: "just some text".to_string(),
        })]
    );
}

#[test]
fn fetch_success_renders_structured_report() {
    init_logging();
    let (state, _effects) = share("https://store.example/app?id=com.foo.bar");
    let (state, effects) = update(state, Msg::FetchCompleted(Ok(sample_report())));

    assert_eq!(state.phase(), RunPhase::Done);
    assert_eq!(state.last_failure(), None);
    assert_eq!(
        effects,
        vec![
            Effect::CancelDeadline,
            Effect::Notify(Notification {
                title: "App: Foo Bar".to_string(),
                body: "Foo Bar - Downloads: 1.2M, Revenue: $340K".to_string(),
            }),
        ]
    );
}

#[test]
fn fetch_failure_falls_back_to_raw_text() {
    init_logging();
    let text = "look https://store.example/app?id=com.foo.bar";
    let (state, _effects) = share(text);
    let (state, effects) = update(state, Msg::FetchCompleted(Err(FailureReason::HttpStatus(500))));

    assert_eq!(state.phase(), RunPhase::Done);
    assert_eq!(state.last_failure(), Some(&FailureReason::HttpStatus(500)));
    assert_eq!(
        effects,
        vec![
            Effect::CancelDeadline,
            Effect::Notify(Notification {
                title: "Something went wrong".to_string(),
                body: text.to_string(),
            }),
        ]
    );
}

#[test]
fn deadline_cancels_fetch_and_falls_back() {
    init_logging();
    let text = "https://store.example/app?id=com.foo.bar";
    let (state, _effects) = share(text);
    let (state, effects) = update(state, Msg::DeadlineElapsed);

    assert_eq!(state.phase(), RunPhase::Done);
    assert_eq!(state.last_failure(), None);
    assert_eq!(
        effects,
        vec![
            Effect::CancelFetch,
            Effect::Notify(Notification {
                title: "Something went wrong".to_string(),
                body: text.to_string(),
            }),
        ]
    );
}

#[test]
fn noop_changes_nothing() {
    let state = RunState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
