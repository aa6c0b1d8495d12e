use pretty_assertions::assert_eq;
use tally_core::{CounterConfig, OverflowPolicy, TallyConfig};
use tally_widgets::prelude::*;

fn run(screen: &CounterScreen, events: &[InputEvent]) -> Vec<String> {
    events
        .iter()
        .map(|event| {
            assert_eq!(screen.dispatch(*event), EventResult::Handled);
            screen.text()
        })
        .collect()
}

#[test]
fn clicking_buttons_drives_the_label() {
    let screen = CounterScreen::new();

    let shown = run(
        &screen,
        &[
            InputEvent::Increment,
            InputEvent::Increment,
            InputEvent::Increment,
            InputEvent::Reset,
            InputEvent::Increment,
        ],
    );

    assert_eq!(shown, vec!["1", "2", "3", "0", "1"]);
    assert_eq!(screen.value(), 1);
}

#[test]
fn label_observers_see_each_refresh() {
    let screen = CounterScreen::new();
    let seen = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let _sub = screen
        .label()
        .on_change(move |text| seen_clone.lock().push(text.clone()));

    run(&screen, &[InputEvent::Increment, InputEvent::Reset, InputEvent::Reset]);

    assert_eq!(*seen.lock(), vec!["1", "0", "0"]);
}

#[test]
fn disabled_increment_button_leaves_count_alone() {
    let panel = ButtonPanel::with_buttons(Button::new("+").enabled(false), Button::new("Reset"));
    let screen = CounterScreen::with_panel(&TallyConfig::default(), panel);

    assert_eq!(screen.dispatch(InputEvent::Increment), EventResult::Ignored);
    assert_eq!(screen.text(), "0");
    assert_eq!(screen.dispatch(InputEvent::Reset), EventResult::Handled);
}

#[test]
fn wrap_policy_flows_from_config() {
    let config = TallyConfig {
        counter: CounterConfig {
            overflow: OverflowPolicy::Wrap,
        },
        ..TallyConfig::default()
    };
    let screen = CounterScreen::with_config(&config);

    assert_eq!(screen.controller().policy(), OverflowPolicy::Wrap);
    assert_eq!(
        CounterScreen::new().controller().policy(),
        OverflowPolicy::Saturate
    );
}

#[test]
fn parsed_commands_reach_the_screen() {
    let screen = CounterScreen::new();
    for command in ["+", "inc", "increment"] {
        screen.dispatch(command.parse().unwrap());
    }
    assert_eq!(screen.text(), "3");

    screen.dispatch("r".parse().unwrap());
    assert_eq!(screen.text(), "0");
}
