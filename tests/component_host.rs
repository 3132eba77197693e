//! Lifecycle, ordering and render-count behaviour of the component host.

mod common;

use common::{joy_props, STATEFUL_GREETING};
use greeting_panel::component::greeting::{
    GreetingIntent, GreetingPanel, GreetingPatch, GreetingProps, GreetingState, INCREMENT_LABEL,
};
use greeting_panel::component::Action;
use greeting_panel::ui::mvi::{Component, Host};
use std::panic::{catch_unwind, AssertUnwindSafe};

fn plus_one() -> GreetingIntent {
    GreetingIntent::update(|prev| GreetingState {
        count: prev.count + 1,
        ..prev.clone()
    })
}

#[test]
fn mount_initializes_default_state() {
    let host = Host::<GreetingPanel>::mount(joy_props());
    assert_eq!(host.state(), &GreetingState::default());
    assert_eq!(host.render_count(), 0);
    assert!(host.needs_render());
}

#[test]
fn joy_example_renders_heading_and_exit_button() {
    let mut host = Host::<GreetingPanel>::mount(joy_props());
    let view = host.view();
    assert_eq!(view.heading_text(1), Some("Hello! I'm a stateful component!"));
    let buttons = view.buttons();
    assert_eq!(buttons.len(), 1);
    assert_eq!(buttons[0].label, "Exit");
    assert_eq!(buttons[0].action, Action::Exit);
}

#[test]
fn any_greeting_follows_introduction() {
    for (greeting, name) in [("hi", "A"), ("", ""), ("ünïcödé ✓", "名前"), ("  spaced ", "x")] {
        let props = GreetingProps::new(greeting).with_name(name);
        let state = GreetingPanel::initialize(&props);
        let view = GreetingPanel::render(&props, &state);
        let heading = view.heading_text(1).unwrap();
        assert!(heading.starts_with("Hello!"));
        assert!(heading.ends_with(greeting));
        assert_eq!(view.buttons()[0].label, "Exit");
    }
}

#[test]
fn render_is_idempotent() {
    let props = joy_props().with_counter(true);
    let state = GreetingState {
        count: 7,
        ..GreetingState::default()
    };
    let first = GreetingPanel::render(&props, &state);
    let second = GreetingPanel::render(&props, &state);
    assert_eq!(first, second);
}

#[test]
fn render_leaves_props_untouched() {
    let props = joy_props();
    let before = props.clone();
    let mut host = Host::<GreetingPanel>::mount(props);
    host.view();
    assert_eq!(host.props(), &before);
}

#[test]
fn missing_name_renders_without_name_segment() {
    let props = GreetingProps::new("hi").with_counter(true);
    let mut host = Host::<GreetingPanel>::mount(props);
    let view = host.view();
    assert_eq!(view.heading_text(1), Some("Hello! hi"));
    assert_eq!(
        view.headings(),
        vec![(1, "Hello! hi"), (2, "You've clicked 0 times")]
    );
}

#[test]
fn dispatch_is_deferred_until_settle() {
    let mut host = Host::<GreetingPanel>::mount(joy_props());
    host.dispatch(GreetingIntent::Increment);
    assert_eq!(host.pending(), 1);
    assert_eq!(host.state().count, 0);

    assert_eq!(host.settle(), 1);
    assert_eq!(host.pending(), 0);
    assert_eq!(host.state().count, 1);
}

#[test]
fn three_queued_updates_are_not_lost() {
    let mut host = Host::<GreetingPanel>::mount(joy_props().with_counter(true));
    host.view();
    assert_eq!(host.render_count(), 1);

    host.dispatch(plus_one());
    host.dispatch(plus_one());
    host.dispatch(plus_one());

    let view = host.view();
    assert!(view.headings().contains(&(2, "You've clicked 3 times")));
    assert_eq!(host.state().count, 3);
    // One render for the settled batch.
    assert_eq!(host.render_count(), 2);
}

#[test]
fn patch_then_updater_apply_in_submission_order() {
    let mut host = Host::<GreetingPanel>::mount(joy_props());
    host.dispatch(GreetingIntent::Patch(GreetingPatch {
        introduction: Some("Hi!".to_string()),
        ..GreetingPatch::default()
    }));
    host.dispatch(GreetingIntent::update(|prev| GreetingState {
        introduction: format!("{} {}", prev.introduction, prev.introduction),
        ..prev.clone()
    }));

    assert_eq!(
        host.view().heading_text(1),
        Some(format!("Hi! Hi! {STATEFUL_GREETING}").as_str())
    );
}

#[test]
fn view_without_changes_does_not_rerender() {
    let mut host = Host::<GreetingPanel>::mount(joy_props());
    let first = host.view().clone();
    let second = host.view().clone();
    assert_eq!(first, second);
    assert_eq!(host.render_count(), 1);
    assert!(!host.needs_render());
}

#[test]
fn each_settled_update_renders_once() {
    let mut host = Host::<GreetingPanel>::mount(joy_props());
    host.view();
    host.dispatch(GreetingIntent::Patch(GreetingPatch::default()));
    assert!(host.needs_render());
    host.view();
    host.view();
    assert_eq!(host.render_count(), 2);
}

#[test]
fn recompose_keeps_state_and_rerenders() {
    let mut host = Host::<GreetingPanel>::mount(joy_props());
    host.dispatch(GreetingIntent::Increment);
    host.view();

    host.recompose(joy_props().with_counter(true));
    assert!(host.needs_render());
    let view = host.view();
    assert_eq!(view.heading_text(2), Some("Hello, Joy"));
    assert!(view.headings().contains(&(2, "You've clicked 1 times")));
    let labels: Vec<&str> = view.buttons().iter().map(|b| b.label).collect();
    assert_eq!(labels, vec![INCREMENT_LABEL, "Exit"]);
    assert_eq!(host.render_count(), 2);
}

#[test]
fn patched_button_text_relabels_exit_button() {
    let mut host = Host::<GreetingPanel>::mount(joy_props());
    host.dispatch(GreetingIntent::Patch(GreetingPatch {
        button_text: Some("Bye".to_string()),
        ..GreetingPatch::default()
    }));
    let buttons = host.view().buttons();
    assert_eq!(buttons[0].label, "Bye");
    assert_eq!(buttons[0].action, Action::Exit);
}

#[test]
fn unmount_returns_settled_state_and_drops_pending() {
    let mut host = Host::<GreetingPanel>::mount(joy_props());
    host.dispatch(GreetingIntent::Increment);
    host.settle();
    host.dispatch(GreetingIntent::Increment);

    let state = host.unmount();
    assert_eq!(state.count, 1);
}

#[test]
fn panicking_updater_keeps_settled_state_and_view() {
    let mut host = Host::<GreetingPanel>::mount(joy_props().with_counter(true));
    for _ in 0..5 {
        host.dispatch(GreetingIntent::Increment);
    }
    host.view();
    assert_eq!(host.state().count, 5);

    host.dispatch(GreetingIntent::Increment);
    host.dispatch(GreetingIntent::update(|_| panic!("updater bug")));
    let result = catch_unwind(AssertUnwindSafe(|| host.settle()));
    assert!(result.is_err());

    // The faulty batch is consumed; nothing from it is applied.
    assert_eq!(host.pending(), 0);
    assert_eq!(host.state().count, 5);
    assert!(!host.needs_render());
    assert!(host.view().headings().contains(&(2, "You've clicked 5 times")));
    assert_eq!(host.render_count(), 1);

    host.dispatch(GreetingIntent::Increment);
    assert!(host.view().headings().contains(&(2, "You've clicked 6 times")));
}
