//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use greeting_panel::component::greeting::GreetingProps;
use greeting_panel::ui::app::App;
use std::path::PathBuf;
use tempfile::TempDir;

pub const STATEFUL_GREETING: &str = "I'm a stateful component!";

pub fn joy_props() -> GreetingProps {
    GreetingProps::new(STATEFUL_GREETING).with_name("Joy")
}

pub fn make_app() -> App {
    App::new(joy_props())
}

pub fn make_counter_app() -> App {
    App::new(joy_props().with_counter(true))
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
