use serde::{Deserialize, Serialize};

use crate::component::greeting::GreetingProps;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Props the shell composes the greeting panel with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Greeting shown after the introduction.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Name addressed by the counter line. Optional.
    #[serde(default)]
    pub name: Option<String>,
    /// Show the click counter (default: false).
    #[serde(default)]
    pub show_counter: bool,
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_greeting() -> String {
    "I'm a stateful class component!".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            name: Some("Joy".to_string()),
            show_counter: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl PanelConfig {
    pub fn props(&self) -> GreetingProps {
        GreetingProps {
            greeting: self.greeting.clone(),
            name: self.name.clone(),
            show_counter: self.show_counter,
        }
    }
}
