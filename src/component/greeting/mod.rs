mod intent;
mod panel;
mod props;
mod reducer;
mod state;

pub use intent::{GreetingIntent, GreetingPatch, Updater};
pub use panel::{GreetingPanel, INCREMENT_LABEL};
pub use props::GreetingProps;
pub use state::GreetingState;
