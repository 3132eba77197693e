use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config.panel.props());
    let events = EventHandler::new(tick_rate);

    let mut redraw = true;
    loop {
        if redraw || app.needs_redraw() {
            terminal.draw(|frame| draw(frame, &mut app))?;
            redraw = false;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                redraw = true;
            }
            Ok(AppEvent::Resize) => redraw = true,
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    let state = app.shutdown();
    tracing::info!(count = state.count, "panel closed");
    drop(guard);
    Ok(())
}
