use crate::config::UiConfig;
use crate::error::Result;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;

/// Runs the TUI until the user quits.
///
/// Frames are drawn only when something invalidated the view: a store
/// notification, a UI state change, or a resize.
pub fn run(config: &UiConfig) -> Result<()> {
    let tick_rate = config.tick_rate();
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new();
    let events = EventHandler::new(tick_rate)?;
    tracing::info!(tick_rate_ms = config.tick_rate_ms, "ui started");

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "resize");
                app.invalidate();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!(count = app.count(), "ui stopped");
    Ok(())
}
