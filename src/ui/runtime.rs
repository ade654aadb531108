use crate::api::ComicClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use tokio::runtime::Handle;

/// Runs the page until the user quits.
///
/// The calling thread becomes the UI thread; network work runs on `runtime`.
pub fn run(config: &Config, client: ComicClient, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    let mut app = App::new();
    app.set_command_sender(worker::spawn(runtime, client, events.sender()));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            // Ticks and resizes only need the redraw above.
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Ok(event) => app.on_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
