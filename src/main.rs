//! trellis-tui gallery
//!
//! Interactive showcase of the component catalogue. Every component is
//! mounted the way a consuming application would mount it: events in,
//! Actions out, values echoed in the status line.

mod app;
mod config;

use crate::app::App;
use crate::config::Config;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;
use trellis_tui::{action::Action, component::Component, tui::Tui};

fn main() -> Result<()> {
    let config = Config::load();

    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    let mut app = App::new(config);
    app.init()?;

    let result = run_app(&mut tui, &mut app);

    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                eprintln!("Draw error: {}", e);
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // an action may produce a follow-up action
            if let Some(action) = action {
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
