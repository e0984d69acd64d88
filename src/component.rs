//! Component trait - the uniform contract of every building block
//!
//! A component is a struct that owns its presentation state, translates
//! input events into semantic Actions, and renders itself into a caller
//! supplied area. State the caller cares about (the committed value, the
//! disabled flag, a styling variant) lives in public fields or setters;
//! everything transient (cursors, scroll windows, open menus) stays
//! private to the component.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait implemented by every interactive building block
///
/// The contract mirrors a controlled component:
/// - The owner pushes values in through the component's setters
/// - `handle_key_event` / `handle_mouse_event` turn events into Actions;
///   the returned Action is the component's only output channel
/// - `draw` is pure presentation and must not change observable state
pub trait Component {
    /// Initialize the component
    ///
    /// Called once before the first draw, for state that depends on
    /// runtime information.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    ///
    /// A disabled component returns `Ok(None)` for every event; the
    /// owner never receives an emission it did not cause.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Handle a mouse event, returning an optional Action
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Draw the component into the given area
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
