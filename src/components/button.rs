//! Button component
//!
//! A focusable action trigger. Activation emits `Action::Pressed` with
//! the button's label; variant and size only change the rendering.

use crate::action::Action;
use crate::component::Component;
use crate::theme::{ButtonSize, ButtonVariant, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// A variant-styled push button
pub struct Button {
    label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    /// Whether this button currently has keyboard focus
    pub focused: bool,
    pub theme: Theme,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            focused: false,
            theme: Theme::default(),
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Cells the button wants horizontally
    pub fn width(&self) -> u16 {
        let border = if self.size.bordered() { 2 } else { 0 };
        self.label.width() as u16 + 2 * self.size.padding() + border
    }

    /// Rows the button wants vertically
    pub fn height(&self) -> u16 {
        self.size.height()
    }

    fn body_style(&self) -> Style {
        let mut style = self.variant.style(&self.theme);
        if self.disabled {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.focused && !self.disabled {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl Component for Button {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.disabled {
            return Ok(None);
        }
        let action = match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Pressed(self.label.clone())),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let style = self.body_style();
        let pad = " ".repeat(self.size.padding() as usize);
        let line = Line::from(Span::styled(
            format!("{}{}{}", pad, self.label, pad),
            style,
        ));

        if self.size.bordered() {
            let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style),
            );
            frame.render_widget(paragraph, area);
        } else {
            frame.render_widget(Paragraph::new(line), area);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_and_space_press() {
        let mut button = Button::new("Save");
        assert_eq!(
            button.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::Pressed("Save".to_string()))
        );
        assert_eq!(
            button.handle_key_event(key(KeyCode::Char(' '))).unwrap(),
            Some(Action::Pressed("Save".to_string()))
        );
        assert_eq!(button.handle_key_event(key(KeyCode::Char('x'))).unwrap(), None);
    }

    #[test]
    fn test_disabled_button_never_presses() {
        let mut button = Button::new("Save");
        button.disabled = true;
        assert_eq!(button.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
    }

    #[test]
    fn test_sizes_drive_geometry() {
        let large = Button::new("Go").size(ButtonSize::Lg);
        let tiny = Button::new("Go").size(ButtonSize::Xs);
        assert_eq!(large.height(), 3);
        assert_eq!(tiny.height(), 1);
        assert!(large.width() > tiny.width());
    }
}
