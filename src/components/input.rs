//! Text input component
//!
//! Single-line editor with cursor movement, horizontal scrolling, and an
//! optional password mode that masks every glyph. Each effective edit
//! emits `Action::InputChanged` carrying the full new value.

use crate::action::Action;
use crate::component::Component;
use crate::theme::{InputVariant, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

const MASK_CHAR: char = '•';

/// A single-line text input
pub struct TextInput {
    value: String,
    /// Cursor position as a char index into `value`
    cursor: usize,
    /// First visible char index, adjusted during draw
    scroll: usize,
    pub variant: InputVariant,
    /// Mask glyphs like a password field
    pub masked: bool,
    reveal: bool,
    pub disabled: bool,
    pub focused: bool,
    placeholder: String,
    pub theme: Theme,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            scroll: 0,
            variant: InputVariant::default(),
            masked: false,
            reveal: false,
            disabled: false,
            focused: false,
            placeholder: String::new(),
            theme: Theme::default(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value, moving the cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Whether a masked input currently shows its glyphs
    pub fn is_revealed(&self) -> bool {
        !self.masked || self.reveal
    }

    /// The glyphs actually rendered, after masking
    pub fn display_text(&self) -> String {
        if self.is_revealed() {
            self.value.clone()
        } else {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    /// Keep the cursor inside the visible window of `width` cells
    fn adjust_scroll(&mut self, width: u16) {
        let width = width.max(1) as usize;
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }
        let glyphs: Vec<char> = self.display_text().chars().collect();
        while self.scroll < self.cursor {
            let used: usize = glyphs[self.scroll..self.cursor]
                .iter()
                .map(|c| c.width().unwrap_or(0))
                .sum();
            // one cell is reserved for the cursor itself
            if used + 1 <= width {
                break;
            }
            self.scroll += 1;
        }
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TextInput {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.disabled {
            return Ok(None);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('r') && self.masked {
                self.reveal = !self.reveal;
            }
            return Ok(None);
        }
        let action = match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                Some(Action::InputChanged(self.value.clone()))
            }
            KeyCode::Backspace => self
                .backspace()
                .then(|| Action::InputChanged(self.value.clone())),
            KeyCode::Delete => self
                .delete()
                .then(|| Action::InputChanged(self.value.clone())),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mut border_style = self.variant.border_style(&self.theme);
        if self.focused && self.variant == InputVariant::Default {
            border_style = Style::default().fg(self.theme.primary);
        }
        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return Ok(());
        }

        if self.value.is_empty() && !self.focused {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                self.placeholder.clone(),
                self.variant.placeholder_style(&self.theme),
            )));
            frame.render_widget(placeholder, inner);
            return Ok(());
        }

        self.adjust_scroll(inner.width);
        let glyphs: Vec<char> = self.display_text().chars().collect();
        let text_style = Style::default().fg(self.theme.text);

        let before: String = glyphs[self.scroll..self.cursor.min(glyphs.len())]
            .iter()
            .collect();
        let mut spans = vec![Span::styled(before, text_style)];
        if self.focused {
            let at: String = glyphs
                .get(self.cursor)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            spans.push(Span::styled(at, text_style.add_modifier(Modifier::REVERSED)));
            let after: String = glyphs[(self.cursor + 1).min(glyphs.len())..].iter().collect();
            spans.push(Span::styled(after, text_style));
        } else {
            let after: String = glyphs[self.cursor.min(glyphs.len())..].iter().collect();
            spans.push(Span::styled(after, text_style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_emits_full_value() {
        let mut input = TextInput::new();
        assert_eq!(
            input.handle_key_event(key(KeyCode::Char('h'))).unwrap(),
            Some(Action::InputChanged("h".to_string()))
        );
        assert_eq!(
            input.handle_key_event(key(KeyCode::Char('i'))).unwrap(),
            Some(Action::InputChanged("hi".to_string()))
        );
    }

    #[test]
    fn test_backspace_at_start_is_silent() {
        let mut input = TextInput::new();
        assert_eq!(input.handle_key_event(key(KeyCode::Backspace)).unwrap(), None);
        input.set_value("ab");
        input.handle_key_event(key(KeyCode::Home)).unwrap();
        assert_eq!(input.handle_key_event(key(KeyCode::Backspace)).unwrap(), None);
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_cursor_editing_in_the_middle() {
        let mut input = TextInput::new();
        input.set_value("ac");
        input.handle_key_event(key(KeyCode::Left)).unwrap();
        input.handle_key_event(key(KeyCode::Char('b'))).unwrap();
        assert_eq!(input.value(), "abc");
        input.handle_key_event(key(KeyCode::Delete)).unwrap();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_multibyte_cursor_arithmetic() {
        let mut input = TextInput::new();
        input.handle_key_event(key(KeyCode::Char('日'))).unwrap();
        input.handle_key_event(key(KeyCode::Char('本'))).unwrap();
        input.handle_key_event(key(KeyCode::Left)).unwrap();
        input.handle_key_event(key(KeyCode::Backspace)).unwrap();
        assert_eq!(input.value(), "本");
    }

    #[test]
    fn test_masked_display_hides_value() {
        let mut input = TextInput::new().masked();
        input.set_value("secret");
        assert_eq!(input.display_text(), "••••••");
        input.handle_key_event(ctrl('r')).unwrap();
        assert_eq!(input.display_text(), "secret");
        input.handle_key_event(ctrl('r')).unwrap();
        assert_eq!(input.display_text(), "••••••");
    }

    #[test]
    fn test_reveal_toggle_ignored_when_not_masked() {
        let mut input = TextInput::new();
        input.set_value("plain");
        input.handle_key_event(ctrl('r')).unwrap();
        assert!(input.is_revealed());
        assert_eq!(input.display_text(), "plain");
    }

    #[test]
    fn test_disabled_input_ignores_everything() {
        let mut input = TextInput::new();
        input.disabled = true;
        assert_eq!(input.handle_key_event(key(KeyCode::Char('x'))).unwrap(), None);
        assert_eq!(input.value(), "");
    }
}
