//! Select component - single-value dropdown with a windowed option menu
//!
//! The committed value and the transient highlight are separate: arrow
//! keys move the highlight inside the open menu, Enter commits it (the
//! single point where `Action::OptionPicked` is emitted), Esc abandons
//! it. Long option lists are virtualized - only a fixed-height window of
//! rows is laid out, with the window offset chasing the highlight.

use crate::action::Action;
use crate::component::Component;
use crate::model::option::SelectOption;
use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const DEFAULT_MENU_HEIGHT: usize = 8;

/// A dropdown selection input
pub struct Select {
    options: Vec<SelectOption>,
    /// Committed option index
    selected: Option<usize>,
    /// Highlight inside the open menu
    highlighted: usize,
    /// First option row inside the virtualization window
    offset: usize,
    /// Rows in the virtualization window
    menu_height: usize,
    open: bool,
    pub disabled: bool,
    pub error: bool,
    pub focused: bool,
    placeholder: String,
    pub theme: Theme,
}

impl Select {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            selected: None,
            highlighted: 0,
            offset: 0,
            menu_height: DEFAULT_MENU_HEIGHT,
            open: false,
            disabled: false,
            error: false,
            focused: false,
            placeholder: String::new(),
            theme: Theme::default(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn menu_height(mut self, rows: usize) -> Self {
        self.menu_height = rows.max(1);
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Value of the committed option, if any
    pub fn value(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].value.as_str())
    }

    /// Label of the committed option, if any
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].label.as_str())
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Commit the option matching `value`; unknown values are ignored
    pub fn set_value(&mut self, value: &str) {
        if let Some(pos) = self.options.iter().position(|o| o.value == value) {
            self.selected = Some(pos);
            self.highlighted = pos;
            self.ensure_highlight_visible();
        }
    }

    /// Drop the committed selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The virtualization window: (offset, visible rows)
    pub fn visible_window(&self) -> (usize, &[SelectOption]) {
        let end = (self.offset + self.menu_height).min(self.options.len());
        (self.offset, &self.options[self.offset..end])
    }

    fn open_menu(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.open = true;
        self.highlighted = self.selected.unwrap_or(0);
        self.ensure_highlight_visible();
    }

    fn move_highlight(&mut self, delta: isize) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() as isize - 1;
        let next = (self.highlighted as isize + delta).clamp(0, last);
        self.highlighted = next as usize;
        self.ensure_highlight_visible();
    }

    /// Keep `offset <= highlighted < offset + menu_height`
    fn ensure_highlight_visible(&mut self) {
        let rows = self.menu_height.max(1);
        if self.highlighted < self.offset {
            self.offset = self.highlighted;
        } else if self.highlighted >= self.offset + rows {
            self.offset = self.highlighted + 1 - rows;
        }
        self.offset = self.offset.min(self.options.len().saturating_sub(rows));
    }

    fn field_border_style(&self) -> Style {
        if self.error {
            Style::default().fg(self.theme.destructive)
        } else if self.focused {
            Style::default().fg(self.theme.primary)
        } else {
            Style::default().fg(self.theme.border)
        }
    }
}

impl Component for Select {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.disabled {
            return Ok(None);
        }
        if !self.open {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => self.open_menu(),
                _ => {}
            }
            return Ok(None);
        }
        let action = match key.code {
            KeyCode::Up => {
                self.move_highlight(-1);
                None
            }
            KeyCode::Down => {
                self.move_highlight(1);
                None
            }
            KeyCode::PageUp => {
                self.move_highlight(-(self.menu_height as isize));
                None
            }
            KeyCode::PageDown => {
                self.move_highlight(self.menu_height as isize);
                None
            }
            KeyCode::Home => {
                self.move_highlight(isize::MIN / 2);
                None
            }
            KeyCode::End => {
                self.move_highlight(isize::MAX / 2);
                None
            }
            KeyCode::Enter => {
                self.selected = Some(self.highlighted);
                self.open = false;
                Some(Action::OptionPicked(
                    self.options[self.highlighted].value.clone(),
                ))
            }
            KeyCode::Esc => {
                self.open = false;
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Closed field, always 3 rows
        let field_area = Rect {
            height: area.height.min(3),
            ..area
        };
        let arrow = if self.open { "▴" } else { "▾" };
        let (label, label_style) = match self.selected_label() {
            Some(label) => (label.to_string(), Style::default().fg(self.theme.text)),
            None => (
                self.placeholder.clone(),
                Style::default().fg(if self.error {
                    self.theme.destructive
                } else {
                    self.theme.muted
                }),
            ),
        };
        let field = Paragraph::new(Line::from(vec![
            Span::styled(label, label_style),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.field_border_style())
                .title_bottom(Line::from(arrow).right_aligned()),
        );
        frame.render_widget(field, field_area);

        if !self.open {
            return Ok(());
        }

        // Dropdown menu below the field, clipped to the remaining area
        let below = area.height.saturating_sub(field_area.height);
        let rows = (self.menu_height as u16).min(below.saturating_sub(2));
        if rows == 0 {
            return Ok(());
        }
        let menu_area = Rect::new(area.x, area.y + field_area.height, area.width, rows + 2);
        frame.render_widget(Clear, menu_area);

        let (offset, window) = self.visible_window();
        let items: Vec<ListItem> = window
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let index = offset + i;
                let mut style = Style::default().fg(self.theme.text);
                if index == self.highlighted {
                    style = Style::default()
                        .bg(self.theme.primary)
                        .fg(self.theme.on_primary)
                        .add_modifier(Modifier::BOLD);
                } else if Some(index) == self.selected {
                    style = Style::default().fg(self.theme.primary);
                }
                ListItem::new(Line::from(Span::styled(option.label.clone(), style)))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.border)),
        );
        frame.render_widget(list, menu_area);
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

    fn numbered(n: usize) -> Select {
        let options = (0..n)
            .map(|i| SelectOption::from_value(format!("{:03}", i)))
            .collect();
        Select::new(options).menu_height(5)
    }

    fn window_invariant(select: &Select) -> bool {
        let (offset, window) = select.visible_window();
        offset <= select.highlighted
            && select.highlighted < offset + select.menu_height
            && window.len() <= select.menu_height
    }

    #[test]
    fn test_window_chases_highlight_down() {
        let mut select = numbered(60);
        select.handle_key_event(key(KeyCode::Enter)).unwrap();
        for _ in 0..7 {
            select.handle_key_event(key(KeyCode::Down)).unwrap();
            assert!(window_invariant(&select));
        }
        let (offset, window) = select.visible_window();
        assert_eq!(offset, 3);
        assert_eq!(window.len(), 5);
    }

    #[test]
    fn test_window_chases_highlight_to_the_ends() {
        let mut select = numbered(60);
        select.handle_key_event(key(KeyCode::Enter)).unwrap();
        select.handle_key_event(key(KeyCode::End)).unwrap();
        assert!(window_invariant(&select));
        assert_eq!(select.visible_window().0, 55);
        select.handle_key_event(key(KeyCode::Home)).unwrap();
        assert!(window_invariant(&select));
        assert_eq!(select.visible_window().0, 0);
    }

    #[test]
    fn test_commit_emits_once_and_closes() {
        let mut select = numbered(10);
        select.handle_key_event(key(KeyCode::Enter)).unwrap();
        select.handle_key_event(key(KeyCode::Down)).unwrap();
        select.handle_key_event(key(KeyCode::Down)).unwrap();
        let action = select.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::OptionPicked("002".to_string())));
        assert!(!select.is_open());
        assert_eq!(select.value(), Some("002"));
    }

    #[test]
    fn test_escape_abandons_highlight() {
        let mut select = numbered(10);
        select.set_value("004");
        select.handle_key_event(key(KeyCode::Enter)).unwrap();
        select.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(select.handle_key_event(key(KeyCode::Esc)).unwrap(), None);
        assert_eq!(select.value(), Some("004"));
    }

    #[test]
    fn test_set_value_ignores_unknown_values() {
        let mut select = numbered(10);
        select.set_value("004");
        select.set_value("nope");
        assert_eq!(select.value(), Some("004"));
    }

    #[test]
    fn test_reopening_starts_at_committed_option() {
        let mut select = numbered(60);
        select.set_value("030");
        select.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert!(window_invariant(&select));
        assert_eq!(select.visible_window().0, 26);
    }

    #[test]
    fn test_disabled_select_emits_nothing() {
        let mut select = numbered(10);
        select.disabled = true;
        assert_eq!(select.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
        assert!(!select.is_open());
    }

    #[test]
    fn test_empty_options_never_open() {
        let mut select = Select::new(Vec::new());
        assert_eq!(select.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
        assert!(!select.is_open());
        assert_eq!(select.value(), None);
    }
}
