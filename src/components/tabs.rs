//! Tab bar component
//!
//! An ordered strip of titles with one selected entry. Left/Right move
//! the selection, clamping at the ends; every effective move emits
//! `Action::TabChanged` with the new index exactly once.

use crate::action::Action;
use crate::component::Component;
use crate::theme::{TabsKind, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// A horizontal tab strip
pub struct TabBar {
    titles: Vec<String>,
    selected: usize,
    pub kind: TabsKind,
    pub disabled: bool,
    pub theme: Theme,
}

impl TabBar {
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            selected: 0,
            kind: TabsKind::default(),
            disabled: false,
            theme: Theme::default(),
        }
    }

    pub fn kind(mut self, kind: TabsKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select a tab directly, clamping to the valid range
    pub fn select(&mut self, index: usize) {
        if !self.titles.is_empty() {
            self.selected = index.min(self.titles.len() - 1);
        }
    }

    /// Move the selection by one, returning the new index when it moved
    fn step(&mut self, forward: bool) -> Option<usize> {
        if forward {
            if self.selected + 1 < self.titles.len() {
                self.selected += 1;
                return Some(self.selected);
            }
        } else if self.selected > 0 {
            self.selected -= 1;
            return Some(self.selected);
        }
        None
    }

    fn title_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::with_capacity(self.titles.len() * 2);
        for (i, title) in self.titles.iter().enumerate() {
            let selected = i == self.selected;
            let style = match self.kind {
                TabsKind::Default => {
                    if selected {
                        Style::default()
                            .fg(self.theme.primary)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(self.theme.muted)
                    }
                }
                TabsKind::Segmented => {
                    if selected {
                        Style::default()
                            .bg(self.theme.primary)
                            .fg(self.theme.on_primary)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().bg(self.theme.surface).fg(self.theme.muted)
                    }
                }
                TabsKind::Line => {
                    if selected {
                        Style::default()
                            .fg(self.theme.text)
                            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                    } else {
                        Style::default().fg(self.theme.muted)
                    }
                }
            };
            spans.push(Span::styled(format!(" {} ", title), style));
            spans.push(Span::raw(" "));
        }
        spans
    }
}

impl Component for TabBar {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.disabled {
            return Ok(None);
        }
        let moved = match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.step(true),
            KeyCode::Left | KeyCode::Char('h') => self.step(false),
            _ => None,
        };
        Ok(moved.map(Action::TabChanged))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Paragraph::new(Line::from(self.title_spans())), area);
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

    fn bar() -> TabBar {
        TabBar::new(vec!["One".into(), "Two".into(), "Three".into()])
    }

    #[test]
    fn test_right_emits_new_index() {
        let mut tabs = bar();
        assert_eq!(
            tabs.handle_key_event(key(KeyCode::Right)).unwrap(),
            Some(Action::TabChanged(1))
        );
        assert_eq!(tabs.selected(), 1);
    }

    #[test]
    fn test_clamps_at_both_ends() {
        let mut tabs = bar();
        assert_eq!(tabs.handle_key_event(key(KeyCode::Left)).unwrap(), None);
        tabs.select(2);
        assert_eq!(tabs.handle_key_event(key(KeyCode::Right)).unwrap(), None);
        assert_eq!(tabs.selected(), 2);
    }

    #[test]
    fn test_select_clamps() {
        let mut tabs = bar();
        tabs.select(99);
        assert_eq!(tabs.selected(), 2);
    }

    #[test]
    fn test_disabled_bar_ignores_keys() {
        let mut tabs = bar();
        tabs.disabled = true;
        assert_eq!(tabs.handle_key_event(key(KeyCode::Right)).unwrap(), None);
        assert_eq!(tabs.selected(), 0);
    }
}
