//! Badge component - status indicators, labels, and counters
//!
//! Render-only: a badge never handles input and never emits an Action.

use crate::action::Action;
use crate::component::Component;
use crate::theme::{BadgeKind, BadgeTone, Theme};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// A small label with a tone and a role
pub struct Badge {
    label: String,
    pub kind: BadgeKind,
    pub tone: BadgeTone,
    /// Outlined badges draw the tone as foreground instead of fill
    pub outlined: bool,
    pub theme: Theme,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: BadgeKind::default(),
            tone: BadgeTone::default(),
            outlined: false,
            theme: Theme::default(),
        }
    }

    pub fn kind(mut self, kind: BadgeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn tone(mut self, tone: BadgeTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn outlined(mut self) -> Self {
        self.outlined = true;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Cells the badge occupies on its single row
    pub fn width(&self) -> u16 {
        let label = self.label.width() as u16;
        match self.kind {
            BadgeKind::Default => label + 2,
            BadgeKind::Status => label + 4,
            BadgeKind::Indicator => label + 4,
        }
    }

    fn body_style(&self) -> Style {
        let accent = self.tone.color(&self.theme);
        if self.outlined {
            Style::default().fg(accent)
        } else {
            Style::default().bg(accent).fg(self.theme.on_primary)
        }
    }

    fn line(&self) -> Line<'_> {
        match self.kind {
            BadgeKind::Default => Line::from(Span::styled(
                format!(" {} ", self.label),
                self.body_style(),
            )),
            BadgeKind::Status => Line::from(vec![
                Span::styled("( ", Style::default().fg(self.theme.muted)),
                Span::styled(self.label.clone(), Style::default().fg(self.theme.text)),
                Span::styled(" )", Style::default().fg(self.theme.muted)),
            ]),
            BadgeKind::Indicator => Line::from(Span::styled(
                format!(" ● {} ", self.label),
                self.body_style().add_modifier(Modifier::BOLD),
            )),
        }
    }
}

impl Component for Badge {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Paragraph::new(self.line()), area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(badge: &mut Badge, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| badge.draw(frame, frame.area()).unwrap())
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..width)
            .map(|x| buffer[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_default_badge_renders_padded_label() {
        let mut badge = Badge::new("new");
        assert_eq!(render(&mut badge, 8), " new    ");
    }

    #[test]
    fn test_indicator_badge_prefixes_a_dot() {
        let mut badge = Badge::new("live").kind(BadgeKind::Indicator).tone(BadgeTone::Green);
        assert!(render(&mut badge, 10).starts_with(" ● live"));
    }

    #[test]
    fn test_status_badge_brackets_label() {
        let mut badge = Badge::new("draft").kind(BadgeKind::Status);
        assert!(render(&mut badge, 12).starts_with("( draft )"));
    }

    #[test]
    fn test_width_accounts_for_decoration() {
        assert_eq!(Badge::new("ok").width(), 4);
        assert_eq!(Badge::new("ok").kind(BadgeKind::Indicator).width(), 6);
    }
}
