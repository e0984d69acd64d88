//! Dialog component - modal confirm/dismiss overlay
//!
//! Drawn over a cleared, centered popup. Left/Right/Tab move between the
//! two action buttons, Enter activates the highlighted one, Esc always
//! dismisses. A destructive dialog restyles its confirm button; nothing
//! else changes.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Which action button is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Confirm,
    Dismiss,
}

impl DialogChoice {
    fn other(self) -> Self {
        match self {
            DialogChoice::Confirm => DialogChoice::Dismiss,
            DialogChoice::Dismiss => DialogChoice::Confirm,
        }
    }
}

/// A modal confirmation dialog
pub struct Dialog {
    title: String,
    body: String,
    confirm_label: String,
    dismiss_label: String,
    /// Restyle the confirm button with the destructive accent
    pub destructive: bool,
    choice: DialogChoice,
    pub theme: Theme,
}

impl Dialog {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            confirm_label: "OK".to_string(),
            dismiss_label: "Cancel".to_string(),
            destructive: false,
            choice: DialogChoice::Dismiss,
            theme: Theme::default(),
        }
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn dismiss_label(mut self, label: impl Into<String>) -> Self {
        self.dismiss_label = label.into();
        self
    }

    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }

    pub fn choice(&self) -> DialogChoice {
        self.choice
    }

    /// Reset the highlight to the safe (dismiss) button
    pub fn reset(&mut self) {
        self.choice = DialogChoice::Dismiss;
    }

    fn button_span(&self, label: &str, active: bool, destructive: bool) -> Span<'_> {
        let mut style = if destructive {
            Style::default().fg(self.theme.destructive)
        } else {
            Style::default().fg(self.theme.text)
        };
        if active {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Span::styled(format!("[ {} ]", label), style)
    }
}

impl Component for Dialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.choice = self.choice.other();
                None
            }
            KeyCode::Enter => Some(match self.choice {
                DialogChoice::Confirm => Action::DialogConfirmed,
                DialogChoice::Dismiss => Action::DialogDismissed,
            }),
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::DialogConfirmed),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(Action::DialogDismissed)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 46, 8);
        frame.render_widget(Clear, popup_area);

        let border_color = if self.destructive {
            self.theme.destructive
        } else {
            self.theme.primary
        };
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.body.clone(),
                Style::default().fg(self.theme.text),
            )),
            Line::from(""),
            Line::from(vec![
                self.button_span(&self.dismiss_label, self.choice == DialogChoice::Dismiss, false),
                Span::raw("  "),
                self.button_span(
                    &self.confirm_label,
                    self.choice == DialogChoice::Confirm,
                    self.destructive,
                ),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!(" {} ", self.title))
                    .title_style(
                        Style::default()
                            .fg(border_color)
                            .add_modifier(Modifier::BOLD),
                    ),
            );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
