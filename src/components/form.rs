//! Form field wrapper - label, control area, and validation message
//!
//! Not an input itself: it frames someone else's control. `draw_frame`
//! renders the label line above and the message line below, then hands
//! the middle Rect back so the caller can draw the actual control there.

use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Label and validation chrome around a control
pub struct FormField {
    label: String,
    pub required: bool,
    /// Validation message; its presence switches the field to the error look
    pub error: Option<String>,
    pub theme: Theme,
}

impl FormField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            required: false,
            error: None,
            theme: Theme::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Rows the chrome adds around a control of `control_height` rows
    pub fn height(&self, control_height: u16) -> u16 {
        control_height + 2
    }

    /// Render label and message, returning the Rect for the control
    pub fn draw_frame(&self, frame: &mut Frame, area: Rect) -> Rect {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let mut label_spans = vec![Span::styled(
            self.label.clone(),
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD),
        )];
        if self.required {
            label_spans.push(Span::styled(
                " *",
                Style::default().fg(self.theme.destructive),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(label_spans)), rows[0]);

        if let Some(message) = &self.error {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(self.theme.destructive),
                ))),
                rows[2],
            );
        }
        rows[1]
    }
}
