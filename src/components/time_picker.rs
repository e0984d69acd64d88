//! Time picker component - hour/minute selector over a canonical string
//!
//! Two dropdown columns (hour, minute) backed by one [`TimeValue`]. The
//! owner pushes a canonical `HH:mm` string in through [`TimePicker::set_value`]
//! and receives `Action::TimeChanged` with the recombined string whenever
//! the user commits either column. The component owns no authoritative
//! state: its display derives from the last-known-good parse of the
//! external value plus the user's own commits.
//!
//! Invalid external input is silently ignored - the previous fields are
//! retained and no error is surfaced. The `error` flag is caller-supplied
//! presentation with no effect on parsing or emission.

use crate::action::Action;
use crate::component::Component;
use crate::model::time::{hour_options, minute_options, parse_time, TimeValue};
use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::select::Select;

const FIELD_WIDTH: u16 = 8;

/// Which column has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeField {
    Hour,
    Minute,
}

/// An hour/minute picker emitting canonical `HH:mm` strings
pub struct TimePicker {
    value: TimeValue,
    focus: TimeField,
    hour: Select,
    minute: Select,
    pub disabled: bool,
    pub error: bool,
    pub focused: bool,
    pub theme: Theme,
}

impl TimePicker {
    pub fn new() -> Self {
        Self {
            value: TimeValue::empty(),
            focus: TimeField::Hour,
            hour: Select::new(hour_options()).placeholder("HH"),
            minute: Select::new(minute_options()).placeholder("mm"),
            disabled: false,
            error: false,
            focused: false,
            theme: Theme::default(),
        }
    }

    /// Create a picker already holding the parsed external value
    pub fn with_value(value: Option<&str>) -> Self {
        let mut picker = Self::new();
        picker.set_value(value);
        picker
    }

    /// Receive a new external value
    ///
    /// A parseable string replaces both fields (zero-padded); anything
    /// else - `None`, malformed, out of range - leaves the current
    /// fields untouched.
    pub fn set_value(&mut self, value: Option<&str>) {
        if let Some(time) = value.and_then(parse_time) {
            self.hour.set_value(&time.hour);
            self.minute.set_value(&time.minute);
            self.value = time;
        }
    }

    /// The current two-field value
    pub fn time(&self) -> &TimeValue {
        &self.value
    }

    /// The recombined canonical string, fields left empty when unset
    pub fn canonical(&self) -> String {
        self.value.compose()
    }

    /// Whether either column's menu is open
    pub fn is_open(&self) -> bool {
        self.hour.is_open() || self.minute.is_open()
    }

    fn focused_select_mut(&mut self) -> &mut Select {
        match self.focus {
            TimeField::Hour => &mut self.hour,
            TimeField::Minute => &mut self.minute,
        }
    }

    /// Fold a column commit back into the value and recombine
    fn apply_pick(&mut self, picked: String) -> Action {
        match self.focus {
            TimeField::Hour => self.value.hour = picked,
            TimeField::Minute => self.value.minute = picked,
        }
        Action::TimeChanged(self.value.compose())
    }

    fn sync_presentation(&mut self) {
        self.hour.error = self.error;
        self.minute.error = self.error;
        self.hour.disabled = self.disabled;
        self.minute.disabled = self.disabled;
        self.hour.theme = self.theme;
        self.minute.theme = self.theme;
        self.hour.focused = self.focused && self.focus == TimeField::Hour;
        self.minute.focused = self.focused && self.focus == TimeField::Minute;
    }
}

impl Default for TimePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TimePicker {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.disabled {
            return Ok(None);
        }
        self.sync_presentation();

        // An open column consumes everything until it closes
        if self.focused_select_mut().is_open() {
            let picked = self.focused_select_mut().handle_key_event(key)?;
            if let Some(Action::OptionPicked(value)) = picked {
                return Ok(Some(self.apply_pick(value)));
            }
            return Ok(None);
        }

        match key.code {
            KeyCode::Left => {
                self.focus = TimeField::Hour;
                Ok(None)
            }
            KeyCode::Right => {
                self.focus = match self.focus {
                    TimeField::Hour => TimeField::Minute,
                    TimeField::Minute => TimeField::Hour,
                };
                Ok(None)
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                self.focused_select_mut().handle_key_event(key)?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.sync_presentation();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(FIELD_WIDTH),
                Constraint::Length(3),
                Constraint::Length(FIELD_WIDTH),
            ])
            .split(area);

        self.hour.draw(frame, columns[0])?;

        // Colon separator, vertically centered on the field row
        let colon_area = Rect {
            y: columns[1].y + 1,
            height: columns[1].height.saturating_sub(1).min(1),
            ..columns[1]
        };
        let colon = Paragraph::new(Line::from(Span::styled(
            " : ",
            Style::default().fg(self.theme.text),
        )));
        frame.render_widget(colon, colon_area);

        self.minute.draw(frame, columns[2])?;
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

    /// Open the focused column, step the highlight, commit, and collect
    /// every emitted action along the way
    fn pick(picker: &mut TimePicker, steps: usize) -> Vec<Action> {
        let mut emitted = Vec::new();
        let mut push = |a: Option<Action>| emitted.extend(a);
        push(picker.handle_key_event(key(KeyCode::Enter)).unwrap());
        for _ in 0..steps {
            push(picker.handle_key_event(key(KeyCode::Down)).unwrap());
        }
        push(picker.handle_key_event(key(KeyCode::Enter)).unwrap());
        emitted
    }

    #[test]
    fn test_mount_with_external_value() {
        let picker = TimePicker::with_value(Some("12:00"));
        assert_eq!(picker.time().hour, "12");
        assert_eq!(picker.time().minute, "00");
        assert_eq!(picker.canonical(), "12:00");
    }

    #[test]
    fn test_one_digit_hour_is_padded_on_parse() {
        let picker = TimePicker::with_value(Some("5:30"));
        assert_eq!(picker.canonical(), "05:30");
    }

    #[test]
    fn test_invalid_external_value_retains_state() {
        let mut picker = TimePicker::with_value(Some("12:00"));
        for bad in [Some("24:00"), Some("aa:bb"), Some(""), None] {
            picker.set_value(bad);
            assert_eq!(picker.canonical(), "12:00");
        }
    }

    #[test]
    fn test_picking_hour_recombines_with_current_minute() {
        let mut picker = TimePicker::with_value(Some("12:30"));
        // menu opens on the committed hour "12"; two steps reach "14"
        let emitted = pick(&mut picker, 2);
        assert_eq!(emitted, vec![Action::TimeChanged("14:30".to_string())]);
        assert_eq!(picker.canonical(), "14:30");
    }

    #[test]
    fn test_picking_minute_with_hour_unset_emits_partial() {
        let mut picker = TimePicker::new();
        picker.handle_key_event(key(KeyCode::Right)).unwrap();
        let emitted = pick(&mut picker, 15);
        assert_eq!(emitted, vec![Action::TimeChanged(":15".to_string())]);
    }

    #[test]
    fn test_external_value_overrides_local_edit() {
        let mut picker = TimePicker::with_value(Some("12:00"));
        let emitted = pick(&mut picker, 2);
        assert_eq!(emitted, vec![Action::TimeChanged("14:00".to_string())]);
        picker.set_value(Some("08:45"));
        assert_eq!(picker.time().hour, "08");
        assert_eq!(picker.time().minute, "45");
    }

    #[test]
    fn test_disabled_picker_emits_nothing() {
        let mut picker = TimePicker::with_value(Some("12:00"));
        picker.disabled = true;
        for code in [
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Right,
            KeyCode::Char(' '),
        ] {
            assert_eq!(picker.handle_key_event(key(code)).unwrap(), None);
        }
        assert_eq!(picker.canonical(), "12:00");
    }

    #[test]
    fn test_columns_carry_full_option_lists() {
        let picker = TimePicker::new();
        assert_eq!(picker.hour.options().len(), 24);
        assert_eq!(picker.minute.options().len(), 60);
        assert_eq!(picker.hour.options()[0].value, "00");
        assert_eq!(picker.hour.options()[23].value, "23");
        assert_eq!(picker.minute.options()[59].value, "59");
    }

    #[test]
    fn test_escape_abandons_without_emission() {
        let mut picker = TimePicker::with_value(Some("12:00"));
        picker.handle_key_event(key(KeyCode::Enter)).unwrap();
        picker.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(picker.handle_key_event(key(KeyCode::Esc)).unwrap(), None);
        assert_eq!(picker.canonical(), "12:00");
    }
}
