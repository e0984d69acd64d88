//! Calendar component - month grid date selector
//!
//! A keyboard-driven month grid with quick month/year navigation,
//! exchanging `DD.MM.YYYY` strings with its owner under the same
//! parse-or-retain policy as the time picker: unparseable external input
//! is ignored, formatting happens only on emission.

use crate::action::Action;
use crate::component::Component;
use crate::model::date::{
    add_months, format_date, month_grid, month_start, parse_date, year_page_start, YEAR_PAGE_LEN,
};
use crate::theme::Theme;
use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// What the caption area is currently selecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptionMode {
    /// Regular day grid
    Days,
    /// Twelve-month quick-select
    Months,
    /// Twenty-year quick-select, paged left/right
    Years { page: i32 },
}

/// A month-grid date picker
pub struct Calendar {
    /// First day of the displayed month
    month: NaiveDate,
    /// Keyboard cursor day
    cursor: NaiveDate,
    /// Committed selection
    selected: Option<NaiveDate>,
    mode: CaptionMode,
    /// Cursor inside the month quick-select, 0..12
    month_cursor: usize,
    /// Cursor inside the year quick-select, 0..20
    year_cursor: usize,
    /// Start of the visually highlighted range (inclusive)
    pub highlight_from: Option<NaiveDate>,
    /// End of the visually highlighted range (inclusive)
    pub highlight_to: Option<NaiveDate>,
    pub disabled: bool,
    pub theme: Theme,
}

impl Calendar {
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self::with_month(today)
    }

    /// Create a calendar showing the month containing `date`
    pub fn with_month(date: NaiveDate) -> Self {
        Self {
            month: month_start(date),
            cursor: date,
            selected: None,
            mode: CaptionMode::Days,
            month_cursor: 0,
            year_cursor: 0,
            highlight_from: None,
            highlight_to: None,
            disabled: false,
            theme: Theme::default(),
        }
    }

    /// Receive a new external value; unparseable input retains state
    pub fn set_value(&mut self, value: &str) {
        if let Some(date) = parse_date(value) {
            self.selected = Some(date);
            self.cursor = date;
            self.month = month_start(date);
        }
    }

    /// The committed selection as a canonical string
    pub fn value(&self) -> Option<String> {
        self.selected.map(format_date)
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// First day of the displayed month
    pub fn displayed_month(&self) -> NaiveDate {
        self.month
    }

    fn move_cursor(&mut self, days: i64) {
        self.cursor = self.cursor + Duration::days(days);
        self.month = month_start(self.cursor);
    }

    fn shift_month(&mut self, delta: i32) {
        self.cursor = add_months(self.cursor, delta);
        self.month = month_start(self.cursor);
    }

    /// Jump to a month/year, clamping the cursor day into the target month
    fn jump_to(&mut self, year: i32, month: u32) {
        let day = self.cursor.day();
        self.cursor = NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| {
                NaiveDate::from_ymd_opt(year, month, 1).map(|first| {
                    crate::model::date::month_end(first)
                })
            })
            .unwrap_or(self.cursor);
        self.month = month_start(self.cursor);
    }

    fn handle_days_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-7),
            KeyCode::Down => self.move_cursor(7),
            KeyCode::PageUp | KeyCode::Char('[') => self.shift_month(-1),
            KeyCode::PageDown | KeyCode::Char(']') => self.shift_month(1),
            KeyCode::Char('m') => {
                self.mode = CaptionMode::Months;
                self.month_cursor = self.month.month0() as usize;
            }
            KeyCode::Char('y') => {
                self.mode = CaptionMode::Years { page: 0 };
                self.year_cursor = self.month.year().rem_euclid(YEAR_PAGE_LEN as i32) as usize;
            }
            KeyCode::Enter => {
                self.selected = Some(self.cursor);
                return Some(Action::DateSelected(format_date(self.cursor)));
            }
            _ => {}
        }
        None
    }

    fn handle_months_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.month_cursor = self.month_cursor.saturating_sub(1),
            KeyCode::Right => self.month_cursor = (self.month_cursor + 1).min(11),
            KeyCode::Up => self.month_cursor = self.month_cursor.saturating_sub(3),
            KeyCode::Down => self.month_cursor = (self.month_cursor + 3).min(11),
            KeyCode::Enter => {
                self.jump_to(self.month.year(), self.month_cursor as u32 + 1);
                self.mode = CaptionMode::Days;
            }
            KeyCode::Esc => self.mode = CaptionMode::Days,
            _ => {}
        }
    }

    fn handle_years_key(&mut self, key: KeyEvent, page: i32) {
        match key.code {
            KeyCode::Left => self.year_cursor = self.year_cursor.saturating_sub(1),
            KeyCode::Right => self.year_cursor = (self.year_cursor + 1).min(YEAR_PAGE_LEN - 1),
            KeyCode::Up => self.year_cursor = self.year_cursor.saturating_sub(4),
            KeyCode::Down => self.year_cursor = (self.year_cursor + 4).min(YEAR_PAGE_LEN - 1),
            KeyCode::Char('[') | KeyCode::PageUp => {
                self.mode = CaptionMode::Years { page: page - 1 }
            }
            KeyCode::Char(']') | KeyCode::PageDown => {
                self.mode = CaptionMode::Years { page: page + 1 }
            }
            KeyCode::Enter => {
                let year = year_page_start(self.month.year(), page) + self.year_cursor as i32;
                self.jump_to(year, self.month.month());
                self.mode = CaptionMode::Days;
            }
            KeyCode::Esc => self.mode = CaptionMode::Days,
            _ => {}
        }
    }

    fn day_style(&self, day: NaiveDate, today: NaiveDate) -> Style {
        let outside = day.month() != self.month.month() || day.year() != self.month.year();
        let in_range = match (self.highlight_from, self.highlight_to) {
            (Some(from), Some(to)) => from <= day && day <= to,
            _ => false,
        };

        let mut style = if outside {
            Style::default().fg(self.theme.muted)
        } else {
            Style::default().fg(self.theme.text)
        };
        if in_range {
            style = style.bg(self.theme.surface);
        }
        if day == today {
            style = style.fg(self.theme.primary).add_modifier(Modifier::BOLD);
        }
        if Some(day) == self.selected {
            style = Style::default()
                .bg(self.theme.primary)
                .fg(self.theme.on_primary)
                .add_modifier(Modifier::BOLD);
        }
        if day == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    fn draw_days(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::with_capacity(8);
        lines.push(Line::from(vec![
            Span::styled("◂ ", Style::default().fg(self.theme.muted)),
            Span::styled(
                self.month.format("%B %Y").to_string(),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▸", Style::default().fg(self.theme.muted)),
        ]));
        lines.push(Line::from(Span::styled(
            " Mo  Tu  We  Th  Fr  Sa  Su",
            Style::default().fg(self.theme.muted),
        )));

        let today = Local::now().date_naive();
        for week in month_grid(self.month) {
            let mut spans = Vec::with_capacity(7);
            for day in week {
                spans.push(Span::styled(
                    format!(" {:>2} ", day.day()),
                    self.day_style(day, today),
                ));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn draw_months(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            format!("Month of {}", self.month.year()),
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD),
        ))];
        for row in 0..4 {
            let mut spans = Vec::with_capacity(3);
            for col in 0..3 {
                let index = row * 3 + col;
                let mut style = if index == self.month.month0() as usize {
                    Style::default()
                        .bg(self.theme.primary)
                        .fg(self.theme.on_primary)
                } else {
                    Style::default().fg(self.theme.text)
                };
                if index == self.month_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(format!(" {} ", MONTH_NAMES[index]), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn draw_years(&self, frame: &mut Frame, area: Rect, page: i32) {
        let start = year_page_start(self.month.year(), page);
        let mut lines = vec![Line::from(vec![
            Span::styled("◂ ", Style::default().fg(self.theme.muted)),
            Span::styled(
                format!("{} - {}", start, start + YEAR_PAGE_LEN as i32 - 1),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▸", Style::default().fg(self.theme.muted)),
        ])];
        for row in 0..5 {
            let mut spans = Vec::with_capacity(4);
            for col in 0..4 {
                let index = row * 4 + col;
                let year = start + index as i32;
                let mut style = if year == self.month.year() {
                    Style::default()
                        .bg(self.theme.primary)
                        .fg(self.theme.on_primary)
                } else {
                    Style::default().fg(self.theme.text)
                };
                if index == self.year_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(format!(" {} ", year), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Calendar {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.disabled {
            return Ok(None);
        }
        match self.mode {
            CaptionMode::Days => Ok(self.handle_days_key(key)),
            CaptionMode::Months => {
                self.handle_months_key(key);
                Ok(None)
            }
            CaptionMode::Years { page } => {
                self.handle_years_key(key, page);
                Ok(None)
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            CaptionMode::Days => self.draw_days(frame, area),
            CaptionMode::Months => self.draw_months(frame, area),
            CaptionMode::Years { page } => self.draw_years(frame, area, page),
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

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cursor_crossing_month_edge_scrolls_month() {
        let mut cal = Calendar::with_month(date(2026, 3, 1));
        cal.handle_key_event(key(KeyCode::Left)).unwrap();
        assert_eq!(cal.displayed_month(), date(2026, 2, 1));
        cal.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(cal.displayed_month(), date(2026, 3, 1));
    }

    #[test]
    fn test_enter_emits_canonical_date() {
        let mut cal = Calendar::with_month(date(2026, 3, 7));
        let action = cal.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::DateSelected("07.03.2026".to_string())));
        assert_eq!(cal.value(), Some("07.03.2026".to_string()));
    }

    #[test]
    fn test_set_value_parse_or_retain() {
        let mut cal = Calendar::with_month(date(2026, 3, 7));
        cal.set_value("15.08.2025");
        assert_eq!(cal.selected(), Some(date(2025, 8, 15)));
        assert_eq!(cal.displayed_month(), date(2025, 8, 1));
        cal.set_value("99.99.9999");
        assert_eq!(cal.selected(), Some(date(2025, 8, 15)));
    }

    #[test]
    fn test_month_quick_select_jumps_within_year() {
        let mut cal = Calendar::with_month(date(2026, 3, 31));
        cal.handle_key_event(key(KeyCode::Char('m'))).unwrap();
        // March -> April via one step right; day clamps from 31 to 30
        cal.handle_key_event(key(KeyCode::Right)).unwrap();
        cal.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(cal.displayed_month(), date(2026, 4, 1));
    }

    #[test]
    fn test_year_quick_select_pages_by_twenty() {
        let mut cal = Calendar::with_month(date(2026, 3, 7));
        cal.handle_key_event(key(KeyCode::Char('y'))).unwrap();
        cal.handle_key_event(key(KeyCode::Char(']'))).unwrap();
        // cursor stays on the same offset within the page (2026 -> 2046)
        cal.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(cal.displayed_month(), date(2046, 3, 1));
    }

    #[test]
    fn test_month_navigation_is_symmetric() {
        let mut cal = Calendar::with_month(date(2026, 1, 15));
        cal.handle_key_event(key(KeyCode::PageDown)).unwrap();
        cal.handle_key_event(key(KeyCode::PageUp)).unwrap();
        assert_eq!(cal.displayed_month(), date(2026, 1, 1));
    }

    #[test]
    fn test_disabled_calendar_ignores_keys() {
        let mut cal = Calendar::with_month(date(2026, 3, 7));
        cal.disabled = true;
        assert_eq!(cal.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
        assert_eq!(cal.selected(), None);
    }
}
