//! Gallery application - every component mounted end-to-end
//!
//! The App owns one instance of each catalogue component, routes key
//! events to whatever has focus, applies the Actions that come back, and
//! shows the most recent emission in a status line. It is the reference
//! consumer of the library's prop-in/action-out contract.

use crate::config::Config;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use trellis_tui::{
    action::Action,
    component::Component,
    components::{Badge, Button, Calendar, Dialog, FormField, Select, TabBar, TextInput, TimePicker},
    model::SelectOption,
    theme::{BadgeKind, BadgeTone, ButtonSize, ButtonVariant, InputVariant, TabsKind, Theme},
};

// ═══════════════════════════════════════════════════════════════════════════════
// Pages and Modals
// ═══════════════════════════════════════════════════════════════════════════════

/// Gallery page, one per component family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Buttons,
    Badges,
    Inputs,
    Select,
    Calendar,
    Time,
    Dialogs,
}

impl Page {
    pub fn all() -> Vec<Page> {
        vec![
            Page::Buttons,
            Page::Badges,
            Page::Inputs,
            Page::Select,
            Page::Calendar,
            Page::Time,
            Page::Dialogs,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            Page::Buttons => "Buttons",
            Page::Badges => "Badges",
            Page::Inputs => "Inputs",
            Page::Select => "Select",
            Page::Calendar => "Calendar",
            Page::Time => "Time",
            Page::Dialogs => "Dialogs",
        }
    }
}

/// Modal overlays the gallery can stack on top of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modal {
    QuitConfirm,
    DemoConfirm,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates the component catalogue
pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,
    theme: Theme,
    config: Config,

    /// Page switcher, itself a library TabBar
    pages: TabBar,
    /// Modal overlay stack; only the top receives input
    modals: Vec<Modal>,
    /// Most recent Action, shown in the status line
    last_action: Option<Action>,
    status_note: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Page Components
    // ─────────────────────────────────────────────────────────────────────────
    buttons: Vec<Button>,
    button_focus: usize,

    badges: Vec<Badge>,

    name_field: FormField,
    name_input: TextInput,
    password_field: FormField,
    password_input: TextInput,
    input_focus: usize,

    select: Select,
    select_disabled: Select,

    calendar: Calendar,
    date_value: Option<String>,

    time_picker: TimePicker,
    time_value: String,

    tabs_demo: TabBar,

    quit_dialog: Dialog,
    demo_dialog: Dialog,
}

impl App {
    pub fn new(config: Config) -> App {
        let theme = Theme::named(&config.theme).unwrap_or_default();

        let pages = TabBar::new(Page::all().iter().map(|p| p.name().to_string()).collect())
            .kind(TabsKind::Line);

        let buttons = vec![
            Button::new("Save"),
            Button::new("Delete").variant(ButtonVariant::Destructive),
            Button::new("Cancel").variant(ButtonVariant::Secondary),
            Button::new("More").variant(ButtonVariant::Tertiary).size(ButtonSize::Sm),
            Button::new("Skip").variant(ButtonVariant::Ghost).size(ButtonSize::Xs),
        ];

        let badges = vec![
            Badge::new("new"),
            Badge::new("beta").tone(BadgeTone::Blue),
            Badge::new("live").tone(BadgeTone::Green).kind(BadgeKind::Indicator),
            Badge::new("slow").tone(BadgeTone::Orange).kind(BadgeKind::Indicator),
            Badge::new("error").tone(BadgeTone::Red).outlined(),
            Badge::new("draft").kind(BadgeKind::Status),
        ];

        let select_options: Vec<SelectOption> = (1..=120)
            .map(|i| SelectOption::new(format!("Option {:03}", i), format!("{:03}", i)))
            .collect();
        let select = Select::new(select_options.clone()).placeholder("Pick an option");
        let mut select_disabled = Select::new(select_options).placeholder("Disabled");
        select_disabled.disabled = true;

        let tabs_demo = TabBar::new(vec![
            "Overview".to_string(),
            "Activity".to_string(),
            "Settings".to_string(),
        ])
        .kind(TabsKind::Segmented);

        let mut calendar = Calendar::new();
        // highlight the current week as a range demo
        let today = chrono::Local::now().date_naive();
        calendar.highlight_from = Some(today - chrono::Duration::days(3));
        calendar.highlight_to = Some(today + chrono::Duration::days(3));

        let mut app = App {
            should_quit: false,
            theme,
            config,
            pages,
            modals: Vec::new(),
            last_action: None,
            status_note: None,
            buttons,
            button_focus: 0,
            badges,
            name_field: FormField::new("Name").required(),
            name_input: TextInput::new().placeholder("Jane Doe"),
            password_field: FormField::new("Password").required(),
            password_input: TextInput::new().placeholder("secret").masked(),
            input_focus: 0,
            select,
            select_disabled,
            calendar,
            date_value: None,
            time_picker: TimePicker::with_value(Some("12:00")),
            time_value: "12:00".to_string(),
            tabs_demo,
            quit_dialog: Dialog::new("Quit?", "Are you sure you want to quit?")
                .confirm_label("Yes, quit")
                .dismiss_label("No, stay")
                .destructive(),
            demo_dialog: Dialog::new("Delete item?", "This cannot be undone.")
                .confirm_label("Delete")
                .dismiss_label("Keep")
                .destructive(),
        };
        app.apply_theme();
        app
    }

    fn apply_theme(&mut self) {
        let theme = self.theme;
        self.pages.theme = theme;
        for button in &mut self.buttons {
            button.theme = theme;
        }
        for badge in &mut self.badges {
            badge.theme = theme;
        }
        self.name_field.theme = theme;
        self.name_input.theme = theme;
        self.password_field.theme = theme;
        self.password_input.theme = theme;
        self.select.theme = theme;
        self.select_disabled.theme = theme;
        self.calendar.theme = theme;
        self.time_picker.theme = theme;
        self.tabs_demo.theme = theme;
        self.quit_dialog.theme = theme;
        self.demo_dialog.theme = theme;
    }

    pub fn current_page(&self) -> Page {
        Page::all()[self.pages.selected()]
    }

    fn page_count(&self) -> usize {
        self.pages.titles().len()
    }

    /// Whether a component on the current page is consuming every key
    fn page_is_capturing(&self) -> bool {
        match self.current_page() {
            Page::Select => self.select.is_open(),
            Page::Time => self.time_picker.is_open(),
            _ => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key Routing
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_page_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.current_page() {
            Page::Buttons => {
                match key.code {
                    KeyCode::Left => {
                        self.button_focus = self.button_focus.saturating_sub(1);
                        Ok(None)
                    }
                    KeyCode::Right => {
                        self.button_focus =
                            (self.button_focus + 1).min(self.buttons.len() - 1);
                        Ok(None)
                    }
                    _ => self.buttons[self.button_focus].handle_key_event(key),
                }
            }
            Page::Badges => self.tabs_demo.handle_key_event(key),
            Page::Inputs => match key.code {
                KeyCode::Up => {
                    self.input_focus = 0;
                    Ok(None)
                }
                KeyCode::Down => {
                    self.input_focus = 1;
                    Ok(None)
                }
                _ => {
                    if self.input_focus == 0 {
                        self.name_input.handle_key_event(key)
                    } else {
                        self.password_input.handle_key_event(key)
                    }
                }
            },
            Page::Select => self.select.handle_key_event(key),
            Page::Calendar => self.calendar.handle_key_event(key),
            Page::Time => match key.code {
                // external-value pushes, demonstrating the controlled contract
                KeyCode::Char('p') if !self.time_picker.is_open() => {
                    self.time_picker.set_value(Some("08:45"));
                    self.status_note = Some("pushed external value 08:45".to_string());
                    Ok(None)
                }
                KeyCode::Char('i') if !self.time_picker.is_open() => {
                    self.time_picker.set_value(Some("24:99"));
                    self.status_note =
                        Some("pushed invalid value 24:99 (ignored)".to_string());
                    Ok(None)
                }
                KeyCode::Char('e') if !self.time_picker.is_open() => {
                    self.time_picker.error = !self.time_picker.error;
                    Ok(None)
                }
                KeyCode::Char('d') if !self.time_picker.is_open() => {
                    self.time_picker.disabled = !self.time_picker.disabled;
                    Ok(None)
                }
                _ => self.time_picker.handle_key_event(key),
            },
            Page::Dialogs => match key.code {
                KeyCode::Char('o') | KeyCode::Enter => Ok(Some(Action::OpenConfirmDemo)),
                _ => Ok(None),
            },
        }
    }

    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::DemoConfirm => self.demo_dialog.handle_key_event(key),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Drawing
    // ─────────────────────────────────────────────────────────────────────────

    fn draw_buttons_page(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let mut constraints: Vec<Constraint> = Vec::new();
        for button in &self.buttons {
            constraints.push(Constraint::Length(button.width() + 2));
        }
        constraints.push(Constraint::Min(0));

        // bordered sizes on the first row, chip sizes on the second
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints.clone())
            .split(rows[0]);
        let chips = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rows[1]);

        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.focused = i == self.button_focus;
            let target = if button.height() == 3 { top[i] } else { chips[i] };
            button.draw(frame, target)?;
        }
        Ok(())
    }

    fn draw_badges_page(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let mut constraints: Vec<Constraint> = self
            .badges
            .iter()
            .map(|b| Constraint::Length(b.width() + 2))
            .collect();
        constraints.push(Constraint::Min(0));
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rows[0]);
        for (i, badge) in self.badges.iter_mut().enumerate() {
            badge.draw(frame, cells[i])?;
        }

        // a segmented tab bar lives here too, to show the remaining kinds
        self.tabs_demo.draw(frame, rows[2])?;
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "←/→ moves the segmented tabs",
                Style::default().fg(self.theme.muted),
            ))),
            rows[3],
        );
        Ok(())
    }

    fn draw_inputs_page(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.name_field.height(3)),
                Constraint::Length(self.password_field.height(3)),
                Constraint::Min(0),
            ])
            .split(area);

        let width = 40.min(area.width);
        self.name_input.focused = self.input_focus == 0;
        self.password_input.focused = self.input_focus == 1;

        let name_area = self.name_field.draw_frame(frame, Rect { width, ..rows[0] });
        self.name_input.draw(frame, name_area)?;
        let password_area = self
            .password_field
            .draw_frame(frame, Rect { width, ..rows[1] });
        self.password_input.draw(frame, password_area)?;
        Ok(())
    }

    fn draw_select_page(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Length(2), Constraint::Length(24), Constraint::Min(0)])
            .split(area);
        self.select.focused = true;
        self.select.draw(frame, columns[0])?;
        self.select_disabled.draw(frame, columns[2])?;
        Ok(())
    }

    fn draw_time_page(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(13), Constraint::Length(1)])
            .split(area);
        self.time_picker.focused = true;
        self.time_picker.draw(frame, rows[0])?;
        let value_line = Line::from(vec![
            Span::styled("value: ", Style::default().fg(self.theme.muted)),
            Span::styled(
                format!("\"{}\"", self.time_value),
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(value_line), rows[1]);
        Ok(())
    }

    fn draw_calendar_page(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(9), Constraint::Length(1)])
            .split(area);
        self.calendar.draw(frame, rows[0])?;
        let value = self
            .date_value
            .clone()
            .unwrap_or_else(|| "(none)".to_string());
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("selected: ", Style::default().fg(self.theme.muted)),
                Span::styled(value, Style::default().fg(self.theme.primary)),
            ])),
            rows[1],
        );
        Ok(())
    }

    fn draw_dialogs_page(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let text = vec![
            Line::from("Dialogs overlay the page and trap input until resolved."),
            Line::from(""),
            Line::from(Span::styled(
                "Press o (or Enter) to open a destructive confirmation",
                Style::default().fg(self.theme.muted),
            )),
        ];
        frame.render_widget(Paragraph::new(text), area);
        Ok(())
    }

    fn draw_status_line(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            " last action: ",
            Style::default().fg(self.theme.muted),
        )];
        match &self.last_action {
            Some(action) => spans.push(Span::styled(
                action.to_string(),
                Style::default().fg(self.theme.text),
            )),
            None => spans.push(Span::styled("-", Style::default().fg(self.theme.muted))),
        }
        if let Some(note) = &self.status_note {
            spans.push(Span::styled(
                format!("  ({})", note),
                Style::default().fg(self.theme.muted),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn help_spans(&self) -> Vec<Span<'_>> {
        let key_style = Style::default()
            .fg(self.theme.primary)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::styled(" Tab ", key_style),
            Span::raw("Next page  "),
        ];
        let page_help: &[(&str, &str)] = match self.current_page() {
            Page::Buttons => &[(" ←/→ ", "Focus  "), (" Enter ", "Press  ")],
            Page::Badges => &[(" ←/→ ", "Move tabs  ")],
            Page::Inputs => &[
                (" ↑/↓ ", "Switch field  "),
                (" Ctrl+r ", "Reveal password  "),
            ],
            Page::Select => &[(" Enter ", "Open/commit  "), (" ↑/↓ ", "Highlight  ")],
            Page::Calendar => &[
                (" Enter ", "Select  "),
                (" m/y ", "Month/year  "),
                (" [/] ", "Page  "),
            ],
            Page::Time => &[
                (" ←/→ ", "Column  "),
                (" Enter ", "Open/commit  "),
                (" p/i ", "Push value  "),
                (" e/d ", "Error/disable  "),
            ],
            Page::Dialogs => &[(" o ", "Open dialog  ")],
        };
        for (k, label) in page_help {
            spans.push(Span::styled(*k, key_style));
            spans.push(Span::raw(*label));
        }
        spans.push(Span::styled(" t ", key_style));
        spans.push(Span::raw("Theme  "));
        spans.push(Span::styled(" q ", key_style));
        spans.push(Span::raw("Quit"));
        spans
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Impl
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // modals trap all input
        if let Some(modal) = self.modals.last().copied() {
            return self.handle_modal_key_event(modal, key);
        }

        // global keys, unless a dropdown is consuming everything
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }
        if !self.page_is_capturing() {
            match key.code {
                KeyCode::Tab => return Ok(Some(Action::NextPage)),
                KeyCode::BackTab => return Ok(Some(Action::PrevPage)),
                KeyCode::Char('q') if self.current_page() != Page::Inputs => {
                    return Ok(Some(Action::OpenQuitDialog));
                }
                KeyCode::Char('t') if self.current_page() != Page::Inputs => {
                    return Ok(Some(Action::ToggleTheme));
                }
                _ => {}
            }
        }

        self.handle_page_key_event(key)
    }

    fn handle_mouse_event(&mut self, _mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area);

        self.pages.draw(frame, chunks[0])?;

        let canvas = Rect {
            x: chunks[1].x + 2,
            y: chunks[1].y + 1,
            width: chunks[1].width.saturating_sub(4),
            height: chunks[1].height.saturating_sub(2),
        };
        match self.current_page() {
            Page::Buttons => self.draw_buttons_page(frame, canvas)?,
            Page::Badges => self.draw_badges_page(frame, canvas)?,
            Page::Inputs => self.draw_inputs_page(frame, canvas)?,
            Page::Select => self.draw_select_page(frame, canvas)?,
            Page::Calendar => self.draw_calendar_page(frame, canvas)?,
            Page::Time => self.draw_time_page(frame, canvas)?,
            Page::Dialogs => self.draw_dialogs_page(frame, canvas)?,
        }

        self.draw_status_line(frame, chunks[2]);

        let help = Paragraph::new(Line::from(self.help_spans()))
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);

        // modals render last, on top of everything
        for modal in self.modals.clone() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::DemoConfirm => self.demo_dialog.draw(frame, area)?,
            }
        }
        Ok(())
    }
}

impl App {
    /// Process an action, optionally producing a follow-up action
    pub fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            self.last_action = Some(action.clone());
        }
        match action {
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                // persist preferences before the terminal goes away
                let _ = self.config.save();
                self.should_quit = true;
            }

            Action::ToggleTheme => {
                self.config.theme = if self.config.theme == "dark" {
                    "light".to_string()
                } else {
                    "dark".to_string()
                };
                self.theme = Theme::named(&self.config.theme).unwrap_or_default();
                self.apply_theme();
            }

            Action::NextPage => {
                let next = (self.pages.selected() + 1) % self.page_count();
                self.pages.select(next);
                self.status_note = None;
            }
            Action::PrevPage => {
                let count = self.page_count();
                let prev = (self.pages.selected() + count - 1) % count;
                self.pages.select(prev);
                self.status_note = None;
            }
            Action::FocusNext | Action::FocusPrev => {}

            Action::OpenQuitDialog => {
                self.quit_dialog.reset();
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenConfirmDemo => {
                self.demo_dialog.reset();
                self.modals.push(Modal::DemoConfirm);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::DialogConfirmed => {
                let top = self.modals.pop();
                match top {
                    Some(Modal::QuitConfirm) => return Ok(Some(Action::ForceQuit)),
                    Some(Modal::DemoConfirm) => {
                        self.status_note = Some("item deleted".to_string());
                    }
                    None => {}
                }
            }
            Action::DialogDismissed => {
                self.modals.pop();
            }

            Action::TimeChanged(time) => {
                self.time_value = time;
                self.status_note = None;
            }
            Action::DateSelected(date) => {
                self.date_value = Some(date);
            }
            Action::InputChanged(value) => {
                // live validation demo on the name field
                if self.input_focus == 0 {
                    if value.trim().is_empty() {
                        self.name_field.error = Some("Name is required".to_string());
                        self.name_input.variant = InputVariant::Failure;
                    } else {
                        self.name_field.error = None;
                        self.name_input.variant = InputVariant::Default;
                    }
                }
            }
            Action::OptionPicked(_) | Action::Pressed(_) | Action::TabChanged(_) => {}
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn test_tab_cycles_pages() {
        let mut app = app();
        assert_eq!(app.current_page(), Page::Buttons);
        for _ in 0..Page::all().len() {
            let action = app.handle_key_event(key(KeyCode::Tab)).unwrap().unwrap();
            app.update(action).unwrap();
        }
        assert_eq!(app.current_page(), Page::Buttons);
    }

    #[test]
    fn test_quit_flow_requires_confirmation() {
        let mut app = app();
        let action = app.handle_key_event(key(KeyCode::Char('q'))).unwrap().unwrap();
        app.update(action).unwrap();
        assert!(!app.should_quit);
        // dialog highlights the safe button; 'y' confirms directly
        let action = app.handle_key_event(key(KeyCode::Char('y'))).unwrap().unwrap();
        let follow_up = app.update(action).unwrap().unwrap();
        app.update(follow_up).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_time_emission_reaches_status() {
        let mut app = app();
        app.update(Action::TimeChanged("14:00".to_string())).unwrap();
        assert_eq!(app.time_value, "14:00");
        assert_eq!(
            app.last_action,
            Some(Action::TimeChanged("14:00".to_string()))
        );
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        let mut app = app();
        app.update(Action::ToggleTheme).unwrap();
        assert_eq!(app.config.theme, "light");
        app.update(Action::ToggleTheme).unwrap();
        assert_eq!(app.config.theme, "dark");
    }

    #[test]
    fn test_name_validation_follows_input() {
        let mut app = app();
        app.update(Action::InputChanged("".to_string())).unwrap();
        assert!(app.name_field.error.is_some());
        app.update(Action::InputChanged("Jane".to_string())).unwrap();
        assert!(app.name_field.error.is_none());
    }
}
