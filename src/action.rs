//! Action enum - the output channel of every component
//!
//! Components emit Actions in response to key events instead of mutating
//! anything outside themselves. The owning application receives the Action
//! from `handle_key_event` and decides what to do with it - this is the
//! library's equivalent of an `onChange` callback.

use std::fmt;

/// All actions a component or the gallery application can emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Gallery Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch to the next gallery page
    NextPage,
    /// Switch to the previous gallery page
    PrevPage,
    /// Move focus to the next control on the page
    FocusNext,
    /// Move focus to the previous control on the page
    FocusPrev,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch between the built-in themes
    ToggleTheme,
    /// Open the quit confirmation dialog
    OpenQuitDialog,
    /// Open the demo confirmation dialog
    OpenConfirmDemo,
    /// Close the current modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Component Emissions
    // ─────────────────────────────────────────────────────────────────────────
    /// A button was activated; carries the button label
    Pressed(String),
    /// A text input changed; carries the full new value
    InputChanged(String),
    /// A select committed an option; carries the option value
    OptionPicked(String),
    /// A time picker field changed; carries the recombined "HH:mm" string
    /// (either field may be empty when it has never been set)
    TimeChanged(String),
    /// A calendar committed a day; carries the formatted date string
    DateSelected(String),
    /// A tab bar moved to a new tab; carries the new index
    TabChanged(usize),
    /// A dialog's confirm button was activated
    DialogConfirmed,
    /// A dialog was dismissed (cancel button or Esc)
    DialogDismissed,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::ToggleTheme => write!(f, "ToggleTheme"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenConfirmDemo => write!(f, "OpenConfirmDemo"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::Pressed(label) => write!(f, "Pressed({})", label),
            Action::InputChanged(value) => write!(f, "InputChanged({})", value),
            Action::OptionPicked(value) => write!(f, "OptionPicked({})", value),
            Action::TimeChanged(time) => write!(f, "TimeChanged({})", time),
            Action::DateSelected(date) => write!(f, "DateSelected({})", date),
            Action::TabChanged(index) => write!(f, "TabChanged({})", index),
            Action::DialogConfirmed => write!(f, "DialogConfirmed"),
            Action::DialogDismissed => write!(f, "DialogDismissed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_payload() {
        assert_eq!(
            Action::TimeChanged("09:30".into()).to_string(),
            "TimeChanged(09:30)"
        );
        assert_eq!(Action::TabChanged(2).to_string(), "TabChanged(2)");
        assert_eq!(Action::ForceQuit.to_string(), "ForceQuit");
    }
}
