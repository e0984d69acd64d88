//! trellis-tui - A terminal UI component kit
//!
//! A catalogue of variant-styled building blocks for ratatui applications:
//! buttons, badges, text inputs, selects, calendars, time pickers, dialogs,
//! tabs, and form fields. Every component follows the same contract:
//!
//! 1. The owner sets value/disabled/error/variant fields on the struct
//! 2. `handle_key_event` converts key presses into semantic Actions
//! 3. `draw` renders the component into the given area
//!
//! Components never call back into their owner directly; the returned
//! [`action::Action`] is the only output channel.

pub mod action;
pub mod component;
pub mod components;
pub mod model;
pub mod theme;
pub mod tui;

pub use action::Action;
pub use component::Component;
