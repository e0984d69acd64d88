//! UI Components
//!
//! Each component encapsulates its own state, event handling, and
//! rendering logic, and communicates with its owner exclusively through
//! Actions returned from the event handlers.

pub mod badge;
pub mod button;
pub mod calendar;
pub mod dialog;
pub mod form;
pub mod input;
pub mod layout;
pub mod select;
pub mod tabs;
pub mod time_picker;

pub use badge::Badge;
pub use button::Button;
pub use calendar::Calendar;
pub use dialog::{Dialog, DialogChoice};
pub use form::FormField;
pub use input::TextInput;
pub use layout::centered_popup;
pub use select::Select;
pub use tabs::TabBar;
pub use time_picker::TimePicker;
