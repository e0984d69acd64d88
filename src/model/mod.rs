//! Value types shared by the components
//!
//! Pure data and pure functions only - nothing in this module touches the
//! terminal or emits Actions. Components derive their display state from
//! these types and recombine them on emission.

pub mod date;
pub mod option;
pub mod time;

pub use date::{format_date, month_grid, parse_date, DATE_FORMAT};
pub use option::SelectOption;
pub use time::{hour_options, minute_options, parse_time, TimeValue};
