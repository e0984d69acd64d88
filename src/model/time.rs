//! Canonical time value parsing and recombination
//!
//! The interchange format between a time picker and its owner is the
//! string `HH:mm`: zero-padded 24-hour hour, zero-padded minute. Parsing
//! is the only place normalization happens - a 1-digit hour is padded on
//! the way in, never written back out unless the user interacts.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::option::SelectOption;

/// Matches a 24-hour time with an optionally unpadded hour.
/// The minute must always be two digits.
static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-1]?[0-9]|2[0-3]):([0-5][0-9])$").unwrap());

/// A two-field time value
///
/// Each field is either empty (never set) or exactly two digits. The
/// fields are independent: a user can pick a minute before ever picking
/// an hour, and the recombined string carries the empty field as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeValue {
    /// "00".."23", or empty when unset
    pub hour: String,
    /// "00".."59", or empty when unset
    pub minute: String,
}

impl TimeValue {
    /// A value with both fields unset
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether both fields are set
    pub fn is_complete(&self) -> bool {
        !self.hour.is_empty() && !self.minute.is_empty()
    }

    /// Recombine the fields into the canonical string
    ///
    /// Unset fields stay empty, so a partial value composes to e.g.
    /// `"05:"` or `":15"`.
    pub fn compose(&self) -> String {
        format!("{}:{}", self.hour, self.minute)
    }
}

/// Parse a canonical time string into a zero-padded [`TimeValue`]
///
/// Surrounding whitespace is tolerated. Anything that does not match the
/// canonical pattern (out-of-range hour, 1-digit minute, garbage) yields
/// `None`; the caller keeps whatever state it already had.
pub fn parse_time(input: &str) -> Option<TimeValue> {
    let caps = TIME_REGEX.captures(input.trim())?;
    Some(TimeValue {
        hour: format!("{:0>2}", &caps[1]),
        minute: caps[2].to_string(),
    })
}

/// The 24 hour options, "00" through "23"
pub fn hour_options() -> Vec<SelectOption> {
    (0..24).map(|h| SelectOption::from_value(format!("{:02}", h))).collect()
}

/// The 60 minute options, "00" through "59"
pub fn minute_options() -> Vec<SelectOption> {
    (0..60).map(|m| SelectOption::from_value(format!("{:02}", m))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_canonical_strings() {
        for input in ["05:03", "23:59", "00:00", "12:30"] {
            let time = parse_time(input).unwrap();
            assert_eq!(time.compose(), input);
        }
    }

    #[test]
    fn test_parse_pads_one_digit_hour() {
        let time = parse_time("5:30").unwrap();
        assert_eq!(time.hour, "05");
        assert_eq!(time.minute, "30");
        assert_eq!(time.compose(), "05:30");
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(parse_time(" 12:00 ").unwrap().compose(), "12:00");
        assert_eq!(parse_time("\t9:45\n").unwrap().compose(), "09:45");
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        for input in ["24:00", "aa:bb", "", "5:3", "12:60", "12", ":30", "12:"] {
            assert!(parse_time(input).is_none(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_compose_carries_empty_fields() {
        let mut time = TimeValue::empty();
        assert_eq!(time.compose(), ":");
        time.hour = "05".to_string();
        assert_eq!(time.compose(), "05:");
        time.hour.clear();
        time.minute = "15".to_string();
        assert_eq!(time.compose(), ":15");
    }

    #[test]
    fn test_hour_options_cover_the_day() {
        let options = hour_options();
        assert_eq!(options.len(), 24);
        assert_eq!(options.first().unwrap().value, "00");
        assert_eq!(options.last().unwrap().value, "23");
        assert!(options.windows(2).all(|w| w[0].value < w[1].value));
    }

    #[test]
    fn test_minute_options_cover_the_hour() {
        let options = minute_options();
        assert_eq!(options.len(), 60);
        assert_eq!(options.first().unwrap().value, "00");
        assert_eq!(options.last().unwrap().value, "59");
        assert!(options.windows(2).all(|w| w[0].value < w[1].value));
        assert!(options.iter().all(|o| o.value.len() == 2));
    }

    #[test]
    fn test_is_complete() {
        assert!(!TimeValue::empty().is_complete());
        assert!(parse_time("08:45").unwrap().is_complete());
    }
}
