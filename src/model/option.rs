//! Option entity for selection inputs

/// A single selectable entry: what the user sees and what the owner gets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectOption {
    /// Rendered label
    pub label: String,
    /// Value emitted when the option is committed
    pub value: String,
}

impl SelectOption {
    /// Create an option with distinct label and value
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create an option whose label and value are the same string
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_mirrors_label() {
        let opt = SelectOption::from_value("05");
        assert_eq!(opt.label, "05");
        assert_eq!(opt.value, "05");
    }
}
