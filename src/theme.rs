//! Styling variants and the color theme
//!
//! Every component takes its colors from a [`Theme`] and its look from a
//! small variant enum. Variants are presentation only: swapping one never
//! changes what a component parses or emits.

use ratatui::style::{Color, Modifier, Style};

/// Color theme shared by all components
///
/// Two built-in themes are provided; the gallery config selects one by
/// name. Fields are deliberately few - components derive pressed/focused
/// looks with modifiers rather than extra colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Regular foreground text
    pub text: Color,
    /// De-emphasized text (placeholders, outside days, help hints)
    pub muted: Color,
    /// Default border color
    pub border: Color,
    /// Filled background for secondary/segmented surfaces
    pub surface: Color,
    /// Primary accent (selected values, default buttons)
    pub primary: Color,
    /// Text drawn on top of the primary accent
    pub on_primary: Color,
    /// Destructive accent (error borders, destructive buttons)
    pub destructive: Color,
}

impl Theme {
    /// Theme for dark terminals
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            surface: Color::Indexed(236),
            primary: Color::Blue,
            on_primary: Color::White,
            destructive: Color::Red,
        }
    }

    /// Theme for light terminals
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            muted: Color::Gray,
            border: Color::Gray,
            surface: Color::Indexed(253),
            primary: Color::Blue,
            on_primary: Color::White,
            destructive: Color::Red,
        }
    }

    /// Look up a built-in theme by name
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Button Variants
// ═══════════════════════════════════════════════════════════════════════════════

/// Visual appearance of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Primary filled button
    #[default]
    Default,
    /// Filled with the destructive accent
    Destructive,
    /// Filled with the surface color
    Secondary,
    /// Plain text on the surface color, no emphasis
    Tertiary,
    /// Text only, de-emphasized until focused
    Ghost,
}

impl ButtonVariant {
    /// Style for the button body
    pub fn style(&self, theme: &Theme) -> Style {
        match self {
            ButtonVariant::Default => Style::default()
                .bg(theme.primary)
                .fg(theme.on_primary)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Destructive => Style::default()
                .bg(theme.destructive)
                .fg(theme.on_primary)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Secondary => Style::default().bg(theme.surface).fg(theme.text),
            ButtonVariant::Tertiary => Style::default().bg(theme.surface).fg(theme.muted),
            ButtonVariant::Ghost => Style::default().fg(theme.muted),
        }
    }
}

/// Size of a button
///
/// Large and default sizes render as bordered blocks; the small sizes
/// render as single-line chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// Bordered, extra horizontal padding
    Lg,
    /// Bordered
    #[default]
    Default,
    /// Single line
    Sm,
    /// Single line, minimal padding
    Xs,
}

impl ButtonSize {
    /// Whether this size draws a border around the label
    pub fn bordered(&self) -> bool {
        matches!(self, ButtonSize::Lg | ButtonSize::Default)
    }

    /// Horizontal padding inside the button, in cells
    pub fn padding(&self) -> u16 {
        match self {
            ButtonSize::Lg => 4,
            ButtonSize::Default => 3,
            ButtonSize::Sm => 2,
            ButtonSize::Xs => 1,
        }
    }

    /// Rows the button occupies
    pub fn height(&self) -> u16 {
        if self.bordered() {
            3
        } else {
            1
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Badge Variants
// ═══════════════════════════════════════════════════════════════════════════════

/// Role of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeKind {
    /// Filled label
    #[default]
    Default,
    /// Bracketed label in plain text, for statuses
    Status,
    /// Filled label with a leading dot
    Indicator,
}

/// Color scheme of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    /// Neutral, highest contrast
    #[default]
    Default,
    Gray,
    Blue,
    Cyan,
    Green,
    Lime,
    Orange,
    Red,
    Purple,
    Indigo,
}

impl BadgeTone {
    /// Accent color of the tone
    pub fn color(&self, theme: &Theme) -> Color {
        match self {
            BadgeTone::Default => theme.text,
            BadgeTone::Gray => Color::DarkGray,
            BadgeTone::Blue => Color::Blue,
            BadgeTone::Cyan => Color::Cyan,
            BadgeTone::Green => Color::Green,
            BadgeTone::Lime => Color::LightGreen,
            BadgeTone::Orange => Color::Indexed(208),
            BadgeTone::Red => Color::Red,
            BadgeTone::Purple => Color::Magenta,
            BadgeTone::Indigo => Color::Indexed(63),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tabs and Input Variants
// ═══════════════════════════════════════════════════════════════════════════════

/// Visual style of a tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabsKind {
    /// Selected tab is emphasized with the primary accent
    #[default]
    Default,
    /// Tabs sit on a filled strip; the selected tab is raised
    Segmented,
    /// Selected tab is underlined
    Line,
}

/// Visual state of a text input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    #[default]
    Default,
    /// Failed validation: destructive border and placeholder
    Failure,
}

impl InputVariant {
    /// Border style for the input frame
    pub fn border_style(&self, theme: &Theme) -> Style {
        match self {
            InputVariant::Default => Style::default().fg(theme.border),
            InputVariant::Failure => Style::default().fg(theme.destructive),
        }
    }

    /// Style for placeholder text
    pub fn placeholder_style(&self, theme: &Theme) -> Style {
        match self {
            InputVariant::Default => Style::default().fg(theme.muted),
            InputVariant::Failure => Style::default().fg(theme.destructive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_themes() {
        assert_eq!(Theme::named("dark"), Some(Theme::dark()));
        assert_eq!(Theme::named("light"), Some(Theme::light()));
        assert!(Theme::named("solarized").is_none());
    }

    #[test]
    fn test_variant_defaults_match_catalogue_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
        assert_eq!(BadgeKind::default(), BadgeKind::Default);
        assert_eq!(BadgeTone::default(), BadgeTone::Default);
        assert_eq!(TabsKind::default(), TabsKind::Default);
        assert_eq!(InputVariant::default(), InputVariant::Default);
    }

    #[test]
    fn test_button_variants_are_distinct() {
        let theme = Theme::dark();
        let styles = [
            ButtonVariant::Default.style(&theme),
            ButtonVariant::Destructive.style(&theme),
            ButtonVariant::Secondary.style(&theme),
            ButtonVariant::Tertiary.style(&theme),
            ButtonVariant::Ghost.style(&theme),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in styles.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_failure_variant_uses_destructive_accent() {
        let theme = Theme::dark();
        let style = InputVariant::Failure.border_style(&theme);
        assert_eq!(style.fg, Some(theme.destructive));
    }
}
