//! Theme configuration for the TUI.
//!
//! Centralizes all color and style definitions, including the palette used
//! to color independent substructure groups during the animation.

use ratatui::style::{Color, Modifier, Style};

use crate::traceback::GroupId;

/// Theme configuration for the TUI.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and important elements
    pub accent: Color,
    /// Foreground used on top of group-colored cell backgrounds
    pub highlight_fg: Color,
    /// Background colors for substructure groups, cycled by group id
    pub group_palette: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            highlight_fg: Color::Black,
            group_palette: vec![
                Color::Cyan,
                Color::Magenta,
                Color::Yellow,
                Color::Green,
                Color::Blue,
                Color::Red,
                Color::LightCyan,
                Color::LightMagenta,
                Color::LightYellow,
                Color::LightGreen,
                Color::LightBlue,
                Color::LightRed,
            ],
        }
    }
}

impl Theme {
    /// Background color for a substructure group.
    ///
    /// Deterministic for the whole animation run: the same group always
    /// maps to the same color in every frame it appears.
    pub fn group_color(&self, group: GroupId) -> Color {
        self.group_palette[group % self.group_palette.len()]
    }

    /// Style for a highlighted table cell.
    pub fn highlight_style(&self, group: GroupId) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.group_color(group))
    }

    /// Style for the cell the animation is currently working on.
    pub fn focus_style(&self, group: GroupId) -> Style {
        self.highlight_style(group).add_modifier(Modifier::BOLD)
    }

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented elements (headers, active transport state).
    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_colors_are_deterministic() {
        let theme = Theme::default();
        assert_eq!(theme.group_color(3), theme.group_color(3));
    }

    #[test]
    fn group_colors_cycle_through_palette() {
        let theme = Theme::default();
        let n = theme.group_palette.len();
        assert_eq!(theme.group_color(0), theme.group_color(n));
        assert_ne!(theme.group_color(0), theme.group_color(1));
    }
}
