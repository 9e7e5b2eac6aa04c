//! Help overlay rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::ui::centered_rect;
use crate::tui::Theme;

/// Keyboard bindings shown in the overlay.
const BINDINGS: &[(&str, &str)] = &[
    ("space", "play / pause"),
    ("\u{2192}", "step forward"),
    ("\u{2190}", "step backward"),
    ("s", "stop (show full structure)"),
    ("+ / -", "speed up / slow down"),
    ("?", "toggle this help"),
    ("q / esc", "quit"),
];

/// Render the help overlay centered over the whole frame.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(50, 60, area);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::raw("")];
    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:>8}  "), theme.accent_style()),
            Span::styled(*action, theme.text_style()),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  press any key to close",
        theme.text_secondary_style(),
    )));

    let block = Block::default().borders(Borders::ALL).title(" keys ");
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
