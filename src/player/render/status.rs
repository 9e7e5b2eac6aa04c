//! Status bar rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::state::{Player, Transport};
use crate::tui::Theme;

/// Render the one-line status bar: transport state, frame position, speed,
/// and the most important key hints.
pub fn render_status(frame: &mut Frame, area: Rect, player: &Player, theme: &Theme) {
    let state_style = match player.transport() {
        Transport::Playing => theme.accent_style(),
        _ => theme.text_style(),
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", player.transport().label()), state_style),
        Span::styled("| ", theme.text_secondary_style()),
        Span::styled(frame_position(player), theme.text_style()),
        Span::styled(format!("  {}x", format_speed(player.speed())), theme.text_style()),
        Span::styled(
            "  space play/pause | \u{2190}/\u{2192} step | s stop | ? help | q quit",
            theme.text_secondary_style(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// `step k/N` for a concrete frame, `full structure` for the sentinel.
fn frame_position(player: &Player) -> String {
    match player.cursor() {
        Some(c) => format!("step {}/{}", c + 1, player.steps().len()),
        None => "full structure".to_string(),
    }
}

/// Trim trailing zeros so 1.5 prints as "1.5" but 2.25 stays "2.25".
fn format_speed(speed: f64) -> String {
    let s = format!("{speed:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
