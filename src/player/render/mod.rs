//! Player UI rendering.
//!
//! Layout: a sidebar with the run's summary (sequence, dash structure, max
//! pairings), the score table grid filling the rest, and a one-line status
//! bar at the bottom. The help overlay covers everything when visible.

mod grid;
mod help;
mod status;

pub use grid::render_grid;
pub use help::render_help;
pub use status::render_status;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::player::state::{Player, ViewState};
use crate::run::Run;
use crate::tui::Theme;

/// Sidebar width in columns.
const SIDEBAR_WIDTH: u16 = 30;

/// Draw one full frame of the player UI.
pub fn draw(frame: &mut Frame, run: &Run, player: &Player, view: &mut ViewState, theme: &Theme) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
        .split(outer[0]);

    render_sidebar(frame, main[0], run, theme);
    render_grid(frame, main[1], run, player, view, theme);
    render_status(frame, outer[1], player, theme);

    if view.show_help {
        render_help(frame, frame.area(), theme);
    }
}

/// Render the run summary sidebar.
fn render_sidebar(frame: &mut Frame, area: Rect, run: &Run, theme: &Theme) {
    let labeled = |label: &str, value: String| {
        vec![
            Line::from(Span::styled(label.to_string(), theme.accent_style())),
            Line::from(Span::styled(value, theme.text_style())),
            Line::raw(""),
        ]
    };

    let mut lines = Vec::new();
    lines.extend(labeled("sequence", run.sequence.clone()));
    lines.extend(labeled("min loop length", run.min_loop.to_string()));
    lines.extend(labeled("max pairings", run.max_score.to_string()));
    lines.extend(labeled("dash structure", run.dash_structure.clone()));
    lines.extend(labeled(
        "pairs",
        run.pairings
            .iter()
            .map(|(i, j)| format!("({i},{j})"))
            .collect::<Vec<_>>()
            .join(" "),
    ));

    let block = Block::default().borders(Borders::ALL).title(" nussinov run ");
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
