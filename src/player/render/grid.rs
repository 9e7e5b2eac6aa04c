//! DP score table grid rendering.
//!
//! Mirrors the classic Nussinov table layout: a dash-structure character and
//! a base letter above each column, the base letter again in front of each
//! row, and the scores in the body. Highlighted cells get their group's
//! background color; the frontier cell is additionally bold.
//!
//! The grid scrolls when the table is larger than the terminal, keeping the
//! frontier cell inside the viewport as the animation advances.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::player::resolve::{focus_cell, resolve};
use crate::player::state::{Player, ViewState};
use crate::run::Run;
use crate::tui::Theme;

/// Width of the row-label gutter (base letter plus a space).
const GUTTER: usize = 2;

/// Render the score table grid into `area`, scrolling to keep the frontier
/// cell visible.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    run: &Run,
    player: &Player,
    view: &mut ViewState,
    theme: &Theme,
) {
    let block = Block::default().borders(Borders::ALL).title(" score table ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height < 3 {
        return;
    }

    let n = run.table.len();
    let highlights = resolve(player.steps(), player.cursor());
    let focus = focus_cell(player.steps(), player.cursor());

    let cell_w = cell_width(run);
    let visible_cols = ((inner.width as usize).saturating_sub(GUTTER) / cell_w).min(n);
    // Two header lines: dash structure and bases.
    let visible_rows = ((inner.height as usize).saturating_sub(2)).min(n);
    if visible_cols == 0 || visible_rows == 0 {
        return;
    }

    scroll_into_view(view, focus, n, visible_rows, visible_cols);

    let bases: Vec<char> = run.sequence.chars().collect();
    let dashes: Vec<&str> = run.dash_structure.split_whitespace().collect();
    let col_range = view.col_offset..(view.col_offset + visible_cols).min(n);

    let mut lines = Vec::with_capacity(visible_rows + 2);

    // Dash-structure header (one token per column, "." when absent).
    let mut dash_line = vec![Span::raw(" ".repeat(GUTTER))];
    for c in col_range.clone() {
        let token = dashes.get(c).copied().unwrap_or(".");
        dash_line.push(Span::styled(
            format!("{token:^cell_w$}"),
            theme.text_secondary_style(),
        ));
    }
    lines.push(Line::from(dash_line));

    // Base header.
    let mut base_line = vec![Span::raw(" ".repeat(GUTTER))];
    for c in col_range.clone() {
        let base = bases.get(c).copied().unwrap_or('?');
        base_line.push(Span::styled(
            format!("{base:^cell_w$}"),
            theme.accent_style(),
        ));
    }
    lines.push(Line::from(base_line));

    // Body rows.
    for r in view.row_offset..(view.row_offset + visible_rows).min(n) {
        let base = bases.get(r).copied().unwrap_or('?');
        let mut row = vec![Span::styled(format!("{base:<GUTTER$}"), theme.accent_style())];
        for c in col_range.clone() {
            let text = format!("{:^cell_w$}", run.table.get(r, c));
            let style = match highlights.get(&(r, c)) {
                Some(&group) if focus == Some((r, c)) => theme.focus_style(group),
                Some(&group) => theme.highlight_style(group),
                None => theme.text_style(),
            };
            row.push(Span::styled(text, style));
        }
        lines.push(Line::from(row));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Column width needed for the widest score plus one space of padding on
/// each side, never narrower than 3.
fn cell_width(run: &Run) -> usize {
    let digits = run.max_score.max(1).to_string().len();
    (digits + 2).max(3)
}

/// Keep the focus cell inside the viewport, centering it when it drifts
/// out. Offsets are clamped so the last page stays full.
fn scroll_into_view(
    view: &mut ViewState,
    focus: Option<(usize, usize)>,
    n: usize,
    visible_rows: usize,
    visible_cols: usize,
) {
    let max_row_offset = n.saturating_sub(visible_rows);
    let max_col_offset = n.saturating_sub(visible_cols);

    if let Some((row, col)) = focus {
        if row < view.row_offset || row >= view.row_offset + visible_rows {
            view.row_offset = row.saturating_sub(visible_rows / 2).min(max_row_offset);
        }
        if col < view.col_offset || col >= view.col_offset + visible_cols {
            view.col_offset = col.saturating_sub(visible_cols / 2).min(max_col_offset);
        }
    }

    view.row_offset = view.row_offset.min(max_row_offset);
    view.col_offset = view.col_offset.min(max_col_offset);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_centers_out_of_view_focus() {
        let mut view = ViewState::new();
        scroll_into_view(&mut view, Some((30, 30)), 40, 10, 10);
        assert_eq!(view.row_offset, 25);
        assert_eq!(view.col_offset, 25);
    }

    #[test]
    fn scroll_keeps_in_view_focus_stable() {
        let mut view = ViewState::new();
        view.row_offset = 5;
        view.col_offset = 5;
        scroll_into_view(&mut view, Some((7, 7)), 40, 10, 10);
        assert_eq!(view.row_offset, 5);
        assert_eq!(view.col_offset, 5);
    }

    #[test]
    fn scroll_clamps_offsets_to_table() {
        let mut view = ViewState::new();
        view.row_offset = 100;
        view.col_offset = 100;
        scroll_into_view(&mut view, None, 40, 10, 10);
        assert_eq!(view.row_offset, 30);
        assert_eq!(view.col_offset, 30);
    }

    #[test]
    fn scroll_handles_table_smaller_than_viewport() {
        let mut view = ViewState::new();
        scroll_into_view(&mut view, Some((2, 2)), 4, 10, 10);
        assert_eq!(view.row_offset, 0);
        assert_eq!(view.col_offset, 0);
    }
}
