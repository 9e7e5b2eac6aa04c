//! Full-screen terminal player loop.
//!
//! Cooperative single-threaded model: rendering, input, and the playback
//! timer all run on this loop. The timer is just a deadline the player
//! hands us; we poll for input until it expires, then tick.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::player::input::handle_event;
use crate::player::render;
use crate::player::state::{InputResult, Player, ViewState};
use crate::run::Run;
use crate::tui::Theme;

/// Poll timeout while no timer is armed (keeps resizes responsive).
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Restores the terminal on drop so panics don't leave raw mode behind.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Run the interactive player for a finished reconstruction run.
///
/// Blocks until the user quits. The run itself is never mutated; the player
/// gets its own copy of the step sequence.
#[cfg(not(tarpaulin_include))]
pub fn run_player(run: &Run, base_period: Duration) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut player = Player::new(run.steps.clone(), base_period);
    let mut view = ViewState::new();
    let theme = Theme::default();

    tracing::debug!(steps = player.steps().len(), "player started");

    loop {
        if view.needs_render {
            terminal.draw(|frame| render::draw(frame, run, &player, &mut view, &theme))?;
            view.needs_render = false;
        }

        // Sleep until input arrives or the next tick is due.
        let timeout = player
            .poll_timeout(Instant::now())
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);
        if event::poll(timeout)? {
            match handle_event(event::read()?, &mut player, &mut view, Instant::now()) {
                InputResult::Quit => break,
                InputResult::Continue => {}
            }
        }

        if player.tick(Instant::now()) {
            view.needs_render = true;
        }
    }

    Ok(())
}
