//! Input handling for the player.
//!
//! Dispatches crossterm events to the keyboard handler and turns resizes
//! into redraw requests.

mod keyboard;

pub use keyboard::handle_key_event;

use std::time::Instant;

use crossterm::event::{Event, KeyEventKind};

use crate::player::state::{InputResult, Player, ViewState};

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(
    event: Event,
    player: &mut Player,
    view: &mut ViewState,
    now: Instant,
) -> InputResult {
    match event {
        // Key releases/repeats would double-trigger transport toggles on
        // Windows terminals.
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key_event(key, player, view, now)
        }
        Event::Resize(_, _) => {
            view.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}
