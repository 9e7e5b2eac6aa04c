//! Keyboard input handling for the player.
//!
//! Space toggles play/pause, the arrow keys step frame by frame, `s` stops.
//! The bindings route to exactly the transport operations on [`Player`]
//! with no additional logic of their own.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::state::{InputResult, Player, ViewState};

/// Handle a keyboard event, updating player and view state.
pub fn handle_key_event(
    key: KeyEvent,
    player: &mut Player,
    view: &mut ViewState,
    now: Instant,
) -> InputResult {
    // If help is showing, any key closes it
    if view.show_help {
        view.show_help = false;
        view.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Help ===
        KeyCode::Char('?') => {
            view.toggle_help();
            InputResult::Continue
        }

        // === Transport ===
        KeyCode::Char(' ') => {
            if player.is_playing() {
                player.pause();
            } else {
                player.play(now);
            }
            view.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('s') => {
            player.stop();
            view.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Right => {
            player.step_forward();
            view.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Left => {
            player.step_backward();
            view.needs_render = true;
            InputResult::Continue
        }

        // === Speed ===
        KeyCode::Char('+') | KeyCode::Char('=') => {
            player.speed_up();
            view.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            player.speed_down();
            view.needs_render = true;
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::state::{Transport, BASE_STEP_PERIOD};
    use crate::traceback::Step;

    fn fixtures() -> (Player, ViewState) {
        (
            Player::new(vec![Step::default(); 4], BASE_STEP_PERIOD),
            ViewState::new(),
        )
    }

    fn press(code: KeyCode, player: &mut Player, view: &mut ViewState) -> InputResult {
        handle_key_event(KeyEvent::from(code), player, view, Instant::now())
    }

    #[test]
    fn space_toggles_play_and_pause() {
        let (mut player, mut view) = fixtures();
        press(KeyCode::Char(' '), &mut player, &mut view);
        assert_eq!(player.transport(), Transport::Playing);
        press(KeyCode::Char(' '), &mut player, &mut view);
        assert_eq!(player.transport(), Transport::Paused);
    }

    #[test]
    fn arrows_step_through_frames() {
        let (mut player, mut view) = fixtures();
        press(KeyCode::Right, &mut player, &mut view);
        assert_eq!(player.cursor(), Some(0));
        press(KeyCode::Right, &mut player, &mut view);
        assert_eq!(player.cursor(), Some(1));
        press(KeyCode::Left, &mut player, &mut view);
        assert_eq!(player.cursor(), Some(0));
    }

    #[test]
    fn s_stops_playback() {
        let (mut player, mut view) = fixtures();
        press(KeyCode::Char(' '), &mut player, &mut view);
        press(KeyCode::Char('s'), &mut player, &mut view);
        assert_eq!(player.transport(), Transport::Stopped);
        assert_eq!(player.cursor(), None);
    }

    #[test]
    fn q_and_esc_quit() {
        let (mut player, mut view) = fixtures();
        assert_eq!(
            press(KeyCode::Char('q'), &mut player, &mut view),
            InputResult::Quit
        );
        assert_eq!(press(KeyCode::Esc, &mut player, &mut view), InputResult::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let (mut player, mut view) = fixtures();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_key_event(key, &mut player, &mut view, Instant::now()),
            InputResult::Quit
        );
    }

    #[test]
    fn any_key_closes_help_first() {
        let (mut player, mut view) = fixtures();
        press(KeyCode::Char('?'), &mut player, &mut view);
        assert!(view.show_help);
        // While help is open even a transport key only closes the overlay.
        press(KeyCode::Char(' '), &mut player, &mut view);
        assert!(!view.show_help);
        assert_eq!(player.transport(), Transport::Stopped);
    }

    #[test]
    fn plus_and_minus_adjust_speed() {
        let (mut player, mut view) = fixtures();
        press(KeyCode::Char('+'), &mut player, &mut view);
        assert!(player.speed() > 1.0);
        press(KeyCode::Char('-'), &mut player, &mut view);
        press(KeyCode::Char('-'), &mut player, &mut view);
        assert!(player.speed() < 1.0);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let (mut player, mut view) = fixtures();
        assert_eq!(
            press(KeyCode::Char('x'), &mut player, &mut view),
            InputResult::Continue
        );
        assert_eq!(player.transport(), Transport::Stopped);
    }
}
