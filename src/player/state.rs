//! Playback controller state management.
//!
//! Contains the [`Player`] state machine that owns the animation cursor and
//! the tick deadline, plus the [`ViewState`] with rendering-only concerns
//! (help overlay, scroll offsets, dirty flag).

use std::time::{Duration, Instant};

use crate::traceback::Step;

/// Base period between animation steps at 1.0x speed.
pub const BASE_STEP_PERIOD: Duration = Duration::from_millis(1250);

/// Slowest allowed playback speed multiplier.
const MIN_SPEED: f64 = 0.25;
/// Fastest allowed playback speed multiplier.
const MAX_SPEED: f64 = 8.0;

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Transport state of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// No cursor, no timer: the complete final structure is shown
    Stopped,
    /// Cursor parked mid-sequence, timer cancelled
    Paused,
    /// Timer armed, cursor advancing once per period
    Playing,
}

impl Transport {
    /// Human-readable label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Transport::Stopped => "stopped",
            Transport::Paused => "paused",
            Transport::Playing => "playing",
        }
    }
}

/// The playback controller: a cursor into the step sequence plus a tick
/// deadline standing in for the repeating timer.
///
/// `cursor == None` is the sentinel meaning "show the complete final
/// structure" rather than any single intermediate frame. The cursor is
/// mutated only through the transport operations below; none of them can
/// fail, and all of them are no-ops on an empty step sequence.
///
/// The timer is cooperative: the event loop asks [`Player::poll_timeout`]
/// how long it may sleep and calls [`Player::tick`] once the deadline has
/// passed. The player re-arms the deadline itself, so at most one deadline
/// ever exists.
#[derive(Debug)]
pub struct Player {
    steps: Vec<Step>,
    cursor: Option<usize>,
    tick_deadline: Option<Instant>,
    base_period: Duration,
    speed: f64,
}

impl Player {
    /// Create a stopped player over a freshly reconstructed step sequence.
    pub fn new(steps: Vec<Step>, base_period: Duration) -> Self {
        Self {
            steps,
            cursor: None,
            tick_deadline: None,
            base_period,
            speed: 1.0,
        }
    }

    /// The step sequence currently loaded.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Current cursor position (`None` = full structure).
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Current transport state.
    pub fn transport(&self) -> Transport {
        if self.tick_deadline.is_some() {
            Transport::Playing
        } else if self.cursor.is_some() {
            Transport::Paused
        } else {
            Transport::Stopped
        }
    }

    /// Whether the timer is armed.
    pub fn is_playing(&self) -> bool {
        self.tick_deadline.is_some()
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Effective period between steps at the current speed.
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(self.base_period.as_secs_f64() / self.speed)
    }

    /// How long the event loop may sleep before the next tick is due.
    ///
    /// `None` when no timer is armed (the loop can block on input alone).
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.tick_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Start playback.
    ///
    /// Advances the cursor immediately so play shows visible progress
    /// without waiting a full period, then arms the timer. No-op when
    /// already playing or when there are no steps. Playing off the end of
    /// the sequence auto-stops instead of arming the timer.
    pub fn play(&mut self, now: Instant) {
        if self.steps.is_empty() || self.is_playing() {
            return;
        }
        if self.advance() {
            self.tick_deadline = Some(now + self.period());
        }
        tracing::debug!(cursor = ?self.cursor, "play");
    }

    /// Pause playback, preserving the cursor. No-op unless playing.
    pub fn pause(&mut self) {
        if self.tick_deadline.take().is_some() {
            tracing::debug!(cursor = ?self.cursor, "pause");
        }
    }

    /// Cancel any timer and reset the cursor to the full-structure view.
    pub fn stop(&mut self) {
        self.tick_deadline = None;
        self.cursor = None;
    }

    /// Step one frame forward, implicitly pausing.
    ///
    /// The cursor cycles through the closed ring `{None, 0, .., len-1}`:
    /// stepping past the last step wraps to the full-structure view, so
    /// there are no dead ends.
    pub fn step_forward(&mut self) {
        if self.steps.is_empty() {
            return;
        }
        self.tick_deadline = None;
        self.cursor = match self.cursor {
            None => Some(0),
            Some(c) if c + 1 >= self.steps.len() => None,
            Some(c) => Some(c + 1),
        };
    }

    /// Step one frame backward, implicitly pausing.
    ///
    /// Stepping backward past the full-structure view wraps to the last
    /// concrete step.
    pub fn step_backward(&mut self) {
        if self.steps.is_empty() {
            return;
        }
        self.tick_deadline = None;
        self.cursor = match self.cursor {
            None => Some(self.steps.len() - 1),
            Some(0) => None,
            Some(c) => Some(c - 1),
        };
    }

    /// Advance on a timer tick if the deadline has passed.
    ///
    /// Returns true when the cursor (or transport state) changed. Re-arms
    /// the deadline after each advance; reaching the end of the sequence
    /// performs the equivalent of [`Player::stop`].
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.tick_deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        if self.advance() {
            self.tick_deadline = Some(now + self.period());
        }
        true
    }

    /// Replace the step sequence for a new run.
    ///
    /// Forces an implicit stop first so no consumer ever observes a cursor
    /// pointing into the old sequence.
    pub fn replace_steps(&mut self, steps: Vec<Step>) {
        self.stop();
        self.steps = steps;
    }

    /// Increase playback speed (max 8x).
    pub fn speed_up(&mut self) {
        self.speed = (self.speed * 1.5).min(MAX_SPEED);
    }

    /// Decrease playback speed (min 0.25x).
    pub fn speed_down(&mut self) {
        self.speed = (self.speed / 1.5).max(MIN_SPEED);
    }

    /// Move the cursor one step forward, auto-stopping at the end.
    ///
    /// Returns false when the advance ran off the end of the sequence
    /// (the player is then stopped).
    fn advance(&mut self) -> bool {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.steps.len() {
            // Auto-stop invariant: reaching the end always self-terminates
            // rather than indexing out of range.
            self.stop();
            false
        } else {
            self.cursor = Some(next);
            true
        }
    }
}

/// Rendering-only state: nothing here feeds back into playback decisions.
#[derive(Debug)]
pub struct ViewState {
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// Vertical scroll offset into the score table grid
    pub row_offset: usize,
    /// Horizontal scroll offset into the score table grid
    pub col_offset: usize,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl ViewState {
    /// Fresh view state with a pending first render.
    pub fn new() -> Self {
        Self {
            show_help: false,
            row_offset: 0,
            col_offset: 0,
            needs_render: true,
        }
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
