//! TUI building blocks shared across the player screens.

pub mod theme;
pub mod ui;

pub use theme::Theme;
