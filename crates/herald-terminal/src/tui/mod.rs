//! # Herald TUI
//!
//! Declarative terminal shell for the feed, built with iocraft.
//!
//! ## Module Organization
//!
//! - **app**: fullscreen shell component and run loop
//! - **components**: feed surface, row bubbles, badge, composer, hint bar
//! - **session**: pure shell state for deterministic testing
//! - **theme**: centralized palette and spacing constants
//!
//! ## Testing Architecture
//!
//! The shell keeps all state in [`session::FeedSession`] and models input
//! as [`session::SessionCommand`] values, so every behavior can be tested
//! without a PTY. The iocraft layer only maps keys to commands and paints
//! the resulting [`session::SessionView`].

pub mod app;
pub mod components;
pub mod session;
pub mod theme;

/// Fixed canvas dimensions for the 80x30 shell grid.
pub mod dim {
    /// Canvas width in columns.
    pub const TOTAL_WIDTH: u16 = 80;
    /// Canvas height in rows.
    pub const TOTAL_HEIGHT: u16 = 30;
    /// Stage rows the feed floats over.
    pub const STAGE_HEIGHT: u16 = 26;
    /// Reply bar rows when blurred.
    pub const COMPOSER_HEIGHT: u16 = 3;
    /// Extra rows the key deck adds while the reply bar is focused.
    pub const KEY_DECK_HEIGHT: u16 = 4;
    /// Stage plus the reply bar slot; the region absolute children position in.
    pub const STAGE_REGION: u16 = STAGE_HEIGHT + COMPOSER_HEIGHT;
    /// Hint bar rows at the bottom.
    pub const HINT_HEIGHT: u16 = 1;
    /// Author badge width in columns.
    pub const BADGE_WIDTH: u16 = 7;
    /// Author badge height in rows.
    pub const BADGE_HEIGHT: u16 = 3;
}

pub use app::{run, HeraldApp};
pub use session::{FeedSession, SessionCommand, SessionView, KEYBOARD_RISE};
