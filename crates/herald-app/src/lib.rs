//! # Herald App - Pure Feed Core
//!
//! Headless model of a chat-style notification feed: blocks, pooled rows,
//! cell selection, keyboard-driven layout, and motion timelines. No
//! terminal, no I/O, no async runtime; frontends own the event loop and
//! drive this crate deterministically.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────┐
//! │      herald-terminal      │  (iocraft frontend, owns the loop)
//! └─────────────┬─────────────┘
//!               │ imports
//! ┌─────────────▼─────────────┐
//! │        herald-app         │  ← THIS CRATE
//! │                           │
//! │  Block / Row / RowPool    │
//! │  select_row dispatch      │
//! │  FeedSurface + geometry   │
//! │  KeyboardNotifier/Inset   │
//! │  Timeline motion          │
//! └───────────────────────────┘
//! ```
//!
//! ## Driving the surface
//!
//! A host pumps keyboard events, lays out against its view registry, ticks
//! motion, then renders a snapshot:
//!
//! ```
//! use herald_app::{Block, FeedConfig, FeedSurface, KeyboardNotifier, Rect, ViewRegistry};
//!
//! # fn main() -> herald_app::Result<()> {
//! let mut registry = ViewRegistry::new();
//! let container = registry.insert(Rect::new(0.0, 0.0, 100.0, 100.0));
//! let author = registry.insert(Rect::new(70.0, 80.0, 10.0, 10.0));
//!
//! let notifier = KeyboardNotifier::new();
//! let mut surface =
//!     FeedSurface::new(FeedConfig::default(), container, author)?.with_keyboard(&notifier);
//!
//! surface.push_block(Block::text("hello"));
//! surface.pump();
//! surface.layout(&registry)?;
//! surface.tick(1.0 / 30.0);
//! let snapshot = surface.snapshot();
//! # assert_eq!(snapshot.rows.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod block;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod keyboard;
pub mod measure;
pub mod motion;
pub mod rows;
pub mod selector;
pub mod surface;

pub use block::{Block, BlockId, ButtonSpec};
pub use color::Rgb;
pub use config::{FeedConfig, MotionConfig};
pub use error::{FeedError, Result};
pub use geometry::{resolve_feed_frame, Rect, ViewId, ViewRegistry};
pub use keyboard::{
    KeyboardEvent, KeyboardInset, KeyboardNotifier, KeyboardSubscription, KeyboardVisibility,
};
pub use motion::{Curve, Phase, Timeline};
pub use rows::{PoolStats, Row, RowPool, RowTag};
pub use selector::select_row;
pub use surface::{Completion, FeedSnapshot, FeedSurface, RowSnapshot};
