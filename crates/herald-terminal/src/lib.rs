//! # Herald Terminal - Feed Frontend
//!
//! Terminal shell for the Herald feed. All feed semantics live in
//! `herald-app`; this crate maps key presses to session commands and
//! paints snapshots with iocraft.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │     herald-terminal     │  ← THIS CRATE
//! │                         │
//! │  CLI parsing (bpaf)     │
//! │  iocraft components     │
//! │  FeedSession shell      │
//! └───────────┬─────────────┘
//!             │
//!             ↓ imports
//! ┌───────────────────────────┐
//! │        herald-app         │
//! │     (pure feed core)      │
//! │                           │
//! │  FeedSurface, RowPool     │
//! │  KeyboardNotifier, Rects  │
//! └───────────────────────────┘
//! ```
//!
//! ## Constraints
//!
//! This crate:
//! - **IMPORTS FROM**: `herald-app` (pure types and feed logic)
//! - **MUST NOT**: Reimplement layout, pooling, or keyboard inset math;
//!   the core owns those and the shell only renders their results

pub mod cli;
pub mod demo;
pub mod tui;
