//! Feed error types
//!
//! Two failure families exist in this crate:
//! - Recoverable errors (`FeedError`): invalid configuration, missing layout
//!   anchors, out-of-range insert positions. Returned as `Result` and
//!   propagated with `?`.
//! - Fatal wiring defects: acquiring a pooled row for a tag that was never
//!   registered. These panic at the call site because no runtime recovery
//!   exists for a mis-assembled host.
//!
//! Cosmetic input (hex color strings) degrades silently instead of erroring;
//! see [`crate::color::Rgb::from_hex`].

use crate::geometry::ViewId;
use thiserror::Error;

/// Errors surfaced by feed operations.
#[derive(Debug, Error, PartialEq)]
pub enum FeedError {
    /// Configuration failed parsing or validation.
    #[error("invalid feed configuration: {0}")]
    Config(String),

    /// A layout anchor is no longer present in the view registry.
    #[error("{0} is not registered in the view registry")]
    ViewMissing(ViewId),

    /// A 1-based insert position fell outside the feed.
    #[error("insert position {position} is outside 1..={max}")]
    PositionOutOfRange {
        /// The rejected 1-based position.
        position: usize,
        /// Largest position currently accepted (row count + 1).
        max: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FeedError>;
