//! Layout geometry
//!
//! The feed surface never owns the views it is anchored to. The host owns a
//! [`ViewRegistry`] of frames and hands the surface plain [`ViewId`] handles
//! for its container and author anchor; the surface reads their frames at
//! layout time and resolves its own frame from them.
//!
//! Coordinates are f32 layout units with y growing downward.

use crate::config::FeedConfig;
use crate::error::{FeedError, Result};
use slab::Slab;
use std::fmt;

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle in layout units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge (y grows downward).
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Build a rectangle from its top-left corner and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

// ============================================================================
// View registry
// ============================================================================

/// Non-owning handle to a view registered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewId(usize);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view #{}", self.0)
    }
}

/// Host-owned table of view frames.
///
/// Holders of a [`ViewId`] can read and update the frame but never control
/// the view's lifetime; removal is the host's call.
#[derive(Debug, Default)]
pub struct ViewRegistry {
    views: Slab<Rect>,
}

impl ViewRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view, returning its handle.
    pub fn insert(&mut self, frame: Rect) -> ViewId {
        ViewId(self.views.insert(frame))
    }

    /// Replace a registered view's frame.
    pub fn update(&mut self, id: ViewId, frame: Rect) -> Result<()> {
        match self.views.get_mut(id.0) {
            Some(slot) => {
                *slot = frame;
                Ok(())
            }
            None => Err(FeedError::ViewMissing(id)),
        }
    }

    /// Current frame for `id`, if still registered.
    pub fn frame(&self, id: ViewId) -> Option<Rect> {
        self.views.get(id.0).copied()
    }

    /// Drop a view. Outstanding handles observe `None` afterwards.
    pub fn remove(&mut self, id: ViewId) -> Option<Rect> {
        self.views.try_remove(id.0)
    }

    /// Number of registered views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether no views are registered.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

// ============================================================================
// Frame resolution
// ============================================================================

/// Resolve the feed surface frame against its anchors.
///
/// The rules, in order:
/// - width is `width_ratio` of the container width;
/// - the trailing edge sits `author_gap` units left of the author frame's
///   leading edge;
/// - the bottom edge is the author frame's bottom shifted by `bottom_gap`
///   (negative gaps lift the surface above it);
/// - the top edge never rises past container top + `top_margin`; preferred
///   height yields when the two conflict.
///
/// `preferred_height` is the content-driven height (or the seed height while
/// the feed is empty).
pub fn resolve_feed_frame(
    container: Rect,
    author: Rect,
    bottom_gap: f32,
    preferred_height: f32,
    config: &FeedConfig,
) -> Rect {
    let width = container.width * config.width_ratio;
    let x = author.x - config.author_gap - width;
    let bottom = author.max_y() + bottom_gap;
    let top_limit = container.y + config.top_margin;
    let available = (bottom - top_limit).max(0.0);
    let height = preferred_height.min(available).max(0.0);
    Rect::new(x, bottom - height, width, height)
}
