//! Reusable rows and the row pool
//!
//! A `Row` is the visual cell a block renders into. Rows are recycled
//! through a `RowPool` keyed by [`RowTag`]: acquiring hands out a previously
//! released row when one exists, otherwise creates a fresh one. Exactly one
//! block is bound to a row at a time; binding replaces, never merges.

use crate::block::Block;
use crate::measure;
use crate::motion::Timeline;
use std::collections::HashMap;
use std::fmt;

/// Extra rows a bubble occupies beyond its text: top and bottom border.
const BUBBLE_CHROME_ROWS: f32 = 2.0;
/// Columns a bubble occupies beyond its text: borders plus inner padding.
/// Frontends wrap body text at `width - BUBBLE_CHROME_COLS` so painted
/// bubbles match the heights [`Row::measure`] reports.
pub const BUBBLE_CHROME_COLS: usize = 4;

// ============================================================================
// Row tags
// ============================================================================

/// Pool key naming which row type a block renders into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowTag {
    /// Plain text bubble.
    Text,
    /// Bubble with one action button.
    Button,
    /// Bubble with two action buttons.
    DoubleButton,
    /// Default tag for blocks no renderer claims.
    Base,
}

impl RowTag {
    /// Every tag, in registration order.
    pub const ALL: [RowTag; 4] = [
        RowTag::Text,
        RowTag::Button,
        RowTag::DoubleButton,
        RowTag::Base,
    ];

    /// Stable string form used as the pool key in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Button => "Button",
            Self::DoubleButton => "DoubleButton",
            Self::Base => "Base",
        }
    }
}

impl fmt::Display for RowTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Rows
// ============================================================================

/// A reusable visual cell bound to at most one block.
#[derive(Debug)]
pub struct Row {
    tag: RowTag,
    block: Option<Block>,
    appear: Option<Timeline>,
    height: f32,
}

impl Row {
    fn new(tag: RowTag) -> Self {
        Self {
            tag,
            block: None,
            appear: None,
            height: 0.0,
        }
    }

    /// The pool key this row was acquired under.
    pub fn tag(&self) -> RowTag {
        self.tag
    }

    /// The currently bound block, if any.
    pub fn block(&self) -> Option<&Block> {
        self.block.as_ref()
    }

    /// Bind a block, replacing any previous binding.
    pub fn bind(&mut self, block: Block) {
        self.block = Some(block);
    }

    /// Start the appear fade for a freshly inserted row.
    pub fn begin_appear(&mut self, timeline: Timeline) {
        self.appear = Some(timeline);
    }

    /// Advance the appear fade, dropping it once finished.
    pub fn tick(&mut self, dt: f32) {
        if let Some(appear) = &mut self.appear {
            if appear.advance(dt) {
                self.appear = None;
            }
        }
    }

    /// Row opacity: 1.0 unless an appear fade is still running.
    pub fn opacity(&self) -> f32 {
        self.appear.as_ref().map(Timeline::value).unwrap_or(1.0)
    }

    /// Height measured by the last layout pass.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub(crate) fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    /// Rows this cell occupies when rendered at `width` columns.
    ///
    /// Mirrors the frontend bubble: wrapped body lines, one extra line when
    /// buttons are present, plus border chrome. Unbound rows render as an
    /// empty bubble.
    pub fn measure(&self, width: f32) -> f32 {
        let inner = (width as usize).saturating_sub(BUBBLE_CHROME_COLS).max(1);
        let body_lines = match &self.block {
            Some(block) => block
                .body()
                .map(|text| measure::line_count(text, inner))
                .unwrap_or(1),
            None => 1,
        };
        let button_lines = match &self.block {
            Some(Block::Button { .. }) | Some(Block::DoubleButton { .. }) => 1.0,
            _ => 0.0,
        };
        body_lines as f32 + button_lines + BUBBLE_CHROME_ROWS
    }

    fn recycle(&mut self) {
        self.block = None;
        self.appear = None;
        self.height = 0.0;
    }
}

// ============================================================================
// Row pool
// ============================================================================

/// Acquire/release counters, exposed for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Rows created because no released row was available.
    pub created: usize,
    /// Rows handed back out from the free list.
    pub reused: usize,
}

/// Reuse pool for rows, keyed by tag.
///
/// Tags must be registered before the first acquire; asking for an
/// unregistered tag is a host wiring defect and panics immediately.
#[derive(Debug, Default)]
pub struct RowPool {
    free: HashMap<RowTag, Vec<Row>>,
    stats: PoolStats,
}

impl RowPool {
    /// Empty pool with no registered tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool with every tag in [`RowTag::ALL`] registered.
    pub fn with_all_tags() -> Self {
        let mut pool = Self::new();
        for tag in RowTag::ALL {
            pool.register(tag);
        }
        pool
    }

    /// Register a tag so rows of that type can be acquired.
    pub fn register(&mut self, tag: RowTag) {
        self.free.entry(tag).or_default();
    }

    /// Whether `tag` has been registered.
    pub fn is_registered(&self, tag: RowTag) -> bool {
        self.free.contains_key(&tag)
    }

    /// Hand out a row for `tag`, reusing a released one when possible.
    ///
    /// # Panics
    ///
    /// Panics if `tag` was never registered. This is a fatal configuration
    /// error with no runtime recovery.
    pub fn acquire(&mut self, tag: RowTag) -> Row {
        let Some(free) = self.free.get_mut(&tag) else {
            panic!("no row registered for tag {tag}; register all row tags before presenting the feed");
        };
        match free.pop() {
            Some(row) => {
                self.stats.reused += 1;
                tracing::trace!(%tag, "row reused from pool");
                row
            }
            None => {
                self.stats.created += 1;
                tracing::trace!(%tag, "row created");
                Row::new(tag)
            }
        }
    }

    /// Return a row to the pool, clearing its binding and animation state.
    pub fn release(&mut self, mut row: Row) {
        row.recycle();
        match self.free.get_mut(&row.tag) {
            Some(free) => free.push(row),
            None => tracing::warn!(tag = %row.tag, "released row for unregistered tag; dropping"),
        }
    }

    /// Acquire/release counters.
    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Rows currently sitting on the free list for `tag`.
    pub fn idle_count(&self, tag: RowTag) -> usize {
        self.free.get(&tag).map(Vec::len).unwrap_or(0)
    }
}
