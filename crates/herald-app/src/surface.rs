//! Feed list surface
//!
//! `FeedSurface` hosts rows in a vertically scrolling column anchored to an
//! author view: it selects rows through the pool, sizes itself from its
//! content, repositions when the keyboard appears, and fades open/closed.
//!
//! ## Event order
//!
//! The host drives the surface in a fixed cadence:
//! 1. `pump()` drains keyboard events into the bottom-gap state machine;
//! 2. `layout(&registry)` measures rows and resolves the frame, then drains
//!    the after-layout queue;
//! 3. `tick(dt)` advances appear fades and the visibility transition;
//! 4. `snapshot()` hands the renderer an immutable view.
//!
//! Work that must see a settled layout (scrolling to the newest row after a
//! keyboard show) goes through [`FeedSurface::after_next_layout`] instead of
//! running inline; callbacks enqueued while the queue drains run after the
//! following pass.
//!
//! ## Visibility
//!
//! The surface starts fully transparent; hosts call [`FeedSurface::open`]
//! once it is on screen. Starting a transition while one is in flight
//! replaces it: the superseded completion never fires and the new fade picks
//! up from the current opacity.

use crate::block::Block;
use crate::config::FeedConfig;
use crate::error::{FeedError, Result};
use crate::geometry::{resolve_feed_frame, Rect, ViewId, ViewRegistry};
use crate::keyboard::{
    KeyboardEvent, KeyboardInset, KeyboardNotifier, KeyboardSubscription, KeyboardVisibility,
};
use crate::motion::Timeline;
use crate::rows::{PoolStats, Row, RowPool, RowTag};
use crate::selector::select_row;
use std::collections::VecDeque;
use std::ops::Range;

/// Callback invoked when a visibility transition completes.
pub type Completion = Box<dyn FnOnce() + Send>;

type AfterLayout = Box<dyn FnOnce(&mut FeedSurface) + Send>;

struct Transition {
    timeline: Timeline,
    completion: Option<Completion>,
}

/// Scrollable feed of rows anchored to an author view.
pub struct FeedSurface {
    config: FeedConfig,
    container: ViewId,
    author: ViewId,
    pool: RowPool,
    rows: Vec<Row>,
    inset: KeyboardInset,
    keyboard: Option<KeyboardSubscription>,
    scroll_offset: usize,
    after_layout: VecDeque<AfterLayout>,
    content_height: f32,
    frame: Rect,
    opacity: f32,
    transition: Option<Transition>,
    detached: bool,
}

impl FeedSurface {
    /// Build a surface anchored to `container` and `author`.
    ///
    /// All row tags are registered with the pool up front; the surface is
    /// fully transparent until [`open`](Self::open) runs.
    pub fn new(config: FeedConfig, container: ViewId, author: ViewId) -> Result<Self> {
        config.validate()?;
        let inset = KeyboardInset::new(config.resting_bottom_gap, config.chrome_allowance());
        Ok(Self {
            container,
            author,
            pool: RowPool::with_all_tags(),
            rows: Vec::new(),
            inset,
            keyboard: None,
            scroll_offset: 0,
            after_layout: VecDeque::new(),
            content_height: 0.0,
            frame: Rect::default(),
            opacity: 0.0,
            transition: None,
            detached: false,
            config,
        })
    }

    /// Subscribe to keyboard events from `notifier`.
    /// The subscription is released on [`detach`](Self::detach) or drop.
    pub fn with_keyboard(mut self, notifier: &KeyboardNotifier) -> Self {
        self.keyboard = Some(notifier.subscribe());
        self
    }

    // ========================================================================
    // Content
    // ========================================================================

    /// Append a block to the end of the feed.
    pub fn push_block(&mut self, block: Block) {
        self.insert_at(self.rows.len(), block);
    }

    /// Insert a block at a 1-based `position`.
    ///
    /// The new row lands immediately after the row previously at
    /// `position - 1`. Position 0 and positions past the end are rejected.
    pub fn insert_block(&mut self, position: usize, block: Block) -> Result<()> {
        let max = self.rows.len() + 1;
        if position == 0 || position > max {
            return Err(FeedError::PositionOutOfRange { position, max });
        }
        self.insert_at(position - 1, block);
        Ok(())
    }

    fn insert_at(&mut self, index: usize, block: Block) {
        let mut row = select_row(&block, &mut self.pool, index);
        row.begin_appear(Timeline::fade_in(self.config.motion.appear_secs));
        self.rows.insert(index, row);
        tracing::debug!(index, total = self.rows.len(), "row inserted");
    }

    /// Release every row back to the pool and clear scroll state.
    pub fn reset(&mut self) {
        let rows = std::mem::take(&mut self.rows);
        for row in rows {
            self.pool.release(row);
        }
        self.scroll_offset = 0;
        self.content_height = 0.0;
        tracing::debug!("feed reset; rows returned to pool");
    }

    /// Number of rows in the feed.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The rows in feed order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Pool acquire/release counters.
    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    /// Drain pending keyboard events into the state machine.
    pub fn pump(&mut self) {
        while let Some(event) = self.keyboard.as_ref().and_then(KeyboardSubscription::poll) {
            self.apply_keyboard(event);
        }
    }

    /// Apply one keyboard event.
    ///
    /// A show moves the bottom gap immediately but defers the scroll to the
    /// newest row until the next layout pass, when the visible row set has
    /// settled.
    pub fn apply_keyboard(&mut self, event: KeyboardEvent) {
        match event {
            KeyboardEvent::WillShow { height } => {
                tracing::debug!(height, "keyboard will show");
                self.inset.will_show(height);
                self.after_next_layout(FeedSurface::scroll_to_last_visible);
            }
            KeyboardEvent::WillHide => {
                tracing::debug!("keyboard will hide");
                self.inset.will_hide();
            }
        }
    }

    /// Current bottom gap to the author's bottom edge.
    pub fn bottom_gap(&self) -> f32 {
        self.inset.bottom_gap()
    }

    /// Keyboard visibility as last observed.
    pub fn keyboard_state(&self) -> KeyboardVisibility {
        self.inset.state()
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Measure content and resolve the frame against the registry, then
    /// drain the after-layout queue.
    pub fn layout(&mut self, registry: &ViewRegistry) -> Result<Rect> {
        let container = registry
            .frame(self.container)
            .ok_or(FeedError::ViewMissing(self.container))?;
        let author = registry
            .frame(self.author)
            .ok_or(FeedError::ViewMissing(self.author))?;

        let width = container.width * self.config.width_ratio;
        let mut content_height = 0.0;
        for row in &mut self.rows {
            let height = row.measure(width);
            row.set_height(height);
            content_height += height;
        }
        self.content_height = content_height;

        let preferred = if self.rows.is_empty() {
            self.config.seed_height
        } else {
            content_height
        };
        self.frame = resolve_feed_frame(
            container,
            author,
            self.inset.bottom_gap(),
            preferred,
            &self.config,
        );

        // Callbacks enqueued during the drain belong to the next pass.
        let deferred = std::mem::take(&mut self.after_layout);
        for action in deferred {
            action(self);
        }

        tracing::trace!(
            rows = self.rows.len(),
            content_height,
            frame = ?self.frame,
            "layout pass"
        );
        Ok(self.frame)
    }

    /// Run `action` once, after the end of the next layout pass.
    pub fn after_next_layout(&mut self, action: impl FnOnce(&mut FeedSurface) + Send + 'static) {
        self.after_layout.push_back(Box::new(action));
    }

    /// Total measured content height from the last layout pass.
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Frame resolved by the last layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    /// Scroll one row toward older content.
    pub fn scroll_up(&mut self) {
        if self.scroll_offset + 1 < self.rows.len() {
            self.scroll_offset += 1;
        }
    }

    /// Scroll one row toward the newest content.
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Jump to the newest row.
    pub fn scroll_to_last_visible(&mut self) {
        if self.scroll_offset != 0 {
            tracing::debug!(from = self.scroll_offset, "scrolling to newest row");
        }
        self.scroll_offset = 0;
    }

    /// Rows scrolled away from the bottom; 0 means pinned to the newest row.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Index range of rows that fit the current frame, newest-biased.
    pub fn visible_window(&self) -> Range<usize> {
        self.visible_window_for(self.frame.height)
    }

    /// Index range of rows that fit a viewport of the given height,
    /// newest-biased and honoring the current scroll offset.
    pub fn visible_window_for(&self, viewport_height: f32) -> Range<usize> {
        let end = self.rows.len().saturating_sub(self.scroll_offset);
        let mut start = end;
        let mut used = 0.0;
        while start > 0 {
            let height = self.rows[start - 1].height();
            if used + height > viewport_height {
                break;
            }
            used += height;
            start -= 1;
        }
        // A row taller than the viewport still shows, clipped.
        if start == end && end > 0 {
            start = end - 1;
        }
        start..end
    }

    // ========================================================================
    // Visibility transitions
    // ========================================================================

    /// Fade to fully visible, then invoke `completion`.
    pub fn open(&mut self, completion: Option<Completion>) {
        tracing::debug!("feed surface opening");
        self.start_transition(1.0, completion);
    }

    /// Fade to fully transparent, then invoke `completion`.
    pub fn close(&mut self, completion: Option<Completion>) {
        tracing::debug!("feed surface closing");
        self.start_transition(0.0, completion);
    }

    fn start_transition(&mut self, target: f32, completion: Option<Completion>) {
        if self.transition.take().is_some() {
            // Cancel-and-replace: the superseded completion never fires.
            tracing::debug!(target, "replacing in-flight visibility transition");
        }
        self.transition = Some(Transition {
            timeline: Timeline::between(self.opacity, target, self.config.motion.transition_secs),
            completion,
        });
    }

    /// Advance appear fades and the visibility transition by `dt` seconds.
    /// A transition finishing this tick fires its completion synchronously.
    pub fn tick(&mut self, dt: f32) {
        for row in &mut self.rows {
            row.tick(dt);
        }
        if let Some(mut transition) = self.transition.take() {
            let finished = transition.timeline.advance(dt);
            self.opacity = transition.timeline.value();
            if finished {
                if let Some(completion) = transition.completion.take() {
                    completion();
                }
            } else {
                self.transition = Some(transition);
            }
        }
    }

    /// Current surface opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether a visibility transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    /// Release external registrations. Runs at most once; safe when no
    /// keyboard was ever attached. Also invoked on drop.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        if let Some(mut subscription) = self.keyboard.take() {
            subscription.release();
        }
        tracing::debug!("feed surface detached");
    }

    /// Whether teardown has run.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Active configuration.
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Render-ready copy of the current state.
    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            frame: self.frame,
            opacity: self.opacity,
            bottom_gap: self.bottom_gap(),
            keyboard_visible: self.inset.is_visible(),
            scroll_offset: self.scroll_offset,
            window: self.visible_window(),
            rows: self
                .rows
                .iter()
                .map(|row| RowSnapshot {
                    tag: row.tag(),
                    block: row.block().cloned(),
                    opacity: row.opacity(),
                    height: row.height(),
                })
                .collect(),
        }
    }
}

impl Drop for FeedSurface {
    fn drop(&mut self) {
        self.detach();
    }
}

// ============================================================================
// Snapshots
// ============================================================================

/// Immutable per-row render state.
#[derive(Clone, Debug)]
pub struct RowSnapshot {
    /// Pool tag the row was selected under.
    pub tag: RowTag,
    /// Bound block, if any.
    pub block: Option<Block>,
    /// Row opacity (appear fade).
    pub opacity: f32,
    /// Measured height from the last layout pass.
    pub height: f32,
}

/// Immutable surface render state.
#[derive(Clone, Debug)]
pub struct FeedSnapshot {
    /// Frame resolved by the last layout pass.
    pub frame: Rect,
    /// Surface opacity.
    pub opacity: f32,
    /// Current bottom gap to the author's bottom edge.
    pub bottom_gap: f32,
    /// Whether the keyboard is on screen.
    pub keyboard_visible: bool,
    /// Rows scrolled away from the bottom.
    pub scroll_offset: usize,
    /// Index range of rows to render.
    pub window: Range<usize>,
    /// All rows in feed order.
    pub rows: Vec<RowSnapshot>,
}
