//! # Feed Session
//!
//! Pure shell state behind the iocraft component tree. All input is
//! expressed as a [`SessionCommand`], so the whole shell can be driven
//! deterministically in tests without a terminal:
//!
//! ```text
//! FeedSession x SessionCommand -> FeedSession
//! ```
//!
//! The component layer only maps key presses to commands and paints the
//! [`SessionView`] this module hands back.

use herald_app::{
    Block, FeedConfig, FeedSnapshot, FeedSurface, KeyboardEvent, KeyboardNotifier, PoolStats, Rect,
    Result, Rgb, Timeline, ViewId, ViewRegistry,
};

use crate::demo::DemoScript;
use crate::tui::dim;

/// Stage frame registered for the feed container.
const STAGE_FRAME: Rect = Rect::new(
    0.0,
    0.0,
    dim::TOTAL_WIDTH as f32,
    dim::STAGE_HEIGHT as f32,
);

/// Author badge frame, tucked into the stage's bottom-right corner.
const AUTHOR_FRAME: Rect = Rect::new(
    (dim::TOTAL_WIDTH - dim::BADGE_WIDTH - 1) as f32,
    (dim::STAGE_HEIGHT - dim::BADGE_HEIGHT - 1) as f32,
    dim::BADGE_WIDTH as f32,
    dim::BADGE_HEIGHT as f32,
);

/// Rows the keyboard analog occupies when the reply bar is focused.
pub const KEYBOARD_RISE: f32 = (dim::COMPOSER_HEIGHT + dim::KEY_DECK_HEIGHT) as f32;

/// One unit of user intent, decoupled from key bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Focus the reply bar, sliding the keyboard in.
    FocusComposer,
    /// Blur the reply bar, sliding the keyboard out.
    BlurComposer,
    /// Append a character to the reply.
    ComposerChar(char),
    /// Delete the last reply character.
    ComposerBackspace,
    /// Send the reply, or advance the script when the bar is blurred.
    Submit,
    /// Advance the scripted feed by one block.
    Advance,
    /// Scroll one row away from the newest.
    ScrollOlder,
    /// Scroll one row back toward the newest.
    ScrollNewer,
    /// Fade the feed surface in.
    Open,
    /// Fade the feed surface out.
    Close,
    /// Play the badge bounce.
    Bounce,
    /// Recycle every row and replay the script.
    Reset,
}

/// Everything the shell tracks between renders.
pub struct FeedSession {
    registry: ViewRegistry,
    notifier: KeyboardNotifier,
    surface: FeedSurface,
    demo: DemoScript,
    composer: String,
    composer_focused: bool,
    badge: Option<Timeline>,
    badge_scale: f32,
    accent: Rgb,
    author: ViewId,
}

impl FeedSession {
    /// Build a session around a validated configuration.
    ///
    /// Registers the stage and badge frames, subscribes the surface to the
    /// keyboard notifier, starts the open fade, and seeds the first
    /// scripted block.
    pub fn new(config: FeedConfig, accent: Rgb) -> Result<Self> {
        let mut registry = ViewRegistry::new();
        let stage = registry.insert(STAGE_FRAME);
        let author = registry.insert(AUTHOR_FRAME);

        let notifier = KeyboardNotifier::new();
        let mut surface = FeedSurface::new(config, stage, author)?.with_keyboard(&notifier);
        surface.open(None);

        let mut demo = DemoScript::standard();
        if let Some(block) = demo.next() {
            surface.push_block(block);
        }

        Ok(Self {
            registry,
            notifier,
            surface,
            demo,
            composer: String::new(),
            composer_focused: false,
            badge: None,
            badge_scale: 1.0,
            accent,
            author,
        })
    }

    /// Drive one frame: drain keyboard events, lay out, and advance motion.
    pub fn advance(&mut self, dt: f32) {
        self.surface.pump();
        if let Err(error) = self.surface.layout(&self.registry) {
            tracing::warn!(%error, "feed layout failed");
        }
        self.surface.tick(dt);

        let mut finished = false;
        if let Some(timeline) = self.badge.as_mut() {
            finished = timeline.advance(dt);
            self.badge_scale = timeline.value();
        }
        if finished {
            self.badge = None;
        }
    }

    /// Apply one command. Returns whether visible state changed.
    pub fn apply(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::FocusComposer => {
                if self.composer_focused {
                    return false;
                }
                self.composer_focused = true;
                self.notifier.emit(KeyboardEvent::WillShow {
                    height: KEYBOARD_RISE,
                });
                true
            }
            SessionCommand::BlurComposer => {
                if !self.composer_focused {
                    return false;
                }
                self.composer_focused = false;
                self.notifier.emit(KeyboardEvent::WillHide);
                true
            }
            SessionCommand::ComposerChar(c) => {
                if !self.composer_focused {
                    return false;
                }
                self.composer.push(c);
                true
            }
            SessionCommand::ComposerBackspace => {
                self.composer_focused && self.composer.pop().is_some()
            }
            SessionCommand::Submit => {
                if self.composer_focused {
                    let reply = self.composer.trim().to_string();
                    if reply.is_empty() {
                        return false;
                    }
                    self.surface.push_block(Block::text(reply));
                    self.composer.clear();
                    true
                } else {
                    self.advance_script()
                }
            }
            SessionCommand::Advance => self.advance_script(),
            SessionCommand::ScrollOlder => {
                let before = self.surface.scroll_offset();
                self.surface.scroll_up();
                before != self.surface.scroll_offset()
            }
            SessionCommand::ScrollNewer => {
                let before = self.surface.scroll_offset();
                self.surface.scroll_down();
                before != self.surface.scroll_offset()
            }
            SessionCommand::Open => {
                self.surface
                    .open(Some(Box::new(|| tracing::debug!("open fade finished"))));
                true
            }
            SessionCommand::Close => {
                self.surface
                    .close(Some(Box::new(|| tracing::debug!("close fade finished"))));
                true
            }
            SessionCommand::Bounce => {
                let phase = self.surface.config().motion.bounce_secs;
                self.badge = Some(Timeline::bounce(phase));
                true
            }
            SessionCommand::Reset => {
                self.surface.reset();
                self.demo.reset();
                self.composer.clear();
                if let Some(block) = self.demo.next() {
                    self.surface.push_block(block);
                }
                true
            }
        }
    }

    fn advance_script(&mut self) -> bool {
        match self.demo.next() {
            Some(block) => {
                self.surface.push_block(block);
                true
            }
            None => false,
        }
    }

    /// Whether the reply bar currently has focus.
    pub fn is_composer_focused(&self) -> bool {
        self.composer_focused
    }

    /// Current reply text.
    pub fn composer(&self) -> &str {
        &self.composer
    }

    /// Current badge bounce scale, `1.0` at rest.
    pub fn badge_scale(&self) -> f32 {
        self.badge_scale
    }

    /// The surface under the shell, for read-only inspection.
    pub fn surface(&self) -> &FeedSurface {
        &self.surface
    }

    /// Snapshot render state for the component layer.
    pub fn view(&self) -> SessionView {
        SessionView {
            snapshot: self.surface.snapshot(),
            composer: self.composer.clone(),
            composer_focused: self.composer_focused,
            badge_scale: self.badge_scale,
            badge_frame: self.registry.frame(self.author).unwrap_or_default(),
            accent: self.accent,
            author_initial: self.demo.author_initial(),
            script_remaining: self.demo.remaining(),
            stats: self.surface.pool_stats(),
        }
    }
}

/// Immutable render state handed to the component layer.
#[derive(Clone, Debug)]
pub struct SessionView {
    /// Feed surface snapshot from the last layout and tick.
    pub snapshot: FeedSnapshot,
    /// Current reply text.
    pub composer: String,
    /// Whether the reply bar has focus.
    pub composer_focused: bool,
    /// Badge bounce scale.
    pub badge_scale: f32,
    /// Badge frame in stage coordinates.
    pub badge_frame: Rect,
    /// Accent color for buttons and the badge.
    pub accent: Rgb,
    /// One-letter badge label.
    pub author_initial: String,
    /// Scripted blocks not yet played.
    pub script_remaining: usize,
    /// Row pool counters.
    pub stats: PoolStats,
}
