//! Shared harness for feed integration tests.
//!
//! `TestFeed` wires a surface to fixed anchors (container 100x100, author
//! badge at its bottom-right) and drives it the way a frontend would:
//! pump, layout, tick, snapshot.

use herald_app::{
    Block, FeedConfig, FeedSnapshot, FeedSurface, KeyboardEvent, KeyboardNotifier, Rect, ViewId,
    ViewRegistry,
};

pub struct TestFeed {
    pub registry: ViewRegistry,
    pub notifier: KeyboardNotifier,
    pub surface: FeedSurface,
    pub container: ViewId,
    pub author: ViewId,
}

impl TestFeed {
    pub fn new() -> Self {
        Self::with_config(FeedConfig::default())
    }

    pub fn with_config(config: FeedConfig) -> Self {
        let mut registry = ViewRegistry::new();
        let container = registry.insert(Rect::new(0.0, 0.0, 100.0, 100.0));
        let author = registry.insert(Rect::new(70.0, 80.0, 10.0, 10.0));
        let notifier = KeyboardNotifier::new();
        let surface = FeedSurface::new(config, container, author)
            .expect("test config is valid")
            .with_keyboard(&notifier);
        Self {
            registry,
            notifier,
            surface,
            container,
            author,
        }
    }

    /// One frontend frame: pump keyboard events, lay out, advance motion.
    pub fn step(&mut self, dt: f32) -> Rect {
        self.surface.pump();
        let frame = self
            .surface
            .layout(&self.registry)
            .expect("anchors stay registered");
        self.surface.tick(dt);
        frame
    }

    pub fn say(&mut self, text: &str) {
        self.surface.push_block(Block::text(text));
    }

    pub fn keyboard(&self, event: KeyboardEvent) {
        self.notifier.emit(event);
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.surface.snapshot()
    }
}
