//! Keyboard visibility events
//!
//! The host shell owns the fact that a keyboard (or its terminal stand-in,
//! the composer) is appearing; the feed surface only reacts. Instead of a
//! process-wide notification center, the shell owns a [`KeyboardNotifier`]
//! and the surface holds a [`KeyboardSubscription`] obtained at
//! construction. The subscription is a scoped resource: releasing it
//! detaches from the notifier exactly once, on explicit release or on drop,
//! whichever comes first.
//!
//! [`KeyboardInset`] is the pure state machine translating visibility into
//! the surface's bottom gap.

use parking_lot::Mutex;
use slab::Slab;
use std::collections::VecDeque;
use std::sync::{Arc, Weak};

/// A keyboard visibility change announced by the host shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyboardEvent {
    /// The keyboard is about to appear with the given height in layout units.
    WillShow {
        /// Keyboard height in layout units.
        height: f32,
    },
    /// The keyboard is about to disappear.
    WillHide,
}

type EventQueue = Arc<Mutex<VecDeque<KeyboardEvent>>>;
type SubscriberTable = Arc<Mutex<Slab<EventQueue>>>;

// ============================================================================
// Notifier
// ============================================================================

/// Fan-out point for keyboard visibility events.
///
/// Cheap to clone; all clones share the subscriber table.
#[derive(Clone, Debug, Default)]
pub struct KeyboardNotifier {
    subscribers: SubscriberTable,
}

impl KeyboardNotifier {
    /// Notifier with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber and hand back its scoped handle.
    pub fn subscribe(&self) -> KeyboardSubscription {
        let queue: EventQueue = Arc::new(Mutex::new(VecDeque::new()));
        let key = self.subscribers.lock().insert(Arc::clone(&queue));
        tracing::debug!(key, "keyboard subscriber registered");
        KeyboardSubscription {
            registry: Arc::downgrade(&self.subscribers),
            queue,
            key: Some(key),
        }
    }

    /// Deliver `event` to every live subscriber.
    pub fn emit(&self, event: KeyboardEvent) {
        let subscribers = self.subscribers.lock();
        tracing::trace!(?event, subscribers = subscribers.len(), "keyboard event");
        for (_, queue) in subscribers.iter() {
            queue.lock().push_back(event);
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

// ============================================================================
// Subscription
// ============================================================================

/// Scoped handle to a notifier registration.
///
/// Events queue up until polled. Dropping the handle releases the
/// registration; calling [`release`](Self::release) first is equivalent, and
/// doing both is safe because release runs at most once.
#[derive(Debug)]
pub struct KeyboardSubscription {
    registry: Weak<Mutex<Slab<EventQueue>>>,
    queue: EventQueue,
    key: Option<usize>,
}

impl KeyboardSubscription {
    /// Pop the oldest undelivered event, if any.
    pub fn poll(&self) -> Option<KeyboardEvent> {
        self.queue.lock().pop_front()
    }

    /// Detach from the notifier. Idempotent; a no-op when the notifier is
    /// already gone. Events already queued remain pollable.
    pub fn release(&mut self) {
        if let Some(key) = self.key.take() {
            if let Some(registry) = self.registry.upgrade() {
                let _ = registry.lock().try_remove(key);
            }
            tracing::debug!(key, "keyboard subscriber released");
        }
    }

    /// Whether the registration has been released.
    pub fn is_released(&self) -> bool {
        self.key.is_none()
    }
}

impl Drop for KeyboardSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

// ============================================================================
// Bottom-gap state machine
// ============================================================================

/// Keyboard visibility as the feed surface sees it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyboardVisibility {
    /// No keyboard on screen.
    Hidden,
    /// Keyboard on screen at the given height.
    Visible {
        /// Keyboard height in layout units.
        height: f32,
    },
}

/// Translates keyboard visibility into the surface's bottom gap.
///
/// Hidden: the gap is the resting offset. Visible: the gap is
/// `-(height - chrome_allowance)`, lifting the surface clear of the
/// keyboard while crediting back any bottom chrome the keyboard covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyboardInset {
    resting_gap: f32,
    chrome_allowance: f32,
    state: KeyboardVisibility,
}

impl KeyboardInset {
    /// Start hidden with the given resting gap and chrome allowance.
    pub fn new(resting_gap: f32, chrome_allowance: f32) -> Self {
        Self {
            resting_gap,
            chrome_allowance,
            state: KeyboardVisibility::Hidden,
        }
    }

    /// Apply an event to the state machine.
    pub fn apply(&mut self, event: KeyboardEvent) {
        match event {
            KeyboardEvent::WillShow { height } => self.will_show(height),
            KeyboardEvent::WillHide => self.will_hide(),
        }
    }

    /// Keyboard is appearing (or resizing while visible).
    pub fn will_show(&mut self, height: f32) {
        self.state = KeyboardVisibility::Visible { height };
    }

    /// Keyboard is disappearing.
    pub fn will_hide(&mut self) {
        self.state = KeyboardVisibility::Hidden;
    }

    /// Current bottom gap in layout units.
    pub fn bottom_gap(&self) -> f32 {
        match self.state {
            KeyboardVisibility::Hidden => self.resting_gap,
            KeyboardVisibility::Visible { height } => -(height - self.chrome_allowance),
        }
    }

    /// Current visibility state.
    pub fn state(&self) -> KeyboardVisibility {
        self.state
    }

    /// Whether the keyboard is on screen.
    pub fn is_visible(&self) -> bool {
        matches!(self.state, KeyboardVisibility::Visible { .. })
    }
}
