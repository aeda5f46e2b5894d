//! Message block model
//!
//! A `Block` is one displayable unit of message content, variant-tagged so
//! the cell selector can route it to the matching row type. Blocks are
//! immutable once created; producers mint them, the feed surface binds them
//! to pooled rows for rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a block within a feed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(String);

impl BlockId {
    /// Mint a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Build an id from a known string (stable ids for scripted content).
    pub fn named(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An action button attached to a block.
///
/// `action` is an opaque command string the host interprets when the button
/// is pressed; the core never dispatches it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSpec {
    /// Visible button label.
    pub title: String,
    /// Host-interpreted command fired on press.
    pub action: String,
}

impl ButtonSpec {
    /// Build a button from a label and its action string.
    pub fn new(title: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            action: action.into(),
        }
    }
}

/// One displayable unit of message content.
///
/// The enum is closed: producers that emit a kind this build does not render
/// are represented by [`Block::Unsupported`], which the selector routes to
/// the base row without binding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// Plain text bubble.
    Text {
        /// Block identity.
        id: BlockId,
        /// Message body.
        text: String,
    },
    /// Text with a single action button.
    Button {
        /// Block identity.
        id: BlockId,
        /// Message body.
        text: String,
        /// The action button.
        button: ButtonSpec,
    },
    /// Text with a pair of action buttons.
    DoubleButton {
        /// Block identity.
        id: BlockId,
        /// Message body.
        text: String,
        /// Left-hand button.
        left: ButtonSpec,
        /// Right-hand button.
        right: ButtonSpec,
    },
    /// A block kind this build does not know how to render.
    Unsupported {
        /// Block identity.
        id: BlockId,
        /// Producer-reported kind, kept for logs.
        kind: String,
    },
}

impl Block {
    /// Plain text block with a fresh id.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            id: BlockId::new(),
            text: text.into(),
        }
    }

    /// Single-button block with a fresh id.
    pub fn button(text: impl Into<String>, button: ButtonSpec) -> Self {
        Self::Button {
            id: BlockId::new(),
            text: text.into(),
            button,
        }
    }

    /// Double-button block with a fresh id.
    pub fn double_button(text: impl Into<String>, left: ButtonSpec, right: ButtonSpec) -> Self {
        Self::DoubleButton {
            id: BlockId::new(),
            text: text.into(),
            left,
            right,
        }
    }

    /// Forward-compatibility block for an unrenderable kind.
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::Unsupported {
            id: BlockId::new(),
            kind: kind.into(),
        }
    }

    /// Replace the minted id with a stable one.
    pub fn with_id(mut self, new_id: BlockId) -> Self {
        match &mut self {
            Self::Text { id, .. }
            | Self::Button { id, .. }
            | Self::DoubleButton { id, .. }
            | Self::Unsupported { id, .. } => *id = new_id,
        }
        self
    }

    /// Block identity.
    pub fn id(&self) -> &BlockId {
        match self {
            Self::Text { id, .. }
            | Self::Button { id, .. }
            | Self::DoubleButton { id, .. }
            | Self::Unsupported { id, .. } => id,
        }
    }

    /// Message body, if the variant carries one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. }
            | Self::Button { text, .. }
            | Self::DoubleButton { text, .. } => Some(text),
            Self::Unsupported { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_mint_distinct_ids() {
        let a = Block::text("hi");
        let b = Block::text("hi");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_with_id_overrides_minted_id() {
        let block = Block::text("hi").with_id(BlockId::named("welcome-1"));
        assert_eq!(block.id().as_str(), "welcome-1");
    }

    #[test]
    fn test_body_by_variant() {
        assert_eq!(Block::text("a").body(), Some("a"));
        assert_eq!(
            Block::button("b", ButtonSpec::new("Ok", "ack")).body(),
            Some("b")
        );
        assert_eq!(Block::unsupported("Video").body(), None);
    }
}
