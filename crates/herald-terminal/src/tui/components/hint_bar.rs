//! # Hint Bar Component
//!
//! Single-row key binding hints at the bottom of the shell, with a status
//! readout on the right.

use iocraft::prelude::*;

use crate::tui::theme::{solid, Spacing, Theme};

/// A key binding hint shown in the bottom bar.
#[derive(Clone, Debug, Default)]
pub struct KeyHint {
    /// Key name, e.g. `"i"` or `"Esc"`.
    pub key: String,
    /// Short action description.
    pub action: String,
}

impl KeyHint {
    /// Build a hint from a key name and action label.
    pub fn new(key: &str, action: &str) -> Self {
        Self {
            key: key.to_string(),
            action: action.to_string(),
        }
    }
}

/// Props for HintBar
#[derive(Default, Props)]
pub struct HintBarProps {
    /// Hints for the active input mode.
    pub hints: Vec<KeyHint>,
    /// Right-aligned status text.
    pub status: String,
}

/// A one-row bar of key hints with a status readout.
#[component]
pub fn HintBar(props: &HintBarProps) -> impl Into<AnyElement<'static>> {
    let status = props.status.clone();

    element! {
        View(
            flex_direction: FlexDirection::Row,
            width: 100pct,
            padding_left: 1,
            padding_right: 1,
            gap: Spacing::SM,
        ) {
            #(props.hints.iter().map(|hint| element! {
                View(flex_direction: FlexDirection::Row) {
                    Text(content: hint.key.clone(), weight: Weight::Bold, color: solid(Theme::TEXT))
                    Text(content: " ")
                    Text(content: hint.action.clone(), color: solid(Theme::TEXT_MUTED))
                }
            }).collect::<Vec<_>>())
            View(flex_grow: 1.0)
            Text(content: status, color: solid(Theme::TEXT_MUTED))
        }
    }
}
