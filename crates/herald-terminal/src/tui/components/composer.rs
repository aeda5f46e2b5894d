//! # Composer Component
//!
//! The reply bar at the bottom of the shell. Focusing it slides a key deck
//! up over the stage, which is what the feed's keyboard inset reacts to:
//! the deck plus the bar is the keyboard height the session announces.

use iocraft::prelude::*;

use crate::tui::dim;
use crate::tui::theme::{faded, focus_border_color, solid, Icons, Spacing, Theme};

/// Props for Composer
#[derive(Default, Props)]
pub struct ComposerProps {
    /// Current reply text.
    pub value: String,
    /// Whether the reply bar has focus (keyboard up).
    pub focused: bool,
}

/// The reply bar, with a decorative key deck while focused.
#[component]
pub fn Composer(props: &ComposerProps) -> impl Into<AnyElement<'static>> {
    let height = if props.focused {
        dim::COMPOSER_HEIGHT + dim::KEY_DECK_HEIGHT
    } else {
        dim::COMPOSER_HEIGHT
    };
    let top = dim::STAGE_REGION - height;

    let display_text = if props.value.is_empty() {
        if props.focused {
            "Type a reply".to_string()
        } else {
            "Press i to reply".to_string()
        }
    } else {
        props.value.clone()
    };
    let text_color = if props.value.is_empty() {
        faded(Theme::TEXT_MUTED, 0.9)
    } else {
        solid(Theme::TEXT)
    };

    let deck = props.focused.then(|| {
        element! {
            View(
                width: dim::TOTAL_WIDTH,
                height: dim::KEY_DECK_HEIGHT,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: solid(Theme::BORDER),
                background_color: solid(Theme::DECK),
            ) {
                Text(content: "q w e r t y u i o p", color: solid(Theme::TEXT_MUTED))
                Text(content: "a s d f g h j k l", color: solid(Theme::TEXT_MUTED))
            }
        }
    });

    element! {
        View(
            position: Position::Absolute,
            top: top,
            left: 0u16,
            width: dim::TOTAL_WIDTH,
            height: height,
            flex_direction: FlexDirection::Column,
        ) {
            #(deck)
            View(
                width: dim::TOTAL_WIDTH,
                height: dim::COMPOSER_HEIGHT,
                flex_direction: FlexDirection::Row,
                gap: Spacing::XS,
                border_style: BorderStyle::Round,
                border_color: focus_border_color(props.focused),
                background_color: solid(Theme::BG),
                padding_left: Spacing::PANEL_PADDING,
                padding_right: Spacing::PANEL_PADDING,
            ) {
                Text(content: Icons::PROMPT, color: solid(Theme::ACCENT), weight: Weight::Bold)
                Text(content: display_text, color: text_color)
            }
        }
    }
}
