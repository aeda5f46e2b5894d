//! # Author Badge Component
//!
//! The sender's avatar anchor. The feed surface hangs off this badge's
//! frame, and the greet bounce plays here.

use herald_app::Rgb;
use iocraft::prelude::*;

use crate::tui::theme::{faded, solid, Theme};

/// Props for AuthorBadge
#[derive(Default, Props)]
pub struct AuthorBadgeProps {
    /// Author initial shown inside the badge.
    pub initial: String,
    /// Accent color for the badge border.
    pub accent: Rgb,
    /// Bounce scale, `1.0` at rest.
    pub scale: f32,
    /// Grid column of the badge frame.
    pub x: u16,
    /// Grid row of the badge frame.
    pub y: u16,
    /// Badge width in columns.
    pub width: u16,
    /// Badge height in rows.
    pub height: u16,
}

/// The author avatar the feed anchors to.
///
/// A terminal cell grid cannot scale glyphs, so the bounce reads as a
/// heavier border and a puffed label while the scale is above rest.
#[component]
pub fn AuthorBadge(props: &AuthorBadgeProps) -> impl Into<AnyElement<'static>> {
    let puffed = props.scale > 1.05;
    let border_style = if puffed {
        BorderStyle::Bold
    } else {
        BorderStyle::Round
    };
    let label = if puffed {
        format!("\u{00B7}{}\u{00B7}", props.initial)
    } else {
        props.initial.clone()
    };
    let label_color = if puffed {
        solid(Theme::TEXT)
    } else {
        faded(Theme::TEXT, 0.9)
    };

    element! {
        View(
            position: Position::Absolute,
            top: props.y,
            left: props.x,
            width: props.width,
            height: props.height,
            border_style: border_style,
            border_color: solid(props.accent),
            justify_content: JustifyContent::Center,
        ) {
            Text(content: label, color: label_color, weight: Weight::Bold)
        }
    }
}
