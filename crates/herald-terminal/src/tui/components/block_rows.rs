//! # Block Row Components
//!
//! One bubble renderer per pooled row tag. Body text arrives pre-wrapped by
//! the core's measurement pass so the painted height always matches the
//! height the layout math reserved.

use herald_app::Rgb;
use iocraft::prelude::*;

use crate::tui::theme::{faded, Icons, Spacing, Theme};

/// Props for TextRowView
#[derive(Default, Props)]
pub struct TextRowViewProps {
    /// Pre-wrapped body lines.
    pub lines: Vec<String>,
    /// Combined surface and appear opacity.
    pub opacity: f32,
}

/// A plain text bubble.
#[component]
pub fn TextRowView(props: &TextRowViewProps) -> impl Into<AnyElement<'static>> {
    let opacity = props.opacity;
    let content = props.lines.join("\n");

    element! {
        View(
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: faded(Theme::BORDER, opacity),
            background_color: faded(Theme::SURFACE, opacity),
            padding_left: Spacing::PANEL_PADDING,
            padding_right: Spacing::PANEL_PADDING,
        ) {
            Text(content: content, color: faded(Theme::TEXT, opacity))
        }
    }
}

/// Props for ButtonRowView
#[derive(Default, Props)]
pub struct ButtonRowViewProps {
    /// Pre-wrapped body lines.
    pub lines: Vec<String>,
    /// Action button title.
    pub label: String,
    /// Accent color for the button.
    pub accent: Rgb,
    /// Combined surface and appear opacity.
    pub opacity: f32,
}

/// A text bubble with a single action button below the body.
#[component]
pub fn ButtonRowView(props: &ButtonRowViewProps) -> impl Into<AnyElement<'static>> {
    let opacity = props.opacity;
    let content = props.lines.join("\n");
    let label = format!("[ {} ]", props.label);

    element! {
        View(
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: faded(Theme::BORDER, opacity),
            background_color: faded(Theme::SURFACE, opacity),
            padding_left: Spacing::PANEL_PADDING,
            padding_right: Spacing::PANEL_PADDING,
        ) {
            Text(content: content, color: faded(Theme::TEXT, opacity))
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::Center) {
                Text(content: label, color: faded(props.accent, opacity), weight: Weight::Bold)
            }
        }
    }
}

/// Props for DoubleButtonRowView
#[derive(Default, Props)]
pub struct DoubleButtonRowViewProps {
    /// Pre-wrapped body lines.
    pub lines: Vec<String>,
    /// Left button title.
    pub left_label: String,
    /// Right button title.
    pub right_label: String,
    /// Accent color for both buttons.
    pub accent: Rgb,
    /// Combined surface and appear opacity.
    pub opacity: f32,
}

/// A text bubble with two action buttons side by side.
#[component]
pub fn DoubleButtonRowView(props: &DoubleButtonRowViewProps) -> impl Into<AnyElement<'static>> {
    let opacity = props.opacity;
    let content = props.lines.join("\n");
    let left = format!("[ {} ]", props.left_label);
    let right = format!("[ {} ]", props.right_label);

    element! {
        View(
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: faded(Theme::BORDER, opacity),
            background_color: faded(Theme::SURFACE, opacity),
            padding_left: Spacing::PANEL_PADDING,
            padding_right: Spacing::PANEL_PADDING,
        ) {
            Text(content: content, color: faded(Theme::TEXT, opacity))
            View(
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::Center,
                gap: Spacing::SM,
            ) {
                Text(content: left, color: faded(props.accent, opacity), weight: Weight::Bold)
                Text(content: right, color: faded(props.accent, opacity), weight: Weight::Bold)
            }
        }
    }
}

/// Props for BaseRowView
#[derive(Default, Props)]
pub struct BaseRowViewProps {
    /// Combined surface and appear opacity.
    pub opacity: f32,
}

/// The fallback bubble for blocks no renderer claims.
///
/// Nothing is bound to these rows, so the interior stays blank apart from a
/// muted marker.
#[component]
pub fn BaseRowView(props: &BaseRowViewProps) -> impl Into<AnyElement<'static>> {
    let opacity = props.opacity;

    element! {
        View(
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: faded(Theme::BORDER, opacity),
            padding_left: Spacing::PANEL_PADDING,
            padding_right: Spacing::PANEL_PADDING,
        ) {
            Text(content: Icons::ELLIPSIS, color: faded(Theme::TEXT_MUTED, opacity))
        }
    }
}
