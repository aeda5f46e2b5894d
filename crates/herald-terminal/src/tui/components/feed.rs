//! # Feed Surface View
//!
//! Paints the floating feed at the frame the core's layout pass resolved.
//! Rows inside the visible window stack bottom-up; anything older is
//! clipped at the top edge.

use herald_app::measure::wrap_text;
use herald_app::rows::BUBBLE_CHROME_COLS;
use herald_app::{Block, Rgb, RowSnapshot, RowTag};
use iocraft::prelude::*;

use super::block_rows::{BaseRowView, ButtonRowView, DoubleButtonRowView, TextRowView};

/// Props for FeedView
#[derive(Default, Props)]
pub struct FeedViewProps {
    /// Rows inside the visible window, oldest first.
    pub rows: Vec<RowSnapshot>,
    /// Surface opacity from the open and close fades.
    pub opacity: f32,
    /// Grid column of the feed frame.
    pub x: u16,
    /// Grid row of the feed frame.
    pub y: u16,
    /// Frame width in columns.
    pub width: u16,
    /// Frame height in rows.
    pub height: u16,
    /// Accent color for action buttons.
    pub accent: Rgb,
}

/// The floating feed surface.
#[component]
pub fn FeedView(props: &FeedViewProps) -> impl Into<AnyElement<'static>> {
    if props.opacity <= 0.01 || props.height == 0 {
        return element! { View {} }.into_any();
    }

    let inner_width = usize::from(props.width)
        .saturating_sub(BUBBLE_CHROME_COLS)
        .max(1);
    let cells: Vec<AnyElement<'static>> = props
        .rows
        .iter()
        .map(|row| row_element(row, inner_width, props.accent, props.opacity))
        .collect();

    element! {
        View(
            position: Position::Absolute,
            top: props.y,
            left: props.x,
            width: props.width,
            height: props.height,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::FlexEnd,
            overflow: Overflow::Hidden,
        ) {
            #(cells)
        }
    }
    .into_any()
}

/// Render one row snapshot as its tag's bubble.
///
/// Body text is wrapped here with the same routine the core measures with,
/// so painted rows occupy exactly the height layout reserved for them.
fn row_element(
    row: &RowSnapshot,
    inner_width: usize,
    accent: Rgb,
    surface_opacity: f32,
) -> AnyElement<'static> {
    let opacity = surface_opacity * row.opacity;
    let body = row
        .block
        .as_ref()
        .and_then(Block::body)
        .unwrap_or_default();
    let lines = wrap_text(body, inner_width);

    match row.tag {
        RowTag::Text => element! {
            TextRowView(lines: lines, opacity: opacity)
        }
        .into_any(),
        RowTag::Button => {
            let label = match &row.block {
                Some(Block::Button { button, .. }) => button.title.clone(),
                _ => String::new(),
            };
            element! {
                ButtonRowView(lines: lines, label: label, accent: accent, opacity: opacity)
            }
            .into_any()
        }
        RowTag::DoubleButton => {
            let (left_label, right_label) = match &row.block {
                Some(Block::DoubleButton { left, right, .. }) => {
                    (left.title.clone(), right.title.clone())
                }
                _ => (String::new(), String::new()),
            };
            element! {
                DoubleButtonRowView(
                    lines: lines,
                    left_label: left_label,
                    right_label: right_label,
                    accent: accent,
                    opacity: opacity,
                )
            }
            .into_any()
        }
        RowTag::Base => element! {
            BaseRowView(opacity: opacity)
        }
        .into_any(),
    }
}
