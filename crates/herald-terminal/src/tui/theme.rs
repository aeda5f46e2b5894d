//! # Herald Theme
//!
//! Centralized palette and spacing constants for the feed shell.
//!
//! Colors are stored as [`Rgb`] values rather than terminal colors so the
//! open/close and appear fades can scale channels before crossing into the
//! terminal's color type. Use [`solid`] for full-opacity paint and [`faded`]
//! wherever a surface or row opacity applies.

use herald_app::Rgb;
use iocraft::prelude::*;

/// Color palette for the feed shell.
pub struct Theme;

impl Theme {
    /// Backdrop behind the stage.
    pub const BG: Rgb = Rgb::new(0x14, 0x14, 0x1A);
    /// Bubble interior.
    pub const SURFACE: Rgb = Rgb::new(0x23, 0x26, 0x2E);
    /// Primary text.
    pub const TEXT: Rgb = Rgb::new(0xE8, 0xEA, 0xF0);
    /// Secondary text (hints, timestamps, placeholders).
    pub const TEXT_MUTED: Rgb = Rgb::new(0x8A, 0x91, 0x9E);
    /// Default accent for buttons and the author badge.
    pub const ACCENT: Rgb = Rgb::new(0xE8, 0x4A, 0x3D);
    /// Bubble and panel borders.
    pub const BORDER: Rgb = Rgb::new(0x3A, 0x3F, 0x4A);
    /// Border for the focused reply bar.
    pub const BORDER_FOCUS: Rgb = Rgb::new(0x5C, 0x8D, 0xC8);
    /// Key deck interior while the keyboard is up.
    pub const DECK: Rgb = Rgb::new(0x1C, 0x1F, 0x26);
}

/// Spacing constants for consistent component layout.
pub struct Spacing;

impl Spacing {
    /// Extra small gap.
    pub const XS: u32 = 1;
    /// Small gap.
    pub const SM: u32 = 2;
    /// Medium gap.
    pub const MD: u32 = 3;
    /// Padding inside bubbles and panels.
    pub const PANEL_PADDING: u32 = 1;
}

/// Unicode icons for UI elements (no emoji).
pub struct Icons;

impl Icons {
    /// Prompt marker for the reply bar.
    pub const PROMPT: &'static str = "\u{276F}"; // ❯
    /// Separator dot for the hint bar.
    pub const BULLET: &'static str = "\u{2022}"; // •
    /// Ellipsis shown in rows nothing is bound to.
    pub const ELLIPSIS: &'static str = "\u{2026}"; // …
}

// =============================================================================
// Styling Helpers
// =============================================================================

/// Paint a palette color at full opacity.
#[inline]
pub fn solid(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Paint a palette color scaled by an opacity in `[0, 1]`.
///
/// Terminals have no alpha channel, so fading darkens toward the backdrop.
#[inline]
pub fn faded(color: Rgb, opacity: f32) -> Color {
    solid(color.scaled(opacity))
}

/// Get border color based on focus state.
#[inline]
pub fn focus_border_color(focused: bool) -> Color {
    if focused {
        solid(Theme::BORDER_FOCUS)
    } else {
        solid(Theme::BORDER)
    }
}
