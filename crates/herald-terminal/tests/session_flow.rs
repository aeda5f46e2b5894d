#![allow(missing_docs, dead_code, clippy::unwrap_used, clippy::expect_used, clippy::all)]
//! # Feed Session Flow Tests
//!
//! Deterministic shell flows driven entirely through `SessionCommand`,
//! with no terminal attached. Geometry numbers assume the 80x30 demo
//! canvas: a 48-column feed anchored 2 columns left of the badge, resting
//! one row above the badge's bottom edge.

use herald_app::RowTag;
use herald_terminal::demo::demo_config;
use herald_terminal::tui::{FeedSession, SessionCommand, KEYBOARD_RISE};

const ACCENT: herald_app::Rgb = herald_app::Rgb::new(0xE8, 0x4A, 0x3D);

fn session() -> FeedSession {
    FeedSession::new(demo_config(), ACCENT).expect("demo config is valid")
}

/// Advance in small steps to settle all running fades.
fn settle(session: &mut FeedSession, secs: f32) {
    let mut remaining = secs;
    while remaining > 0.0 {
        session.advance(0.05);
        remaining -= 0.05;
    }
}

#[test]
fn test_launch_geometry() {
    let mut session = session();
    session.advance(0.0);

    let frame = session.view().snapshot.frame;
    // 60% of the 80-column stage, anchored left of the badge at x=72.
    assert!((frame.width - 48.0).abs() < 1e-3);
    assert!((frame.x - 22.0).abs() < 1e-3);
    // One greeting row: two wrapped lines plus bubble chrome.
    assert!((frame.height - 4.0).abs() < f32::EPSILON);
    // Resting one row above the badge bottom (25 - 1).
    assert!((frame.max_y() - 24.0).abs() < f32::EPSILON);
}

#[test]
fn test_open_fade_reaches_full_opacity() {
    let mut session = session();
    assert!(session.view().snapshot.opacity < 0.01);

    settle(&mut session, 0.5);
    let halfway = session.view().snapshot.opacity;
    assert!(halfway > 0.1 && halfway < 0.9);

    settle(&mut session, 1.0);
    assert!((session.view().snapshot.opacity - 1.0).abs() < 1e-6);
    assert!(!session.surface().is_transitioning());
}

#[test]
fn test_keyboard_session_lifts_and_restores() {
    let mut session = session();
    // Build up a few rows, then scroll away from the newest.
    session.apply(SessionCommand::Advance);
    session.apply(SessionCommand::Advance);
    session.advance(0.0);
    assert!(session.apply(SessionCommand::ScrollOlder));
    assert_eq!(session.view().snapshot.scroll_offset, 1);

    // Focus lifts the feed by the full keyboard rise and snaps the feed
    // back to the newest row on the next layout pass.
    assert!(session.apply(SessionCommand::FocusComposer));
    session.advance(0.0);
    let view = session.view();
    assert!(view.snapshot.keyboard_visible);
    assert!((view.snapshot.bottom_gap + KEYBOARD_RISE).abs() < f32::EPSILON);
    assert!((view.snapshot.frame.max_y() - (25.0 - KEYBOARD_RISE)).abs() < f32::EPSILON);
    assert_eq!(view.snapshot.scroll_offset, 0);

    // Blur restores the resting gap.
    assert!(session.apply(SessionCommand::BlurComposer));
    session.advance(0.0);
    let view = session.view();
    assert!(!view.snapshot.keyboard_visible);
    assert!((view.snapshot.bottom_gap + 1.0).abs() < f32::EPSILON);
    assert!((view.snapshot.frame.max_y() - 24.0).abs() < f32::EPSILON);
}

#[test]
fn test_chrome_credits_reply_bar_height() {
    let mut config = demo_config();
    config.has_chrome = true;
    let mut session = FeedSession::new(config, ACCENT).expect("config is valid");

    session.apply(SessionCommand::FocusComposer);
    session.advance(0.0);
    let view = session.view();
    // The 3-row reply bar was already on screen, so only the key deck
    // counts against the feed.
    assert!((view.snapshot.bottom_gap + (KEYBOARD_RISE - 3.0)).abs() < f32::EPSILON);
    assert!((view.snapshot.frame.max_y() - 21.0).abs() < f32::EPSILON);
}

#[test]
fn test_replies_interleave_with_script() {
    let mut session = session();
    assert!(session.apply(SessionCommand::FocusComposer));
    for c in "all systems go".chars() {
        session.apply(SessionCommand::ComposerChar(c));
    }
    assert!(session.apply(SessionCommand::Submit));
    assert!(session.composer().is_empty());

    assert!(session.apply(SessionCommand::BlurComposer));
    assert!(session.apply(SessionCommand::Advance));
    assert!(session.apply(SessionCommand::Advance));
    session.advance(0.0);

    let rows = session.view().snapshot.rows;
    let tags: Vec<RowTag> = rows.iter().map(|row| row.tag).collect();
    // Seeded greeting, the typed reply, then the next two scripted steps.
    assert_eq!(
        tags,
        vec![RowTag::Text, RowTag::Text, RowTag::Text, RowTag::Button]
    );
    assert_eq!(
        rows[1].block.as_ref().and_then(|block| block.body()),
        Some("all systems go")
    );
}

#[test]
fn test_full_script_tags_and_window() {
    let mut session = session();
    while session.apply(SessionCommand::Advance) {}
    session.advance(0.0);

    let snapshot = session.view().snapshot;
    let tags: Vec<RowTag> = snapshot.rows.iter().map(|row| row.tag).collect();
    assert_eq!(
        tags,
        vec![
            RowTag::Text,
            RowTag::Text,
            RowTag::Button,
            RowTag::Text,
            RowTag::DoubleButton,
            RowTag::Base,
            RowTag::Text,
            RowTag::Text,
        ]
    );
    // The unclaimed block renders a base row with nothing bound.
    assert!(snapshot.rows[5].block.is_none());

    // Content overflows the stage, so the frame clamps to the top margin
    // and the window keeps only what fits, newest first.
    assert!((snapshot.frame.y - 2.0).abs() < f32::EPSILON);
    assert!((snapshot.frame.height - 22.0).abs() < f32::EPSILON);
    let window_height: f32 = snapshot.rows[snapshot.window.clone()]
        .iter()
        .map(|row| row.height)
        .sum();
    assert!(window_height <= snapshot.frame.height + f32::EPSILON);
    assert_eq!(snapshot.window.end, snapshot.rows.len());
}

#[test]
fn test_close_interrupts_open_fade() {
    let mut session = session();
    settle(&mut session, 0.5);
    let interrupted = session.view().snapshot.opacity;
    assert!(interrupted > 0.1 && interrupted < 0.9);

    assert!(session.apply(SessionCommand::Close));
    session.advance(0.05);
    // The close fade starts from the interrupted opacity, not from full.
    assert!(session.view().snapshot.opacity <= interrupted + 1e-3);

    settle(&mut session, 1.2);
    assert!(session.view().snapshot.opacity.abs() < 1e-6);
}

#[test]
fn test_reset_replays_script_through_the_pool() {
    let mut session = session();
    session.apply(SessionCommand::Advance);
    session.apply(SessionCommand::Advance);
    session.apply(SessionCommand::Advance);
    session.advance(0.0);
    assert_eq!(session.surface().row_count(), 4);

    assert!(session.apply(SessionCommand::Reset));
    session.advance(0.0);
    // Reset reseeds the greeting; its row comes back from the free list.
    assert_eq!(session.surface().row_count(), 1);
    let stats = session.view().stats;
    assert!(stats.reused >= 1);

    // The script replays from the top.
    assert!(session.apply(SessionCommand::Advance));
    session.advance(0.0);
    let tags: Vec<RowTag> = session
        .view()
        .snapshot
        .rows
        .iter()
        .map(|row| row.tag)
        .collect();
    assert_eq!(tags, vec![RowTag::Text, RowTag::Text]);
}

#[test]
fn test_scroll_commands_clamp_at_both_ends() {
    let mut session = session();
    session.advance(0.0);
    // A single row cannot scroll anywhere.
    assert!(!session.apply(SessionCommand::ScrollOlder));
    assert!(!session.apply(SessionCommand::ScrollNewer));

    session.apply(SessionCommand::Advance);
    session.apply(SessionCommand::Advance);
    session.advance(0.0);
    assert!(session.apply(SessionCommand::ScrollOlder));
    assert!(session.apply(SessionCommand::ScrollOlder));
    // Offset is capped one short of the row count.
    assert!(!session.apply(SessionCommand::ScrollOlder));
    assert_eq!(session.view().snapshot.scroll_offset, 2);

    assert!(session.apply(SessionCommand::ScrollNewer));
    assert!(session.apply(SessionCommand::ScrollNewer));
    assert!(!session.apply(SessionCommand::ScrollNewer));
    assert_eq!(session.view().snapshot.scroll_offset, 0);
}

#[test]
fn test_exhausted_script_reports_no_change() {
    let mut session = session();
    while session.apply(SessionCommand::Advance) {}
    assert!(!session.apply(SessionCommand::Advance));
    assert!(!session.apply(SessionCommand::Submit));
    assert_eq!(session.view().script_remaining, 0);
}
