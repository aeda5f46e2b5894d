//! # App Shell
//!
//! The fullscreen iocraft component hosting the feed. A 30fps ticker
//! drives the session's pump/layout/tick frame, and key presses map to
//! session commands.

use std::sync::Arc;
use std::time::Duration;

use herald_app::{FeedConfig, Rgb, RowSnapshot};
use iocraft::prelude::*;
use parking_lot::Mutex;

use crate::tui::components::{AuthorBadge, Composer, FeedView, HintBar, KeyHint};
use crate::tui::dim;
use crate::tui::session::{FeedSession, SessionCommand};
use crate::tui::theme::{solid, Icons, Theme};

/// Frame interval for the motion ticker.
const TICK_MILLIS: u64 = 33;

/// Map a key press to a session command.
///
/// While the reply bar is focused it captures all input; otherwise keys
/// act on the feed. `q` is handled by the shell itself.
fn command_for(code: KeyCode, composer_focused: bool) -> Option<SessionCommand> {
    if composer_focused {
        return match code {
            KeyCode::Esc => Some(SessionCommand::BlurComposer),
            KeyCode::Enter => Some(SessionCommand::Submit),
            KeyCode::Backspace => Some(SessionCommand::ComposerBackspace),
            KeyCode::Char(c) => Some(SessionCommand::ComposerChar(c)),
            _ => None,
        };
    }
    match code {
        KeyCode::Char('i') => Some(SessionCommand::FocusComposer),
        KeyCode::Char('k') | KeyCode::Up => Some(SessionCommand::ScrollOlder),
        KeyCode::Char('j') | KeyCode::Down => Some(SessionCommand::ScrollNewer),
        KeyCode::Enter | KeyCode::Char('n') => Some(SessionCommand::Advance),
        KeyCode::Char('o') => Some(SessionCommand::Open),
        KeyCode::Char('c') => Some(SessionCommand::Close),
        KeyCode::Char('b') => Some(SessionCommand::Bounce),
        KeyCode::Char('r') => Some(SessionCommand::Reset),
        _ => None,
    }
}

/// Props for HeraldApp
#[derive(Default, Props)]
pub struct HeraldAppProps {
    /// Shared session state; the run loop always supplies it.
    pub session: Option<Arc<Mutex<FeedSession>>>,
}

/// The fullscreen feed shell.
#[component]
pub fn HeraldApp(props: &HeraldAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let session = match props.session.clone() {
        Some(session) => session,
        None => return element! { View {} }.into_any(),
    };

    let version = hooks.use_state(|| 0usize);
    let should_exit = hooks.use_state(|| false);
    let mut system = hooks.use_context_mut::<SystemContext>();

    // Motion ticker: drain keyboard events, lay out, advance fades, repaint.
    hooks.use_future({
        let session = Arc::clone(&session);
        let mut version = version.clone();
        async move {
            loop {
                tokio::time::sleep(Duration::from_millis(TICK_MILLIS)).await;
                session.lock().advance(TICK_MILLIS as f32 / 1000.0);
                version.set(version.get().wrapping_add(1));
            }
        }
    });

    hooks.use_terminal_events({
        let session = Arc::clone(&session);
        let mut version = version.clone();
        let mut should_exit = should_exit.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                let focused = session.lock().is_composer_focused();
                if code == KeyCode::Char('q') && !focused {
                    should_exit.set(true);
                } else if let Some(command) = command_for(code, focused) {
                    if session.lock().apply(command) {
                        version.set(version.get().wrapping_add(1));
                    }
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let view = session.lock().view();
    let snapshot = view.snapshot;

    let feed_x = snapshot.frame.x.max(0.0).round() as u16;
    let feed_y = snapshot.frame.y.max(0.0).round() as u16;
    let feed_width = snapshot.frame.width.max(0.0).round() as u16;
    let feed_height = snapshot.frame.height.max(0.0).round() as u16;
    let window_rows: Vec<RowSnapshot> = snapshot.rows[snapshot.window.clone()].to_vec();

    let badge_x = view.badge_frame.x.max(0.0).round() as u16;
    let badge_y = view.badge_frame.y.max(0.0).round() as u16;
    let badge_width = view.badge_frame.width.max(0.0).round() as u16;
    let badge_height = view.badge_frame.height.max(0.0).round() as u16;

    let hints = if view.composer_focused {
        vec![KeyHint::new("Esc", "Done"), KeyHint::new("Enter", "Send")]
    } else {
        vec![
            KeyHint::new("i", "Reply"),
            KeyHint::new("Enter", "Next"),
            KeyHint::new("j/k", "Scroll"),
            KeyHint::new("o/c", "Fade"),
            KeyHint::new("b", "Bounce"),
            KeyHint::new("q", "Quit"),
        ]
    };
    let status = if snapshot.scroll_offset > 0 {
        format!("{} newer below", snapshot.scroll_offset)
    } else {
        format!(
            "rows {} {} pool {}+{}",
            snapshot.rows.len(),
            Icons::BULLET,
            view.stats.created,
            view.stats.reused,
        )
    };

    element! {
        View(
            width: dim::TOTAL_WIDTH,
            height: dim::TOTAL_HEIGHT,
            flex_direction: FlexDirection::Column,
            background_color: solid(Theme::BG),
        ) {
            View(width: dim::TOTAL_WIDTH, height: dim::STAGE_REGION) {
                FeedView(
                    rows: window_rows,
                    opacity: snapshot.opacity,
                    x: feed_x,
                    y: feed_y,
                    width: feed_width,
                    height: feed_height,
                    accent: view.accent,
                )
                AuthorBadge(
                    initial: view.author_initial,
                    accent: view.accent,
                    scale: view.badge_scale,
                    x: badge_x,
                    y: badge_y,
                    width: badge_width,
                    height: badge_height,
                )
                Composer(value: view.composer, focused: view.composer_focused)
            }
            HintBar(hints: hints, status: status)
        }
    }
    .into_any()
}

/// Run the feed shell fullscreen until the user quits.
pub async fn run(config: FeedConfig, accent: Rgb) -> anyhow::Result<()> {
    let session = Arc::new(Mutex::new(FeedSession::new(config, accent)?));
    element! { HeraldApp(session: Some(session)) }
        .fullscreen()
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_keys_map_to_commands() {
        assert_eq!(
            command_for(KeyCode::Char('i'), false),
            Some(SessionCommand::FocusComposer)
        );
        assert_eq!(
            command_for(KeyCode::Char('k'), false),
            Some(SessionCommand::ScrollOlder)
        );
        assert_eq!(
            command_for(KeyCode::Enter, false),
            Some(SessionCommand::Advance)
        );
        assert_eq!(command_for(KeyCode::Char('z'), false), None);
    }

    #[test]
    fn test_focused_composer_captures_input() {
        assert_eq!(
            command_for(KeyCode::Char('i'), true),
            Some(SessionCommand::ComposerChar('i'))
        );
        assert_eq!(
            command_for(KeyCode::Esc, true),
            Some(SessionCommand::BlurComposer)
        );
        assert_eq!(
            command_for(KeyCode::Enter, true),
            Some(SessionCommand::Submit)
        );
        assert_eq!(command_for(KeyCode::Tab, true), None);
    }
}
