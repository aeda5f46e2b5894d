//! # Demo Script
//!
//! The scripted conversation the shell plays through. Each step is a block
//! the feed presents in order; the mix deliberately covers every row type,
//! including one block kind no renderer claims.

use herald_app::{Block, ButtonSpec, FeedConfig, MotionConfig};

/// Display name of the scripted sender.
pub const AUTHOR_NAME: &str = "Mission Control";

/// A scripted sequence of feed blocks with a replay cursor.
#[derive(Clone, Debug)]
pub struct DemoScript {
    steps: Vec<Block>,
    cursor: usize,
}

impl DemoScript {
    /// The standard launch-brief conversation.
    pub fn standard() -> Self {
        Self {
            steps: standard_steps(),
            cursor: 0,
        }
    }

    /// One-letter badge label for the sender.
    pub fn author_initial(&self) -> String {
        AUTHOR_NAME.chars().take(1).collect()
    }

    /// Take the next scripted block, advancing the cursor.
    pub fn next(&mut self) -> Option<Block> {
        let block = self.steps.get(self.cursor).cloned();
        if block.is_some() {
            self.cursor += 1;
        }
        block
    }

    /// Steps not yet played.
    pub fn remaining(&self) -> usize {
        self.steps.len() - self.cursor
    }

    /// Whether every step has been played.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Rewind to the first step.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Total number of scripted steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the script has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

fn standard_steps() -> Vec<Block> {
    vec![
        Block::text("Welcome aboard. This feed is where mission updates land."),
        Block::text("Rows are pooled and recycled as updates arrive, so long sessions stay lean."),
        Block::button(
            "Confirm when you are strapped in.",
            ButtonSpec::new("Strapped in", "ack:harness"),
        ),
        Block::text("Telemetry is nominal. The weather hold is the only open risk."),
        Block::double_button(
            "Proceed with the launch window?",
            ButtonSpec::new("Go", "launch:go"),
            ButtonSpec::new("Hold", "launch:hold"),
        ),
        Block::unsupported("countdown-widget"),
        Block::text("That last update used a block kind this build does not render yet."),
        Block::text("End of the scripted brief. Press i to reply, or o and c to fade the feed."),
    ]
}

/// Feed configuration scaled to the shell's cell grid.
///
/// The core defaults describe a point-based host; on an 80x30 grid the
/// same ratios want single-digit gaps and a shallow seed height.
pub fn demo_config() -> FeedConfig {
    FeedConfig {
        width_ratio: 0.6,
        author_gap: 2.0,
        top_margin: 2.0,
        seed_height: 5.0,
        resting_bottom_gap: -1.0,
        chrome_height: 3.0,
        has_chrome: false,
        motion: MotionConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_script_plays_in_order() {
        let mut script = DemoScript::standard();
        let first = script.next();
        assert!(matches!(first, Some(Block::Text { .. })));
        assert_eq!(script.remaining(), script.len() - 1);

        // Drain the rest and count the variants the script promises.
        let mut buttons = 0;
        let mut doubles = 0;
        let mut unsupported = 0;
        while let Some(block) = script.next() {
            match block {
                Block::Button { .. } => buttons += 1,
                Block::DoubleButton { .. } => doubles += 1,
                Block::Unsupported { .. } => unsupported += 1,
                Block::Text { .. } => {}
            }
        }
        assert_eq!(buttons, 1);
        assert_eq!(doubles, 1);
        assert_eq!(unsupported, 1);
        assert!(script.is_exhausted());
    }

    #[test]
    fn test_exhausted_script_yields_none_until_reset() {
        let mut script = DemoScript::standard();
        while script.next().is_some() {}
        assert!(script.next().is_none());

        script.reset();
        assert_eq!(script.remaining(), script.len());
        assert!(script.next().is_some());
    }

    #[test]
    fn test_author_initial() {
        let script = DemoScript::standard();
        assert_eq!(script.author_initial(), "M");
    }

    #[test]
    fn test_demo_config_is_valid() {
        assert!(demo_config().validate().is_ok());
    }
}
