//! Feed configuration
//!
//! Geometry constants and motion durations, loadable from TOML. Defaults
//! are the canonical layout constants; hosts working in other units (for
//! example terminal cells) load a scaled config instead of redefining them.

use crate::error::{FeedError, Result};
use serde::{Deserialize, Serialize};

/// Motion durations in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Open/close visibility fade length.
    pub transition_secs: f32,
    /// Appear fade for freshly inserted rows.
    pub appear_secs: f32,
    /// Length of each of the two bounce phases.
    pub bounce_secs: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            transition_secs: 1.0,
            appear_secs: 0.3,
            bounce_secs: 0.3,
        }
    }
}

/// Feed surface geometry and motion settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    /// Surface width as a fraction of the container width.
    pub width_ratio: f32,
    /// Gap between the surface's trailing edge and the author's leading edge.
    pub author_gap: f32,
    /// Minimum space kept between the surface top and the container top.
    pub top_margin: f32,
    /// Height used until content exists; yields to measured content.
    pub seed_height: f32,
    /// Bottom gap to the author's bottom edge while the keyboard is hidden.
    pub resting_bottom_gap: f32,
    /// Vertical space a bottom chrome bar occupies, when present.
    pub chrome_height: f32,
    /// Whether the host shows bottom chrome the keyboard slides over.
    pub has_chrome: bool,
    /// Motion durations.
    pub motion: MotionConfig,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            width_ratio: 0.6,
            author_gap: 6.0,
            top_margin: 20.0,
            seed_height: 44.0,
            resting_bottom_gap: -10.0,
            chrome_height: 44.0,
            has_chrome: false,
            motion: MotionConfig::default(),
        }
    }
}

impl FeedConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(input).map_err(|err| FeedError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        if !(self.width_ratio > 0.0 && self.width_ratio <= 1.0) {
            return Err(FeedError::Config(format!(
                "width_ratio must be in (0, 1], got {}",
                self.width_ratio
            )));
        }
        for (name, value) in [
            ("author_gap", self.author_gap),
            ("top_margin", self.top_margin),
            ("seed_height", self.seed_height),
            ("chrome_height", self.chrome_height),
            ("motion.transition_secs", self.motion.transition_secs),
            ("motion.appear_secs", self.motion.appear_secs),
            ("motion.bounce_secs", self.motion.bounce_secs),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FeedError::Config(format!(
                    "{name} must be a non-negative finite number, got {value}"
                )));
            }
        }
        if !self.resting_bottom_gap.is_finite() {
            return Err(FeedError::Config(format!(
                "resting_bottom_gap must be finite, got {}",
                self.resting_bottom_gap
            )));
        }
        Ok(())
    }

    /// Keyboard height deduction when chrome sits under the keyboard.
    pub fn chrome_allowance(&self) -> f32 {
        if self.has_chrome {
            self.chrome_height
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_canonical() {
        let config = FeedConfig::default();
        assert_eq!(config.width_ratio, 0.6);
        assert_eq!(config.author_gap, 6.0);
        assert_eq!(config.top_margin, 20.0);
        assert_eq!(config.seed_height, 44.0);
        assert_eq!(config.resting_bottom_gap, -10.0);
        assert_eq!(config.chrome_height, 44.0);
        assert!(!config.has_chrome);
        assert_eq!(config.motion.transition_secs, 1.0);
        assert_eq!(config.motion.appear_secs, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_overrides_defaults() {
        let config = FeedConfig::from_toml_str(
            r#"
            width_ratio = 0.5
            has_chrome = true

            [motion]
            transition_secs = 0.25
            "#,
        )
        .expect("valid config");
        assert_eq!(config.width_ratio, 0.5);
        assert!(config.has_chrome);
        assert_eq!(config.motion.transition_secs, 0.25);
        // Untouched fields keep their defaults.
        assert_eq!(config.seed_height, 44.0);
        assert_eq!(config.motion.appear_secs, 0.3);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = FeedConfig::from_toml_str("sidebar_width = 3").unwrap_err();
        assert!(matches!(err, FeedError::Config(_)));
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        assert!(FeedConfig::from_toml_str("width_ratio = 0.0").is_err());
        assert!(FeedConfig::from_toml_str("width_ratio = 1.5").is_err());
        assert!(FeedConfig::from_toml_str("author_gap = -1.0").is_err());
        assert!(FeedConfig::from_toml_str("[motion]\nappear_secs = -0.1").is_err());
    }

    #[test]
    fn test_chrome_allowance_follows_flag() {
        let mut config = FeedConfig::default();
        assert_eq!(config.chrome_allowance(), 0.0);
        config.has_chrome = true;
        assert_eq!(config.chrome_allowance(), 44.0);
    }
}
