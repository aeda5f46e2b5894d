//! Motion timelines
//!
//! Animations are modeled as tick-advanced timelines over a scalar value:
//! opacity for fades, scale for the bounce. A timeline is a chain of phases;
//! tick overflow carries across phase boundaries so a chained animation
//! (bounce) behaves the same at any tick rate. Timelines run to completion;
//! interruption policy belongs to the caller.

// ============================================================================
// Easing
// ============================================================================

/// Easing curves applied within a phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    /// Constant-rate interpolation.
    Linear,
    /// Slow start, slow end (cubic).
    #[default]
    EaseInOut,
}

impl Curve {
    /// Map linear progress `t` in `[0, 1]` through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

// ============================================================================
// Timeline
// ============================================================================

/// One leg of a timeline: interpolate `from` to `to` over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    /// Value at the start of the phase.
    pub from: f32,
    /// Value at the end of the phase.
    pub to: f32,
    /// Phase length in seconds; zero or negative finishes instantly.
    pub duration: f32,
}

impl Phase {
    /// Build a phase.
    pub const fn new(from: f32, to: f32, duration: f32) -> Self {
        Self { from, to, duration }
    }
}

/// A chain of phases advanced by tick deltas.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    phases: Vec<Phase>,
    curve: Curve,
    index: usize,
    elapsed: f32,
}

impl Timeline {
    /// Build a timeline from explicit phases.
    pub fn new(curve: Curve, phases: Vec<Phase>) -> Self {
        Self {
            phases,
            curve,
            index: 0,
            elapsed: 0.0,
        }
    }

    /// Single ease-in-out phase between two values.
    pub fn between(from: f32, to: f32, duration: f32) -> Self {
        Self::new(Curve::EaseInOut, vec![Phase::new(from, to, duration)])
    }

    /// Appear fade: opacity 0 to 1.
    pub fn fade_in(duration: f32) -> Self {
        Self::between(0.0, 1.0, duration)
    }

    /// Attention bounce: scale snaps to 0.6, overshoots to 1.2 over
    /// `phase_duration`, then settles back to 1.0 over the same span.
    /// The two phases are chained and run to completion.
    pub fn bounce(phase_duration: f32) -> Self {
        Self::new(
            Curve::EaseInOut,
            vec![
                Phase::new(0.6, 1.2, phase_duration),
                Phase::new(1.2, 1.0, phase_duration),
            ],
        )
    }

    /// Advance by `dt` seconds, carrying overflow across phase boundaries.
    /// Returns `true` once the timeline has finished.
    pub fn advance(&mut self, dt: f32) -> bool {
        let mut remaining = dt.max(0.0);
        while self.index < self.phases.len() {
            let left = (self.phases[self.index].duration - self.elapsed).max(0.0);
            if remaining < left {
                self.elapsed += remaining;
                return false;
            }
            remaining -= left;
            self.index += 1;
            self.elapsed = 0.0;
        }
        true
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        match self.phases.get(self.index) {
            Some(phase) => {
                let progress = if phase.duration > 0.0 {
                    self.elapsed / phase.duration
                } else {
                    1.0
                };
                phase.from + (phase.to - phase.from) * self.curve.apply(progress)
            }
            None => self.target(),
        }
    }

    /// Final value once every phase has run.
    pub fn target(&self) -> f32 {
        self.phases.last().map(|phase| phase.to).unwrap_or(0.0)
    }

    /// Whether every phase has run to completion.
    pub fn is_finished(&self) -> bool {
        self.index >= self.phases.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_curve_endpoints() {
        for curve in [Curve::Linear, Curve::EaseInOut] {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
        }
        // Clamped outside the unit interval.
        assert_eq!(Curve::EaseInOut.apply(-1.0), 0.0);
        assert_eq!(Curve::EaseInOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_single_phase_runs_to_target() {
        let mut fade = Timeline::fade_in(0.3);
        assert_eq!(fade.value(), 0.0);
        assert!(!fade.advance(0.15));
        assert!(fade.value() > 0.0 && fade.value() < 1.0);
        assert!(fade.advance(0.15));
        assert!(fade.is_finished());
        assert_eq!(fade.value(), 1.0);
    }

    #[test]
    fn test_bounce_phases_chain() {
        let mut bounce = Timeline::bounce(0.3);
        // Starts at the snapped-down scale.
        assert!((bounce.value() - 0.6).abs() < f32::EPSILON);
        bounce.advance(0.3);
        // Phase boundary: at the overshoot peak.
        assert!((bounce.value() - 1.2).abs() < 1e-4);
        bounce.advance(0.3);
        assert!(bounce.is_finished());
        assert_eq!(bounce.value(), 1.0);
    }

    #[test]
    fn test_overflow_carries_across_phases() {
        let mut bounce = Timeline::bounce(0.3);
        // One oversized tick lands 0.05s into the second phase.
        assert!(!bounce.advance(0.35));
        let expected = 1.2 + (1.0 - 1.2) * Curve::EaseInOut.apply(0.05 / 0.3);
        assert!((bounce.value() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_zero_duration_finishes_instantly() {
        let mut fade = Timeline::between(0.0, 1.0, 0.0);
        assert!(fade.advance(0.0));
        assert_eq!(fade.value(), 1.0);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut fade = Timeline::fade_in(0.3);
        assert!(!fade.advance(-1.0));
        assert_eq!(fade.value(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_timeline_reaches_target(
            from in -10.0f32..10.0,
            to in -10.0f32..10.0,
            duration in 0.0f32..5.0,
            dt in 0.001f32..0.5,
        ) {
            let mut timeline = Timeline::between(from, to, duration);
            let mut guard = 0;
            while !timeline.advance(dt) {
                guard += 1;
                prop_assert!(guard < 100_000);
            }
            prop_assert_eq!(timeline.value(), to);
        }

        #[test]
        fn prop_value_stays_between_phase_bounds(
            progress in 0.0f32..1.0,
        ) {
            let eased = Curve::EaseInOut.apply(progress);
            prop_assert!((0.0..=1.0).contains(&eased));
        }
    }
}
