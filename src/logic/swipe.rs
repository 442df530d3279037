//! Swipe classification
//!
//! Pure functions that turn a horizontal drag displacement into a decision,
//! plus the derived feedback values (overlay intensities and tilt) that the
//! card renderer uses. Only `dx` takes part in the decision.

use crate::api::Decision;

/// Default share of the viewport width a drag must cover to commit
pub const DEFAULT_THRESHOLD_RATIO: f32 = 0.25;

/// Maximum card tilt in degrees, reached at half the viewport width
pub const MAX_TILT_DEGREES: f32 = 10.0;

/// Result of classifying a released drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Accept,
    Reject,
    Reset,
}

impl SwipeOutcome {
    /// The committed decision, if this outcome commits one
    pub fn decision(self) -> Option<Decision> {
        match self {
            SwipeOutcome::Accept => Some(Decision::Accept),
            SwipeOutcome::Reject => Some(Decision::Reject),
            SwipeOutcome::Reset => None,
        }
    }
}

/// Minimum |dx| that commits a decision
///
/// # Examples
/// ```
/// use nexttui::logic::swipe::swipe_threshold;
///
/// assert_eq!(swipe_threshold(400.0, 0.25), 100.0);
/// assert_eq!(swipe_threshold(80.0, 0.25), 20.0);
/// ```
pub fn swipe_threshold(viewport_width: f32, ratio: f32) -> f32 {
    viewport_width.max(0.0) * ratio
}

/// Classify a release at horizontal displacement `dx`
///
/// Both boundaries are inclusive. A non-positive threshold means the viewport
/// has no width yet, and every release resets.
///
/// # Examples
/// ```
/// use nexttui::logic::swipe::{classify_release, SwipeOutcome};
///
/// assert_eq!(classify_release(100.0, 100.0), SwipeOutcome::Accept);
/// assert_eq!(classify_release(-100.0, 100.0), SwipeOutcome::Reject);
/// assert_eq!(classify_release(99.9, 100.0), SwipeOutcome::Reset);
/// ```
pub fn classify_release(dx: f32, threshold: f32) -> SwipeOutcome {
    if !(threshold > 0.0) || !dx.is_finite() {
        return SwipeOutcome::Reset;
    }

    if dx >= threshold {
        SwipeOutcome::Accept
    } else if dx <= -threshold {
        SwipeOutcome::Reject
    } else {
        SwipeOutcome::Reset
    }
}

/// Opacity of the "like" overlay: 0 at center, 1 at a quarter viewport right
pub fn accept_intensity(dx: f32, viewport_width: f32) -> f32 {
    let span = viewport_width / 4.0;
    if span <= 0.0 {
        return 0.0;
    }
    (dx / span).clamp(0.0, 1.0)
}

/// Opacity of the "nope" overlay: 0 at center, 1 at a quarter viewport left
pub fn reject_intensity(dx: f32, viewport_width: f32) -> f32 {
    let span = viewport_width / 4.0;
    if span <= 0.0 {
        return 0.0;
    }
    (-dx / span).clamp(0.0, 1.0)
}

/// Card tilt in degrees, linear over ±half the viewport and clamped beyond
pub fn tilt_degrees(dx: f32, viewport_width: f32) -> f32 {
    let half = viewport_width / 2.0;
    if half <= 0.0 {
        return 0.0;
    }
    (dx / half).clamp(-1.0, 1.0) * MAX_TILT_DEGREES
}

/// Horizontal position a committed card flies out to
pub fn exit_target(decision: Decision, viewport_width: f32) -> f32 {
    match decision {
        Decision::Accept => viewport_width,
        Decision::Reject => -viewport_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 400.0;

    fn threshold() -> f32 {
        swipe_threshold(WIDTH, DEFAULT_THRESHOLD_RATIO)
    }

    #[test]
    fn test_viewport_400_scenario() {
        assert_eq!(threshold(), 100.0);
        assert_eq!(classify_release(90.0, threshold()), SwipeOutcome::Reset);
        assert_eq!(classify_release(100.0, threshold()), SwipeOutcome::Accept);
        assert_eq!(classify_release(150.0, threshold()), SwipeOutcome::Accept);
        assert_eq!(classify_release(-101.0, threshold()), SwipeOutcome::Reject);
    }

    #[test]
    fn test_reject_boundary_inclusive() {
        assert_eq!(classify_release(-100.0, threshold()), SwipeOutcome::Reject);
        assert_eq!(classify_release(-99.0, threshold()), SwipeOutcome::Reset);
    }

    #[test]
    fn test_sweep_matches_rule() {
        let t = threshold();
        let mut dx = -WIDTH;
        while dx <= WIDTH {
            let expected = if dx >= t {
                SwipeOutcome::Accept
            } else if dx <= -t {
                SwipeOutcome::Reject
            } else {
                SwipeOutcome::Reset
            };
            assert_eq!(classify_release(dx, t), expected, "dx = {}", dx);
            dx += 0.5;
        }
    }

    #[test]
    fn test_zero_width_viewport_always_resets() {
        let t = swipe_threshold(0.0, DEFAULT_THRESHOLD_RATIO);
        assert_eq!(classify_release(0.0, t), SwipeOutcome::Reset);
        assert_eq!(classify_release(500.0, t), SwipeOutcome::Reset);
        assert_eq!(classify_release(-500.0, t), SwipeOutcome::Reset);
    }

    #[test]
    fn test_non_finite_displacement_resets() {
        assert_eq!(classify_release(f32::NAN, threshold()), SwipeOutcome::Reset);
        assert_eq!(classify_release(f32::INFINITY, threshold()), SwipeOutcome::Reset);
    }

    #[test]
    fn test_outcome_decision_mapping() {
        assert_eq!(SwipeOutcome::Accept.decision(), Some(Decision::Accept));
        assert_eq!(SwipeOutcome::Reject.decision(), Some(Decision::Reject));
        assert_eq!(SwipeOutcome::Reset.decision(), None);
    }

    #[test]
    fn test_intensities_are_clamped_and_one_sided() {
        assert_eq!(accept_intensity(0.0, WIDTH), 0.0);
        assert_eq!(accept_intensity(50.0, WIDTH), 0.5);
        assert_eq!(accept_intensity(100.0, WIDTH), 1.0);
        assert_eq!(accept_intensity(300.0, WIDTH), 1.0);
        assert_eq!(accept_intensity(-50.0, WIDTH), 0.0);

        assert_eq!(reject_intensity(-50.0, WIDTH), 0.5);
        assert_eq!(reject_intensity(-300.0, WIDTH), 1.0);
        assert_eq!(reject_intensity(50.0, WIDTH), 0.0);
    }

    #[test]
    fn test_intensities_with_zero_width() {
        assert_eq!(accept_intensity(10.0, 0.0), 0.0);
        assert_eq!(reject_intensity(-10.0, 0.0), 0.0);
    }

    #[test]
    fn test_tilt() {
        assert_eq!(tilt_degrees(0.0, WIDTH), 0.0);
        assert_eq!(tilt_degrees(100.0, WIDTH), 5.0);
        assert_eq!(tilt_degrees(200.0, WIDTH), 10.0);
        assert_eq!(tilt_degrees(-1000.0, WIDTH), -10.0);
    }

    #[test]
    fn test_exit_target() {
        assert_eq!(exit_target(Decision::Accept, WIDTH), WIDTH);
        assert_eq!(exit_target(Decision::Reject, WIDTH), -WIDTH);
    }
}
