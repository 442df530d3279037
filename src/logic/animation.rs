//! Card animation curves
//!
//! - `Tween`: fixed-duration eased move, used for the commit fly-out
//! - `Spring`: damped spring back to the origin, used for the snap-back
//!
//! Both are driven by `Instant`s passed in by the caller so they can be
//! stepped deterministically in tests.

use std::time::{Duration, Instant};

/// Default spring stiffness
pub const DEFAULT_SPRING_TENSION: f32 = 40.0;

/// Default spring damping; low enough to overshoot once or twice
pub const DEFAULT_SPRING_FRICTION: f32 = 5.0;

/// Stiffest spring the fixed integration step stays stable for
pub const MAX_SPRING_TENSION: f32 = 10_000.0;

/// A spring still moving after this long is snapped to rest
const SPRING_SETTLE_DEADLINE: Duration = Duration::from_secs(4);

/// Integration step for the spring
const SPRING_STEP: Duration = Duration::from_millis(1);

/// Gaps longer than this snap the spring to rest instead of simulating
const MAX_SPRING_GAP: Duration = Duration::from_secs(1);

/// Spring is at rest once both displacement and speed drop below these
const REST_DISPLACEMENT: f32 = 0.05;
const REST_SPEED: f32 = 0.05;

/// Ease-in-out (quadratic) on t in [0, 1]
///
/// # Examples
/// ```
/// use nexttui::logic::animation::ease_in_out;
///
/// assert_eq!(ease_in_out(0.0), 0.0);
/// assert_eq!(ease_in_out(0.5), 0.5);
/// assert_eq!(ease_in_out(1.0), 1.0);
/// ```
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Eased move between two points over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: (f32, f32),
    to: (f32, f32),
    started_at: Instant,
    duration: Duration,
}

impl Tween {
    pub fn new(from: (f32, f32), to: (f32, f32), started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: Instant) -> (f32, f32) {
        let k = ease_in_out(self.progress(now));
        (
            self.from.0 + (self.to.0 - self.from.0) * k,
            self.from.1 + (self.to.1 - self.from.1) * k,
        )
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

/// Damped spring pulling a 2D position back to (0, 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: (f32, f32),
    velocity: (f32, f32),
    tension: f32,
    friction: f32,
    started_at: Instant,
    last_step: Instant,
}

impl Spring {
    pub fn new(position: (f32, f32), tension: f32, friction: f32, now: Instant) -> Self {
        Self {
            position,
            velocity: (0.0, 0.0),
            tension,
            friction,
            started_at: now,
            last_step: now,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    /// Advance the simulation to `now` and return the new position
    pub fn step(&mut self, now: Instant) -> (f32, f32) {
        let elapsed = now.saturating_duration_since(self.last_step);
        if elapsed > MAX_SPRING_GAP {
            self.snap_to_rest();
            self.last_step = now;
            return self.position;
        }

        let steps = elapsed.as_micros() / SPRING_STEP.as_micros();
        let dt = SPRING_STEP.as_secs_f32();
        for _ in 0..steps {
            // Semi-implicit Euler, unit mass
            let ax = -self.tension * self.position.0 - self.friction * self.velocity.0;
            let ay = -self.tension * self.position.1 - self.friction * self.velocity.1;
            self.velocity.0 += ax * dt;
            self.velocity.1 += ay * dt;
            self.position.0 += self.velocity.0 * dt;
            self.position.1 += self.velocity.1 * dt;
        }
        // Keep the sub-step remainder for the next call
        self.last_step += SPRING_STEP * steps as u32;

        let overdue = now.saturating_duration_since(self.started_at) >= SPRING_SETTLE_DEADLINE;
        let diverged = !(self.position.0.is_finite() && self.position.1.is_finite());
        if overdue || diverged || self.is_settled() {
            self.snap_to_rest();
        }
        self.position
    }

    pub fn is_settled(&self) -> bool {
        self.position.0.abs() < REST_DISPLACEMENT
            && self.position.1.abs() < REST_DISPLACEMENT
            && self.velocity.0.abs() < REST_SPEED
            && self.velocity.1.abs() < REST_SPEED
    }

    fn snap_to_rest(&mut self) {
        self.position = (0.0, 0.0);
        self.velocity = (0.0, 0.0);
    }
}
