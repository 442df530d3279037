//! UI state transition logic
//!
//! Pure functions for toast lifetime and styling, and the splash timer.

use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_millis(1500);

/// How long the splash screen shows before advancing on its own
pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

/// Whether a toast shown at `shown_at` should be gone by `now`
///
/// # Examples
/// ```
/// use std::time::{Duration, Instant};
/// use nexttui::logic::ui::should_dismiss_toast;
///
/// let shown = Instant::now();
/// assert!(!should_dismiss_toast(shown, shown + Duration::from_millis(1499)));
/// assert!(should_dismiss_toast(shown, shown + Duration::from_millis(1500)));
/// ```
pub fn should_dismiss_toast(shown_at: Instant, now: Instant) -> bool {
    now.saturating_duration_since(shown_at) >= TOAST_DURATION
}

/// Error toasts are prefixed with "Error:" and rendered red
pub fn is_error_toast(message: &str) -> bool {
    message.starts_with("Error:")
}

pub fn splash_elapsed(entered_at: Instant, now: Instant) -> bool {
    now.saturating_duration_since(entered_at) >= SPLASH_DURATION
}
