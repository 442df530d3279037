//! Navigation logic
//!
//! Pure functions for list selection with wrapping, tab order per role, and
//! the routing decisions between top-level screens.

use crate::api::{User, UserType};
use crate::{Screen, Tab};

/// Number of onboarding slides
pub const ONBOARDING_SLIDES: usize = 3;

/// Calculate the next selection index with wrapping
///
/// Advances the selection to the next item in the list. If at the end,
/// wraps around to the beginning. If no item is selected, selects the first item.
///
/// # Examples
/// ```
/// use nexttui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use nexttui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(1), 3), Some(0));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) => i.min(list_len) - 1,
    })
}

/// Keep a selection valid after the list changed length
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}

/// Tabs shown in the home screen for a role, in display order
pub fn tabs_for(role: UserType) -> &'static [Tab] {
    match role {
        UserType::Individual => &[Tab::Jobs, Tab::Calendar, Tab::Messages, Tab::Profile],
        UserType::Company | UserType::Startup => {
            &[Tab::Candidates, Tab::Calendar, Tab::Messages, Tab::Profile]
        }
    }
}

/// First tab of a role's home
pub fn home_tab(role: UserType) -> Tab {
    tabs_for(role)[0]
}

pub fn next_tab(role: UserType, current: Tab) -> Tab {
    let tabs = tabs_for(role);
    let idx = tabs.iter().position(|t| *t == current);
    next_selection(idx, tabs.len()).map_or(tabs[0], |i| tabs[i])
}

pub fn prev_tab(role: UserType, current: Tab) -> Tab {
    let tabs = tabs_for(role);
    let idx = tabs.iter().position(|t| *t == current);
    prev_selection(idx, tabs.len()).map_or(tabs[0], |i| tabs[i])
}

/// Where the splash screen hands off to
///
/// Signed-in users go straight home. Everyone else sees onboarding until it
/// has been completed once, then the welcome screen.
pub fn route_after_splash(user: Option<&User>, has_seen_onboarding: bool) -> Screen {
    if user.is_some() {
        Screen::Home
    } else if !has_seen_onboarding {
        Screen::Onboarding
    } else {
        Screen::Welcome
    }
}

/// Where choosing a user type leads
pub fn route_after_user_type(is_authenticated: bool) -> Screen {
    if is_authenticated {
        Screen::Home
    } else {
        Screen::Signup
    }
}

/// Advance an onboarding slide; `None` means onboarding is finished
pub fn next_onboarding_slide(current: usize) -> Option<usize> {
    if current + 1 >= ONBOARDING_SLIDES {
        None
    } else {
        Some(current + 1)
    }
}
