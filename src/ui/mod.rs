// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (tab bar, body, legend) and popup rects
// - render: Main orchestration function that coordinates all rendering
// - intro: Splash, onboarding, welcome and user type screens
// - forms: Login/sign-up screens and the event/profile popups
// - tabs: Role home tab bar with unread badge
// - deck: Candidate swipe deck (offset and tilted top card, LIKE/NOPE stamps)
// - jobs: Greeting, profile completion card, job list and details
// - messages: Conversation list, open thread and draft line
// - calendar: Events grouped by day
// - profile: Role profile with completion gauge
// - legend: Renders hotkey legend
// - dialogs: Renders confirmation dialogs (delete event)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod calendar;
pub mod deck;
pub mod dialogs;
pub mod forms;
pub mod intro;
pub mod jobs;
pub mod layout;
pub mod legend;
pub mod messages;
pub mod profile;
pub mod render;
pub mod tabs;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
