//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in nexttui::model)
//! - Services (gateway worker, local store)
//! - Logic (pure business logic in nexttui::logic)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod calendar;
pub(crate) mod discover;
pub(crate) mod home;
pub(crate) mod messaging;
pub(crate) mod profile;
pub(crate) mod session;
