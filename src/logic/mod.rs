//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - animation: Tween and spring curves for the card deck
//! - auth: Login and sign-up form checks
//! - calendar: Event grouping, formatting and form parsing
//! - formatting: Human-readable display strings
//! - messages: Conversation bookkeeping and relative timestamps
//! - navigation: Selection, tab order and screen routing
//! - profile: Editable profile fields and completion percentage
//! - swipe: Drag classification and visual feedback values
//! - ui: Toast and splash timing

pub mod animation;
pub mod auth;
pub mod calendar;
pub mod formatting;
pub mod messages;
pub mod navigation;
pub mod profile;
pub mod swipe;
pub mod ui;
