//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Intent`] values and tracks
//! which intents are currently held, including terminals that never emit
//! key-release events.

pub mod map;
pub mod tracker;

pub use tui_raycast_types as types;

pub use map::{map_key, should_quit};
pub use tracker::IntentTracker;
