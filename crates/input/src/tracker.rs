//! Held-intent tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! an intent stays "held" after its last press only for a short window, so a
//! single tap does not turn into sustained motion.

use std::time::Instant;

use arrayvec::ArrayVec;

use crate::types::Intent;

// In terminals without key-release events, a short timeout after the last
// press stands in for the release.
const DEFAULT_HOLD_TIMEOUT_MS: u32 = 150;

/// Tracks which movement intents are currently held.
#[derive(Debug, Clone)]
pub struct IntentTracker {
    last_press: [Option<Instant>; 4],
    hold_timeout_ms: u32,
}

impl IntentTracker {
    pub fn new() -> Self {
        Self {
            last_press: [None; 4],
            hold_timeout_ms: DEFAULT_HOLD_TIMEOUT_MS,
        }
    }

    pub fn with_hold_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.hold_timeout_ms = timeout_ms;
        self
    }

    pub fn hold_timeout_ms(&self) -> u32 {
        self.hold_timeout_ms
    }

    /// Record a press (or terminal auto-repeat, which refreshes the hold).
    pub fn press(&mut self, intent: Intent) {
        self.last_press[intent.index()] = Some(Instant::now());
    }

    /// Record an explicit release, for terminals that do report them.
    pub fn release(&mut self, intent: Intent) {
        self.last_press[intent.index()] = None;
    }

    /// The set of intents held this frame, pruning expired holds.
    pub fn active(&mut self) -> ArrayVec<Intent, 4> {
        let mut held = ArrayVec::new();
        for intent in Intent::ALL {
            let slot = &mut self.last_press[intent.index()];
            if let Some(pressed_at) = *slot {
                if pressed_at.elapsed().as_millis() as u32 > self.hold_timeout_ms {
                    *slot = None;
                } else {
                    held.push(intent);
                }
            }
        }
        held
    }

    pub fn reset(&mut self) {
        self.last_press = [None; 4];
    }
}

impl Default for IntentTracker {
    fn default() -> Self {
        Self::new()
    }
}
