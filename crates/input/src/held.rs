//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a key counts as held until it is released or has not been seen for
//! `release_timeout_ms`. Terminals that do report releases still get a long
//! fallback timeout, since a release can be lost (focus change, dropped event).

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{Key, KeyState, KEY_RELEASE_FALLBACK_MS, KEY_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone)]
pub struct HeldKeys {
    /// Last press/repeat timestamp per key, `None` when released.
    last_seen_ms: [Option<u64>; 4],
    release_timeout_ms: u64,
    now_ms: u64,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            last_seen_ms: [None; 4],
            release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
            now_ms: 0,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// For terminals that report releases: keys stay held until released, or
    /// until [`KEY_RELEASE_FALLBACK_MS`] pass without a press or repeat.
    pub fn with_release_events(mut self) -> Self {
        self.release_timeout_ms = KEY_RELEASE_FALLBACK_MS;
        self
    }

    pub fn release_timeout_ms(&self) -> u64 {
        self.release_timeout_ms
    }

    /// Feed one terminal key event observed at `now_ms`.
    ///
    /// Returns the paddle key it affected, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent, now_ms: u64) -> Option<Key> {
        let mapped = map_key(key.code)?;
        self.now_ms = self.now_ms.max(now_ms);
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen_ms[mapped.index()] = Some(now_ms);
            }
            KeyEventKind::Release => {
                self.last_seen_ms[mapped.index()] = None;
            }
        }
        Some(mapped)
    }

    /// Move the snapshot to `now_ms`, expiring keys that timed out.
    pub fn update(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
        for slot in &mut self.last_seen_ms {
            if let Some(seen) = *slot {
                if self.now_ms.saturating_sub(seen) > self.release_timeout_ms {
                    *slot = None;
                }
            }
        }
    }

    /// Forget every held key, e.g. when the terminal loses focus and the
    /// matching releases will never arrive.
    pub fn release_all(&mut self) {
        self.last_seen_ms = [None; 4];
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyState for HeldKeys {
    fn is_held(&self, key: Key) -> bool {
        self.last_seen_ms[key.index()].is_some()
    }
}
