//! Fixed-window cooldown for key input.
//!
//! Terminals deliver auto-repeat presses while a key is held. The gate accepts
//! the first press and then stays closed until `duration_ms` of frame time has
//! passed, so one held key yields at most one move per window.

use crate::types::KEY_WAIT_MS;

#[derive(Debug, Clone)]
pub struct KeyCooldown {
    duration_ms: u32,
    remaining_ms: u32,
}

impl KeyCooldown {
    pub fn new() -> Self {
        Self::with_duration_ms(KEY_WAIT_MS)
    }

    pub fn with_duration_ms(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            remaining_ms: 0,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Whether the window from the last accepted press is still running.
    pub fn active(&self) -> bool {
        self.remaining_ms > 0
    }

    /// Accept a press if the gate is open, starting a new window.
    pub fn try_fire(&mut self) -> bool {
        if self.active() {
            return false;
        }
        self.remaining_ms = self.duration_ms;
        true
    }

    /// Advance the window by one frame.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
    }

    pub fn clear(&mut self) {
        self.remaining_ms = 0;
    }
}

impl Default for KeyCooldown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_press_fires_then_gate_closes() {
        let mut gate = KeyCooldown::with_duration_ms(150);
        assert!(gate.try_fire());
        assert!(gate.active());
        assert!(!gate.try_fire());
    }

    #[test]
    fn gate_reopens_after_window() {
        let mut gate = KeyCooldown::with_duration_ms(150);
        assert!(gate.try_fire());
        for _ in 0..9 {
            gate.update(16);
        }
        // 144ms elapsed: still closed.
        assert!(!gate.try_fire());
        gate.update(16);
        assert!(!gate.active());
        assert!(gate.try_fire());
    }

    #[test]
    fn zero_duration_never_blocks() {
        let mut gate = KeyCooldown::with_duration_ms(0);
        assert!(gate.try_fire());
        assert!(gate.try_fire());
    }

    #[test]
    fn clear_reopens_immediately() {
        let mut gate = KeyCooldown::new();
        assert_eq!(gate.duration_ms(), KEY_WAIT_MS);
        assert!(gate.try_fire());
        gate.clear();
        assert!(gate.try_fire());
    }
}
