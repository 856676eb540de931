// SPDX-License-Identifier: MPL-2.0
//! Short-lived "value changed" emphasis flag.

/// Tracks whether the readout is currently pulsing.
///
/// Every arm bumps a generation counter. A timer only ends the pulse if it
/// carries the current generation, so re-arming supersedes older timers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pulse {
    active: bool,
    generation: u64,
}

impl Pulse {
    /// Starts (or restarts) the pulse and returns the generation its timer must carry.
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        self.generation
    }

    /// Ends the pulse if `generation` is still current. Returns whether it ended.
    pub fn elapse(&mut self, generation: u64) -> bool {
        if self.active && generation == self.generation {
            self.active = false;
            true
        } else {
            false
        }
    }

    /// Stops the pulse and invalidates any pending timer.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
