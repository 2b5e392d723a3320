//! Pulse-by-pulse walk over a profile.

use super::profile::{MotionPhase, PulseProfile};

/// One pulse to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    /// Position of the pulse in the move.
    pub index: u32,
    /// Phase the pulse belongs to.
    pub phase: MotionPhase,
    /// High and low hold time in microseconds.
    pub delay_us: u32,
}

/// Runtime state while walking a profile.
#[derive(Debug, Clone)]
pub struct PulseExecutor {
    /// The profile being executed.
    profile: PulseProfile,

    /// Index of the next pulse (0 to total_pulses).
    current_pulse: u32,
}

impl PulseExecutor {
    /// Create a new executor positioned at the first pulse.
    pub fn new(profile: PulseProfile) -> Self {
        Self {
            profile,
            current_pulse: 0,
        }
    }

    /// Check if every pulse has been handed out.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.current_pulse >= self.profile.total_pulses
    }

    /// Index of the next pulse.
    #[inline]
    pub fn current_pulse(&self) -> u32 {
        self.current_pulse
    }

    /// Get pulses remaining.
    #[inline]
    pub fn pulses_remaining(&self) -> u32 {
        self.profile.total_pulses.saturating_sub(self.current_pulse)
    }

    /// Phase of the next pulse.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.profile.phase_at(self.current_pulse)
    }

    /// Get the profile.
    #[inline]
    pub fn profile(&self) -> &PulseProfile {
        &self.profile
    }

    /// Rewind to the first pulse.
    pub fn reset(&mut self) {
        self.current_pulse = 0;
    }

    /// Get progress as a fraction (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.profile.total_pulses == 0 {
            1.0
        } else {
            self.current_pulse as f32 / self.profile.total_pulses as f32
        }
    }
}

impl Iterator for PulseExecutor {
    type Item = Pulse;

    fn next(&mut self) -> Option<Pulse> {
        let index = self.current_pulse;
        let delay_us = self.profile.delay_at(index)?;
        let phase = self.profile.phase_at(index);
        self.current_pulse += 1;
        Some(Pulse { index, phase, delay_us })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pulses_remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PulseExecutor {}
