//! Shake detection.
//!
//! A sample counts as a shake when its squared magnitude, normalised by
//! g², reaches [`SHAKE_THRESHOLD_G`].  One physical shake produces a burst
//! of such samples within a few milliseconds, so after an accepted shake
//! every candidate is suppressed until more than [`SHAKE_COOLDOWN_MS`]
//! has passed: one shake, one colour change.
//!
//! The only state is the timestamp of the last accepted shake.  Before the
//! first acceptance it is unset, so the very first candidate always passes
//! the cooldown check regardless of how soon after boot it arrives.

use crate::sensors::{AccelSample, GRAVITY_EARTH};

/// Minimum normalised force (|a|²/g²) for a shake.
pub const SHAKE_THRESHOLD_G: f32 = 2.0;

/// Candidates must arrive strictly later than this after the last
/// accepted shake.
pub const SHAKE_COOLDOWN_MS: u64 = 500;

/// `(x² + y² + z²) / g²` — 1.0 for a device at rest.
pub fn normalized_force(sample: &AccelSample) -> f32 {
    sample.magnitude_sq() / (GRAVITY_EARTH * GRAVITY_EARTH)
}

/// Outcome of feeding one sample to the detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShakeVerdict {
    /// Shake accepted; the cooldown window restarts now.
    Accepted { force: f32 },
    /// Force under the threshold; detector state untouched.
    BelowThreshold,
    /// Strong enough, but inside the cooldown of the previous shake.
    CoolingDown,
}

impl ShakeVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShakeDetector {
    last_accepted_ms: Option<u64>,
}

impl ShakeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `sample` observed at monotonic time `now_ms`.
    pub fn check(&mut self, sample: &AccelSample, now_ms: u64) -> ShakeVerdict {
        let force = normalized_force(sample);
        // Written so that a NaN force is rejected too.
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        if !(force >= SHAKE_THRESHOLD_G) {
            return ShakeVerdict::BelowThreshold;
        }

        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) <= SHAKE_COOLDOWN_MS {
                return ShakeVerdict::CoolingDown;
            }
        }

        self.last_accepted_ms = Some(now_ms);
        ShakeVerdict::Accepted { force }
    }

    /// When the last shake was accepted, if ever.
    pub fn last_accepted_ms(&self) -> Option<u64> {
        self.last_accepted_ms
    }

    /// Forget the last shake; the next candidate passes the cooldown.
    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}
