//! One-shot visibility latch.

/// Phase of a reveal. There is exactly one allowed transition.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Unrevealed,
    Revealed { at: f64 },
}

/// Two-state latch: unrevealed until the watched region first meets the
/// visibility threshold, then revealed for the lifetime of the instance.
///
/// `observe` is fed one intersection sample per frame while unrevealed.
/// Once latched, further samples are ignored, so scrolling the region out
/// of view never hides it again. A remounted region gets a fresh flag and
/// therefore a fresh latch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFlag {
    phase: Phase,
}

impl Default for RevealFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealFlag {
    pub fn new() -> Self {
        Self {
            phase: Phase::Unrevealed,
        }
    }

    /// Feeds one visibility sample taken at time `now` (seconds).
    ///
    /// Latches when `ratio >= threshold`. A `None` ratio means the viewport
    /// capability is unavailable: the latch fails open with the transition
    /// already complete, so content shows without animating rather than
    /// staying hidden forever.
    ///
    /// Returns true iff this call performed the transition.
    pub fn observe(&mut self, ratio: Option<f32>, threshold: f32, now: f64) -> bool {
        if self.is_revealed() {
            return false;
        }
        match ratio {
            None => {
                self.phase = Phase::Revealed {
                    at: f64::NEG_INFINITY,
                };
                true
            }
            Some(r) if r >= threshold => {
                self.phase = Phase::Revealed { at: now };
                true
            }
            Some(_) => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, Phase::Revealed { .. })
    }

    /// Time the latch fired, `None` while unrevealed. Negative infinity
    /// marks a fail-open latch whose animation is skipped.
    pub fn revealed_at(&self) -> Option<f64> {
        match self.phase {
            Phase::Unrevealed => None,
            Phase::Revealed { at } => Some(at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 0.1;

    #[test]
    fn test_below_threshold_does_not_latch() {
        let mut flag = RevealFlag::new();
        assert!(!flag.observe(Some(0.0), THRESHOLD, 1.0));
        assert!(!flag.observe(Some(0.09), THRESHOLD, 2.0));
        assert!(!flag.is_revealed());
        assert_eq!(flag.revealed_at(), None);
    }

    #[test]
    fn test_latches_at_threshold() {
        let mut flag = RevealFlag::new();
        assert!(flag.observe(Some(0.1), THRESHOLD, 3.0));
        assert!(flag.is_revealed());
        assert_eq!(flag.revealed_at(), Some(3.0));
    }

    #[test]
    fn test_latch_is_one_shot() {
        let mut flag = RevealFlag::new();
        flag.observe(Some(1.0), THRESHOLD, 1.0);

        // No subsequent sample sequence changes the flag back.
        assert!(!flag.observe(Some(0.0), THRESHOLD, 2.0));
        assert!(!flag.observe(Some(1.0), THRESHOLD, 3.0));
        assert!(!flag.observe(None, THRESHOLD, 4.0));
        assert!(flag.is_revealed());
        assert_eq!(flag.revealed_at(), Some(1.0));
    }

    #[test]
    fn test_missing_capability_fails_open() {
        let mut flag = RevealFlag::new();
        assert!(flag.observe(None, THRESHOLD, 5.0));
        assert!(flag.is_revealed());
        // Animation is marked already complete.
        assert_eq!(flag.revealed_at(), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_fresh_flag_is_unrevealed() {
        let flag = RevealFlag::default();
        assert!(!flag.is_revealed());
    }
}
