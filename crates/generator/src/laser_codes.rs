//! Rotating laser code assignment.
//!
//! Laser-guided munitions accept 4-digit codes whose digits are 1 through 8,
//! so the cursor walks a fixed cycle over [1511, 1787] that skips every
//! value with a 9 in the last or tens digit. One cursor per mission build,
//! advanced once per laser-designation placement; codes within a build are
//! unique without any collision tracking.

/// Code used for every JTAC when the single-code mission option is active.
pub const SINGLE_LASER_CODE: u16 = 1688;
/// Code used when the FC3-compatibility option is active (FC3 aircraft can
/// only lase on 1113).
pub const FC3_LASER_CODE: u16 = 1113;

const CURSOR_START: u16 = 1687;
const CURSOR_WRAP_AT: u16 = 1788;
const CURSOR_RESTART: u16 = 1511;

/// Deterministic cyclic generator of laser codes.
#[derive(Debug, Clone)]
pub struct LaserCodeCursor {
    prev: u16,
}

impl Default for LaserCodeCursor {
    fn default() -> Self {
        Self { prev: CURSOR_START }
    }
}

impl LaserCodeCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the cursor and return the next valid code.
    pub fn next(&mut self) -> u16 {
        let mut code = self.prev + 1;
        if code % 10 == 9 {
            code += 2;
        }
        if code / 10 % 10 == 9 {
            code += 20;
        }
        if code >= CURSOR_WRAP_AT {
            code = CURSOR_RESTART;
        }
        self.prev = code;
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_codes_from_start() {
        let mut cursor = LaserCodeCursor::new();
        assert_eq!(cursor.next(), 1688);
        assert_eq!(cursor.next(), 1711);
        assert_eq!(cursor.next(), 1712);
    }

    #[test]
    fn test_codes_stay_valid_over_full_cycles() {
        let mut cursor = LaserCodeCursor::new();
        for _ in 0..600 {
            let code = cursor.next();
            assert!((1511..=1787).contains(&code), "code {} out of range", code);
            assert_ne!(code % 10, 9, "code {} ends in 9", code);
            assert_ne!(code / 10 % 10, 9, "code {} has 9 in tens digit", code);
            assert_ne!(code / 100 % 10, 9, "code {} has 9 in hundreds digit", code);
        }
    }

    #[test]
    fn test_wraps_to_cycle_start() {
        let mut cursor = LaserCodeCursor::new();
        let mut seen_restart = false;
        for _ in 0..600 {
            if cursor.next() == CURSOR_RESTART {
                seen_restart = true;
                break;
            }
        }
        assert!(seen_restart, "cursor never wrapped to {}", CURSOR_RESTART);
    }

    #[test]
    fn test_sequence_is_deterministic() {
        let mut a = LaserCodeCursor::new();
        let mut b = LaserCodeCursor::new();
        let seq_a: Vec<u16> = (0..100).map(|_| a.next()).collect();
        let seq_b: Vec<u16> = (0..100).map(|_| b.next()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_never_regresses_before_wrap() {
        let mut cursor = LaserCodeCursor::new();
        let mut prev = 0;
        for _ in 0..600 {
            let code = cursor.next();
            if code != CURSOR_RESTART {
                assert!(code > prev, "regressed from {} to {}", prev, code);
            }
            prev = code;
        }
    }
}
