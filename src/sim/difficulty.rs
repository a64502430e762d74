//! Linear difficulty ramp

use crate::consts::{ENEMY_BASE_SPEED, ENEMY_SPEED_RAMP};

/// Enemy speed (pixels per frame) after `elapsed_secs` of run time
///
/// Driven by wall-clock time rather than frame count so the ramp is the same
/// at any refresh rate. Negative elapsed time counts as zero.
#[inline]
pub fn enemy_speed(elapsed_secs: f32) -> f32 {
    ENEMY_BASE_SPEED + elapsed_secs.max(0.0) * ENEMY_SPEED_RAMP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_reference_points() {
        assert_eq!(enemy_speed(0.0), 2.0);
        assert!((enemy_speed(10.0) - 3.0).abs() < 1e-5);
        assert!((enemy_speed(60.0) - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_negative_elapsed_clamps_to_base() {
        assert_eq!(enemy_speed(-5.0), ENEMY_BASE_SPEED);
    }
}
