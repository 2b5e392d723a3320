//! Interpolation helpers for ramp delays.

use libm::powf;

/// Position of `index` within a ramp of `len` pulses, in `[0, 1]`.
///
/// A ramp of zero or one pulse has no interior, so its only pulse sits at
/// the target end (`1.0`).
#[inline]
pub fn ramp_fraction(index: u32, len: u32) -> f32 {
    if len <= 1 {
        1.0
    } else {
        index as f32 / (len - 1) as f32
    }
}

/// Ease-out curve `1 - (1 - t)^k`.
///
/// `k == 1` is linear; larger exponents front-load the change.
#[inline]
pub fn ease_out(t: f32, exponent: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if exponent == 1.0 {
        return t;
    }
    1.0 - powf(1.0 - t, exponent)
}

/// Interpolate between two delays, truncating the offset toward zero.
///
/// Truncation is applied to the offset from `from`, not to the result, so
/// accelerating (`from > to`) and decelerating (`from < to`) ramps round the
/// same way relative to their start. The arithmetic runs in `f64`, where every
/// `u32` delay is exact, and the result stays within `[from, to]`.
#[inline]
pub fn lerp_us(from: u32, to: u32, t: f32) -> u32 {
    let span = f64::from(to) - f64::from(from);
    let offset = (span * f64::from(t)) as i64;
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    let value = (i64::from(from) + offset).clamp(i64::from(lo), i64::from(hi));
    u32::try_from(value).unwrap_or(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_fraction_endpoints() {
        assert_eq!(ramp_fraction(0, 500), 0.0);
        assert_eq!(ramp_fraction(499, 500), 1.0);
        assert_eq!(ramp_fraction(0, 1), 1.0);
        assert_eq!(ramp_fraction(0, 0), 1.0);
    }

    #[test]
    fn test_ease_out_linear_is_identity() {
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(ease_out(t, 1.0), t);
        }
    }

    #[test]
    fn test_ease_out_front_loads() {
        // 1 - 0.5^2 = 0.75
        assert!((ease_out(0.5, 2.0) - 0.75).abs() < 1e-6);
        assert_eq!(ease_out(0.0, 2.5), 0.0);
        assert_eq!(ease_out(1.0, 2.5), 1.0);
        assert!(ease_out(0.3, 3.0) > 0.3);
    }

    #[test]
    fn test_lerp_truncates_offset() {
        assert_eq!(lerp_us(2000, 450, 0.0), 2000);
        assert_eq!(lerp_us(2000, 450, 1.0), 450);
        assert_eq!(lerp_us(450, 2000, 1.0), 2000);
        // -1550 * 0.5 = -775 exactly
        assert_eq!(lerp_us(2000, 450, 0.5), 1225);
        // 10 * 0.33 = 3.3 -> 3 ; -10 * 0.33 = -3.3 -> -3
        assert_eq!(lerp_us(100, 110, 0.33), 103);
        assert_eq!(lerp_us(110, 100, 0.33), 107);
    }

    #[test]
    fn test_lerp_full_u32_range() {
        assert_eq!(lerp_us(1, u32::MAX, 1.0), u32::MAX);
        assert_eq!(lerp_us(u32::MAX, 1, 1.0), 1);
        assert_eq!(lerp_us(450, 20_000_001, 1.0), 20_000_001);
        assert_eq!(lerp_us(20_000_001, 450, 1.0), 450);
        assert_eq!(lerp_us(u32::MAX, 1, 0.0), u32::MAX);
    }

    #[test]
    fn test_lerp_stays_between_endpoints() {
        for t in [0.0, 0.1, 0.5, 0.9, 1.0, 1.5, -0.5] {
            let up = lerp_us(1, u32::MAX, t);
            let down = lerp_us(u32::MAX, 1, t);
            assert!(up >= 1);
            assert!(down >= 1);
        }
    }
}
