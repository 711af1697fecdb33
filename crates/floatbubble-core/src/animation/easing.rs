//! Easing functions

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Easing curve applied to a transition's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInOutSine,
}

impl Easing {
    /// Map linear progress in `[0, 1]` onto the curve. Input outside the range is clamped.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;

        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t.powi(2),
            Easing::EaseOutQuad => 1.0 - inv.powi(2),
            Easing::EaseInOutQuad if t < 0.5 => 2.0 * t.powi(2),
            Easing::EaseInOutQuad => 1.0 - 2.0 * inv.powi(2),
            Easing::EaseInCubic => t.powi(3),
            Easing::EaseOutCubic => 1.0 - inv.powi(3),
            Easing::EaseInOutCubic if t < 0.5 => 4.0 * t.powi(3),
            Easing::EaseInOutCubic => 1.0 - 4.0 * inv.powi(3),
            Easing::EaseInOutSine => (1.0 - (PI * t).cos()) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
    }

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in [
            Easing::EaseInQuad,
            Easing::EaseOutQuad,
            Easing::EaseInOutQuad,
            Easing::EaseInCubic,
            Easing::EaseOutCubic,
            Easing::EaseInOutCubic,
            Easing::EaseInOutSine,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-12, "{:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{:?}", easing);
        }
    }

    #[test]
    fn test_ease_out_quad() {
        let e = Easing::EaseOutQuad;
        // EaseOut should be faster at the start
        assert!(e.apply(0.5) > 0.5);
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
