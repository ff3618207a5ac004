//! Unit conversions between the internal SI model and display units.
//!
//! Each conversion uses the fixed factors in [`crate::constants`], so a
//! meters -> yards -> meters round trip is close to, but not exactly, the
//! identity (the two distance factors are rounded independently).

use crate::constants::{
    DEGREES_TO_RADIANS, METERS_TO_YARDS, MPH_TO_MS, MS_TO_MPH, RADIANS_TO_DEGREES,
    YARDS_TO_METERS,
};
use crate::types::Vec3;

pub fn mph_to_ms(mph: f64) -> f64 {
    mph * MPH_TO_MS
}

pub fn ms_to_mph(ms: f64) -> f64 {
    ms * MS_TO_MPH
}

pub fn meters_to_yards(meters: f64) -> f64 {
    meters * METERS_TO_YARDS
}

pub fn yards_to_meters(yards: f64) -> f64 {
    yards * YARDS_TO_METERS
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEGREES_TO_RADIANS
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RADIANS_TO_DEGREES
}

/// Position vector, meters -> yards
pub fn position_to_display(position: Vec3) -> Vec3 {
    position * METERS_TO_YARDS
}

/// Velocity vector, m/s -> mph
pub fn velocity_to_display(velocity: Vec3) -> Vec3 {
    velocity * MS_TO_MPH
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_speed_conversion() {
        // 100 mph ≈ 44.7 m/s
        assert_relative_eq!(mph_to_ms(100.0), 44.704, epsilon = 1e-9);
        assert_relative_eq!(ms_to_mph(44.704), 100.0, max_relative = 1e-4);
    }

    #[test]
    fn test_angle_conversion() {
        assert_relative_eq!(degrees_to_radians(180.0), std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(radians_to_degrees(std::f64::consts::FRAC_PI_2), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display_vectors() {
        let p = position_to_display(Vec3::new(1.0, 2.0, -3.0));
        assert_relative_eq!(p.x, 1.09361, epsilon = 1e-9);
        assert_relative_eq!(p.y, 2.18722, epsilon = 1e-9);
        assert_relative_eq!(p.z, -3.28083, epsilon = 1e-9);

        let v = velocity_to_display(Vec3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(v.x, 22.3694, epsilon = 1e-9);
    }

    proptest! {
        /// Meters -> yards -> meters recovers the input within rounding of the factors.
        #[test]
        fn prop_distance_roundtrip(meters in 1e-3f64..1e6) {
            let back = yards_to_meters(meters_to_yards(meters));
            prop_assert!((back - meters).abs() / meters < 1e-3);
        }

        /// Degrees -> radians -> degrees is exact up to float error.
        #[test]
        fn prop_angle_roundtrip(degrees in -360.0f64..360.0) {
            let back = radians_to_degrees(degrees_to_radians(degrees));
            prop_assert!((back - degrees).abs() < 1e-9);
        }
    }
}
