//! Physical constants, unit conversion factors and simulation tuning.
//!
//! All physics runs in SI units internally:
//! - Position: meters (m)
//! - Velocity: meters per second (m/s)
//! - Mass: kilograms (kg)
//!
//! Display values (results handed back to callers) use yards and mph.

use std::f64::consts::PI;

// =============================================================================
// Physical Constants
// =============================================================================

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Air density at sea level (kg/m³)
pub const AIR_DENSITY: f64 = 1.225;

/// Standard golf ball mass: 45.9g (kg)
pub const BALL_MASS: f64 = 0.0459;

/// Standard golf ball radius: 42.7mm diameter (m)
pub const BALL_RADIUS: f64 = 0.02135;

/// Cross-sectional area of a standard ball (m²)
pub const BALL_AREA: f64 = PI * BALL_RADIUS * BALL_RADIUS;

/// Flat drag coefficient, independent of Reynolds number and spin
pub const DRAG_COEFFICIENT: f64 = 0.25;

// =============================================================================
// Simulation Settings
// =============================================================================

/// Fixed integration step (s)
pub const TIME_STEP: f64 = 0.01;

/// Flights still airborne after this long are stopped (s)
pub const MAX_FLIGHT_TIME: f64 = 15.0;

/// Roll-out applied to carry to estimate total distance
pub const ROLL_MULTIPLIER: f64 = 1.2;

/// Small value for floating-point comparisons
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// Conversion Factors
// =============================================================================

pub const MPH_TO_MS: f64 = 0.44704;
pub const MS_TO_MPH: f64 = 2.23694;
pub const DEGREES_TO_RADIANS: f64 = PI / 180.0;
pub const RADIANS_TO_DEGREES: f64 = 180.0 / PI;
pub const METERS_TO_YARDS: f64 = 1.09361;
pub const YARDS_TO_METERS: f64 = 0.9144;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ball_area_matches_radius() {
        // 42.7mm ball -> ~14.32 cm²
        assert_relative_eq!(BALL_AREA, 0.001432, epsilon = 1e-6);
    }

    #[test]
    fn test_speed_factors_are_near_reciprocal() {
        assert_relative_eq!(MPH_TO_MS * MS_TO_MPH, 1.0, max_relative = 1e-5);
    }

    #[test]
    fn test_iteration_bound() {
        let max_steps = (MAX_FLIGHT_TIME / TIME_STEP).round() as usize;
        assert_eq!(max_steps, 1500);
    }
}
