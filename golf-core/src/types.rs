//! Core types for the flight simulation.
//!
//! Internal state is SI:
//! - Position: meters (m)
//! - Velocity: meters per second (m/s)
//! - Spin rate: revolutions per minute (rpm), spin axis in degrees
//! - Mass: kilograms (kg)
//!
//! [`TrajectoryPoint`]s handed to callers are in display units (yards, mph).

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use crate::constants;
use crate::error::{GolfError, GolfResult};

// =============================================================================
// Vec3 - 3D Vector
// =============================================================================

/// A 3D vector used for positions, velocities and forces.
///
/// Coordinate system:
/// - X: horizontal, downrange along a zero launch direction
/// - Y: vertical (positive upward, ground at y = 0)
/// - Z: horizontal, lateral (positive to the right of the target line)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude (length) of the vector
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Distance from the origin in the ground (x-z) plane
    pub fn horizontal_magnitude(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    /// Returns a unit vector in the same direction, or zero if magnitude is zero
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < constants::EPSILON {
            Self::ZERO
        } else {
            *self / mag
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Elevation above the ground plane, in radians
    pub fn elevation(&self) -> f64 {
        self.y.atan2(self.horizontal_magnitude())
    }

    /// Azimuth in the ground plane measured from +X toward +Z, in radians
    pub fn azimuth(&self) -> f64 {
        self.z.atan2(self.x)
    }

    /// Builds a vector from speed, elevation and azimuth (radians).
    ///
    /// Inverse of [`Vec3::magnitude`], [`Vec3::elevation`] and [`Vec3::azimuth`].
    pub fn from_spherical(speed: f64, elevation: f64, azimuth: f64) -> Self {
        Self {
            x: speed * elevation.cos() * azimuth.cos(),
            y: speed * elevation.sin(),
            z: speed * elevation.cos() * azimuth.sin(),
        }
    }
}

// Operator overloads for Vec3
impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

// =============================================================================
// Spin
// =============================================================================

/// Spin carried by the ball.
///
/// The axis tilt is in degrees: 0 is pure backspin, positive tilts produce
/// slice/fade curvature, negative tilts produce hook/draw curvature.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpinState {
    /// Spin rate in rpm (non-negative)
    pub rate: f64,
    /// Spin axis tilt in degrees
    pub axis: f64,
}

impl SpinState {
    pub const NONE: SpinState = SpinState {
        rate: 0.0,
        axis: 0.0,
    };

    pub const fn new(rate: f64, axis: f64) -> Self {
        Self { rate, axis }
    }
}

// =============================================================================
// Ball State
// =============================================================================

/// Complete kinematic state of the ball at a given instant (SI units).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Vec3,
    pub vel: Vec3,
    pub spin: SpinState,
}

impl BallState {
    pub fn new(pos: Vec3, vel: Vec3, spin: SpinState) -> Self {
        Self { pos, vel, spin }
    }

    /// Ball at rest at a given position
    pub fn at_rest(pos: Vec3) -> Self {
        Self {
            pos,
            vel: Vec3::ZERO,
            spin: SpinState::NONE,
        }
    }
}

// =============================================================================
// Ball Properties
// =============================================================================

/// Physical properties of a ball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BallProperties {
    /// Mass in kg
    pub mass: f64,
    /// Radius in m
    pub radius: f64,
    /// Compression rating (harder = less compression)
    pub compression_rate: f64,
    /// Core construction label, e.g. "standard"
    pub core_design: String,
}

impl BallProperties {
    /// Regulation ball: 45.9g, 42.7mm diameter, compression 100
    pub fn standard() -> Self {
        Self {
            mass: constants::BALL_MASS,
            radius: constants::BALL_RADIUS,
            compression_rate: 100.0,
            core_design: "standard".to_string(),
        }
    }

    /// Cross-sectional area (πr²)
    pub fn cross_sectional_area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Mass and radius must be positive; acceleration divides by mass.
    pub fn validate(&self) -> GolfResult<()> {
        if self.mass.is_nan() || self.mass <= 0.0 {
            return Err(GolfError::InvalidBall(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if self.radius.is_nan() || self.radius <= 0.0 {
            return Err(GolfError::InvalidBall(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

impl Default for BallProperties {
    fn default() -> Self {
        Self::standard()
    }
}

// =============================================================================
// Trajectory & Metrics
// =============================================================================

/// One sample of the flight path, in display units (yards, mph).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub position: Vec3,
    pub velocity: Vec3,
    pub spin: SpinState,
    /// Seconds since launch
    pub time: f64,
}

/// Summary metrics of a flight, in SI units while the flight is running.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightMetrics {
    pub apex_height: f64,
    pub apex_distance: f64,
    pub flight_time: f64,
    pub carry_distance: f64,
    pub total_distance: f64,
    pub final_lateral_distance: f64,
}

// =============================================================================
// Tests
// =============================================================================
