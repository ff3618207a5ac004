//! Physical forces acting on the ball in flight.
//!
//! This module implements the `ForceModel` trait for golf ball flight:
//!
//! - **Gravity**: Constant downward force, -m·g along Y
//! - **Drag**: Air resistance opposing motion, proportional to v²
//! - **Spin force**: Tagged slot for a spin-induced (Magnus) lift term
//!
//! ## Spin
//!
//! Spin is tracked through every integration step but currently exerts no
//! force: [`SpinForce::Inert`] is the only variant. A lift model is added as a
//! new variant here; the integrator contract does not change.

use crate::constants;
use crate::integrator::ForceModel;
use crate::types::{BallProperties, BallState, Vec3};

/// Force contributed by the ball's spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinForce {
    /// Spin is carried but produces no force.
    #[default]
    Inert,
}

impl SpinForce {
    pub fn force(&self, _state: &BallState, _props: &BallProperties) -> Vec3 {
        match self {
            SpinForce::Inert => Vec3::ZERO,
        }
    }
}

/// Force model for golf ball flight.
///
/// Combines gravity, aerodynamic drag and the spin force slot.
#[derive(Debug, Clone)]
pub struct GolfForces {
    /// Air density in kg/m³ (default: sea level)
    pub air_density: f64,

    /// Gravitational acceleration in m/s² (default: 9.81)
    pub gravity: f64,

    /// Drag coefficient (default: flat 0.25)
    pub drag_coefficient: f64,

    /// Cross-sectional area used for drag, in m²
    pub area: f64,

    pub spin_force: SpinForce,

    /// Enable/disable individual forces (useful for testing)
    pub enable_gravity: bool,
    pub enable_drag: bool,
}

impl Default for GolfForces {
    fn default() -> Self {
        Self {
            air_density: constants::AIR_DENSITY,
            gravity: constants::GRAVITY,
            drag_coefficient: constants::DRAG_COEFFICIENT,
            area: constants::BALL_AREA,
            spin_force: SpinForce::Inert,
            enable_gravity: true,
            enable_drag: true,
        }
    }
}

impl GolfForces {
    /// Create a new force model with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a force model with only gravity (for testing).
    pub fn gravity_only() -> Self {
        Self {
            enable_drag: false,
            ..Self::default()
        }
    }

    /// Use the cross-sectional area of the given ball for drag instead of the
    /// standard ball's.
    pub fn with_ball_area(mut self, props: &BallProperties) -> Self {
        self.area = props.cross_sectional_area();
        self
    }

    /// Gravity force: F = -m·g along Y.
    fn gravity_force(&self, props: &BallProperties) -> Vec3 {
        Vec3::new(0.0, -self.gravity * props.mass, 0.0)
    }

    /// Calculate drag force on the ball.
    ///
    /// Drag equation: F_drag = -0.5 * ρ * Cd * A * |v|² * v̂
    ///
    /// Zero when the ball is not moving.
    fn drag_force(&self, state: &BallState) -> Vec3 {
        let speed_sq = state.vel.magnitude_squared();
        if speed_sq < constants::EPSILON {
            return Vec3::ZERO;
        }

        let magnitude = 0.5 * self.air_density * self.drag_coefficient * self.area * speed_sq;

        state.vel.normalized() * (-magnitude)
    }
}

impl ForceModel for GolfForces {
    fn force(&self, state: &BallState, props: &BallProperties) -> Vec3 {
        let mut force = Vec3::ZERO;

        if self.enable_gravity {
            force += self.gravity_force(props);
        }

        if self.enable_drag {
            force += self.drag_force(state);
        }

        force += self.spin_force.force(state, props);

        force
    }
}

// =============================================================================
// Tests
// =============================================================================
