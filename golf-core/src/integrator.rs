//! Numerical integrators for advancing the flight in time.
//!
//! The flight uses classical 4th-order Runge-Kutta with a fixed step.
//!
//! ## Algorithm
//!
//! Given a state S and a derivative function D(S):
//!
//! ```text
//! k1 = D(S)
//! k2 = D(S + h/2·k1)
//! k3 = D(S + h/2·k2)
//! k4 = D(S + h·k3)
//! S' = S + h/6·(k1 + 2k2 + 2k3 + k4)
//! ```
//!
//! For the ball, S is (position, velocity, spin) and D(S) is
//! (velocity, acceleration, spin rate of change). Spin rides through the same
//! step as position and velocity even while the force model leaves it constant.

use crate::types::{BallProperties, BallState, SpinState, Vec3};

/// A state that can be advanced by an ODE step.
///
/// The derivative of a state has the same shape as the state itself, so a
/// single `add_scaled` covers every RK4 stage.
pub trait OdeState: Copy {
    /// Returns `self + rate * h`, componentwise.
    fn add_scaled(&self, rate: &Self, h: f64) -> Self;
}

impl OdeState for Vec3 {
    fn add_scaled(&self, rate: &Self, h: f64) -> Self {
        *self + *rate * h
    }
}

impl OdeState for SpinState {
    fn add_scaled(&self, rate: &Self, h: f64) -> Self {
        SpinState {
            rate: self.rate + rate.rate * h,
            axis: self.axis + rate.axis * h,
        }
    }
}

impl OdeState for BallState {
    fn add_scaled(&self, rate: &Self, h: f64) -> Self {
        BallState {
            pos: self.pos.add_scaled(&rate.pos, h),
            vel: self.vel.add_scaled(&rate.vel, h),
            spin: self.spin.add_scaled(&rate.spin, h),
        }
    }
}

/// Trait for computing forces on the ball.
///
/// Implementations provide the physics model (gravity, drag, spin forces).
pub trait ForceModel {
    /// Net force on the ball in Newtons.
    fn force(&self, state: &BallState, props: &BallProperties) -> Vec3;

    /// Linear acceleration, F / m.
    fn linear_acceleration(&self, state: &BallState, props: &BallProperties) -> Vec3 {
        self.force(state, props) / props.mass
    }

    /// Rate of change of spin (rpm/s, deg/s).
    /// Default implementation: spin is held constant.
    fn spin_rate_of_change(&self, _state: &BallState, _props: &BallProperties) -> SpinState {
        SpinState::NONE
    }
}

/// Time derivative of the ball state under a force model.
///
/// Position changes with velocity, velocity with acceleration, spin with
/// whatever the model reports.
pub fn ball_derivative<F: ForceModel>(
    state: &BallState,
    props: &BallProperties,
    forces: &F,
) -> BallState {
    BallState {
        pos: state.vel,
        vel: forces.linear_acceleration(state, props),
        spin: forces.spin_rate_of_change(state, props),
    }
}

/// Classical 4th-order Runge-Kutta integrator.
///
/// Pure: the input state is never mutated and the result depends only on
/// `(state, h, derivative)`.
pub struct RungeKutta4;

impl RungeKutta4 {
    /// Advance any [`OdeState`] by one step of size `h`.
    pub fn step<S, D>(state: &S, h: f64, derivative: D) -> S
    where
        S: OdeState,
        D: Fn(&S) -> S,
    {
        let half = 0.5 * h;

        let k1 = derivative(state);
        let k2 = derivative(&state.add_scaled(&k1, half));
        let k3 = derivative(&state.add_scaled(&k2, half));
        let k4 = derivative(&state.add_scaled(&k3, h));

        // S + h/6·k1 + h/3·k2 + h/3·k3 + h/6·k4
        state
            .add_scaled(&k1, h / 6.0)
            .add_scaled(&k2, h / 3.0)
            .add_scaled(&k3, h / 3.0)
            .add_scaled(&k4, h / 6.0)
    }

    /// Advance the ball state by one step under a force model.
    pub fn step_ball<F: ForceModel>(
        state: &BallState,
        props: &BallProperties,
        forces: &F,
        dt: f64,
    ) -> BallState {
        Self::step(state, dt, |s| ball_derivative(s, props, forces))
    }

    /// Advance the ball state by multiple steps.
    ///
    /// Total time advanced is `steps * dt`.
    pub fn step_n<F: ForceModel>(
        state: &BallState,
        props: &BallProperties,
        forces: &F,
        dt: f64,
        steps: usize,
    ) -> BallState {
        (0..steps).fold(*state, |current, _| {
            Self::step_ball(&current, props, forces, dt)
        })
    }
}

/// Simple Euler integrator (for comparison/testing only).
///
/// First-order, so it drifts visibly at the flight's 10ms step. Useful for
/// confirming RK4 gives better results.
pub struct Euler;

impl Euler {
    pub fn step<S, D>(state: &S, h: f64, derivative: D) -> S
    where
        S: OdeState,
        D: Fn(&S) -> S,
    {
        state.add_scaled(&derivative(state), h)
    }
}

// =============================================================================
// Tests
// =============================================================================
