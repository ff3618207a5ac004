//! Ball flight simulation.
//!
//! A shot runs as a sequence of value transformations:
//!
//! ```text
//! ClubSelection + SwingParams
//!     │  ImpactModel::calculate_impact
//!     ▼
//! LaunchConditions
//!     │  BallFlight::launch_ball
//!     ▼
//! Flight (Launched, one sample at t = 0)
//!     │  BallFlight::simulate
//!     ▼
//! Flight (Complete or TimedOut)
//!     │  Flight::results
//!     ▼
//! SimulationResult (display units)
//! ```
//!
//! Every launch produces a fresh [`Flight`], so a [`BallFlight`] can be reused
//! for any number of independent shots.
//!
//! ## Phases
//!
//! ```text
//! Ready ─launch─► Launched ─step─► Ascending ─vy ≤ 0─► Descending ─y ≤ 0─► Complete
//!                                                          │
//!                                        15 s elapsed ─────┴──────────────► TimedOut
//! ```

use serde::{Deserialize, Serialize};

use crate::club::{ClubSelection, ImpactModel, ImpactResult};
use crate::constants::{MAX_FLIGHT_TIME, ROLL_MULTIPLIER, TIME_STEP};
use crate::error::GolfResult;
use crate::forces::GolfForces;
use crate::integrator::{ForceModel, RungeKutta4};
use crate::shot::ShotShape;
use crate::swing::SwingParams;
use crate::types::{BallProperties, BallState, FlightMetrics, SpinState, TrajectoryPoint, Vec3};
use crate::units;

// =============================================================================
// Launch Conditions
// =============================================================================

/// Ball state leaving the face, in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConditions {
    /// mph
    pub ball_speed: f64,
    /// Elevation, degrees
    pub launch_angle: f64,
    /// Azimuth, degrees, positive right
    pub launch_direction: f64,
    /// rpm; spin stays zero when absent
    #[serde(default)]
    pub spin_rate: Option<f64>,
    /// degrees; axis stays zero when absent
    #[serde(default)]
    pub spin_axis: Option<f64>,
}

impl LaunchConditions {
    /// Launch without spin.
    pub fn new(ball_speed: f64, launch_angle: f64, launch_direction: f64) -> Self {
        Self {
            ball_speed,
            launch_angle,
            launch_direction,
            spin_rate: None,
            spin_axis: None,
        }
    }

    pub fn with_spin(mut self, rate: f64, axis: f64) -> Self {
        self.spin_rate = Some(rate);
        self.spin_axis = Some(axis);
        self
    }

    /// Initial SI state at the origin.
    pub fn initial_state(&self) -> BallState {
        let speed = units::mph_to_ms(self.ball_speed);
        let elevation = units::degrees_to_radians(self.launch_angle);
        let azimuth = units::degrees_to_radians(self.launch_direction);

        BallState {
            pos: Vec3::ZERO,
            vel: Vec3::from_spherical(speed, elevation, azimuth),
            spin: SpinState {
                rate: self.spin_rate.unwrap_or(0.0),
                axis: self.spin_axis.unwrap_or(0.0),
            },
        }
    }
}

impl From<ImpactResult> for LaunchConditions {
    fn from(impact: ImpactResult) -> Self {
        Self::new(impact.ball_speed, impact.launch_angle, impact.launch_direction)
            .with_spin(impact.spin_rate, impact.spin_axis)
    }
}

// =============================================================================
// Flight State
// =============================================================================

/// Where a flight is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightPhase {
    #[default]
    Ready,
    Launched,
    Ascending,
    Descending,
    /// Landed; metrics are frozen
    Complete,
    /// Still airborne at the time cap; distance metrics are not set
    TimedOut,
}

impl FlightPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlightPhase::Complete | FlightPhase::TimedOut)
    }
}

/// One recorded integration sample, SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSample {
    pub state: BallState,
    pub time: f64,
}

/// State of a single shot, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flight {
    state: BallState,
    time: f64,
    samples: Vec<FlightSample>,
    metrics: FlightMetrics,
    phase: FlightPhase,
    has_reached_apex: bool,
}

impl Flight {
    /// A flight that has not been launched.
    pub fn ready() -> Self {
        Self::default()
    }

    fn launched(initial: BallState) -> Self {
        let max_samples = (MAX_FLIGHT_TIME / TIME_STEP).round() as usize + 1;
        let mut samples = Vec::with_capacity(max_samples);
        samples.push(FlightSample {
            state: initial,
            time: 0.0,
        });

        Self {
            state: initial,
            time: 0.0,
            samples,
            metrics: FlightMetrics::default(),
            phase: FlightPhase::Launched,
            has_reached_apex: false,
        }
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == FlightPhase::Complete
    }

    pub fn has_reached_apex(&self) -> bool {
        self.has_reached_apex
    }

    /// Current SI state.
    pub fn state(&self) -> &BallState {
        &self.state
    }

    /// Elapsed flight time (s).
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Metrics in SI units.
    pub fn metrics(&self) -> &FlightMetrics {
        &self.metrics
    }

    /// Recorded samples in SI units, oldest first.
    pub fn samples(&self) -> &[FlightSample] {
        &self.samples
    }

    /// Record a new state and update apex/landing bookkeeping.
    fn advance(&mut self, state: BallState, time: f64) {
        self.state = state;
        self.time = time;
        self.samples.push(FlightSample { state, time });
        self.update_metrics();
    }

    fn update_metrics(&mut self) {
        let pos = self.state.pos;
        let vel = self.state.vel;

        if !self.has_reached_apex {
            if vel.y > 0.0 {
                self.metrics.apex_height = self.metrics.apex_height.max(pos.y);
                self.phase = FlightPhase::Ascending;
            } else {
                self.has_reached_apex = true;
                self.metrics.apex_height = pos.y;
                self.metrics.apex_distance = pos.horizontal_magnitude();
                self.phase = FlightPhase::Descending;
                log::debug!(
                    "apex {:.2} m at {:.2} m downrange, t={:.2}s",
                    pos.y,
                    self.metrics.apex_distance,
                    self.time
                );
            }
        }

        if pos.y <= 0.0 && self.time > 0.0 {
            let carry = pos.horizontal_magnitude();
            self.metrics.flight_time = self.time;
            self.metrics.carry_distance = carry;
            self.metrics.total_distance = carry * ROLL_MULTIPLIER;
            self.metrics.final_lateral_distance = pos.z;
            self.phase = FlightPhase::Complete;
            log::debug!(
                "landed after {:.2}s, carry {:.2} m, lateral {:.2} m",
                self.time,
                carry,
                pos.z
            );
        }
    }

    /// Convert to display units.
    ///
    /// `ball_speed`, `launch_angle` and `launch_direction` are taken from the
    /// final velocity, i.e. the ball's state at landing (or at the time cap),
    /// not the conditions it was launched with.
    pub fn results(&self) -> SimulationResult {
        let landed = self.is_complete();
        let metrics = self.metrics;
        let vel = self.state.vel;

        let ball_speed = units::ms_to_mph(vel.magnitude());
        let launch_angle = units::radians_to_degrees(vel.elevation());
        let launch_direction = units::radians_to_degrees(vel.azimuth());

        SimulationResult {
            apex_height: units::meters_to_yards(metrics.apex_height),
            apex_distance: units::meters_to_yards(metrics.apex_distance),
            flight_time: metrics.flight_time,
            carry_distance: units::meters_to_yards(metrics.carry_distance),
            total_distance: units::meters_to_yards(metrics.total_distance),
            final_lateral_distance: units::meters_to_yards(metrics.final_lateral_distance),
            ball_speed,
            launch_angle,
            launch_direction,
            spin_rate: self.state.spin.rate,
            spin_axis: self.state.spin.axis,
            shot_shape: ShotShape::classify(launch_direction, self.state.spin.axis),
            landed,
            trajectory: self
                .samples
                .iter()
                .map(|sample| TrajectoryPoint {
                    position: units::position_to_display(sample.state.pos),
                    velocity: units::velocity_to_display(sample.state.vel),
                    spin: sample.state.spin,
                    time: sample.time,
                })
                .collect(),
        }
    }
}

/// Everything a caller needs to display a shot, in yards / mph / degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub apex_height: f64,
    pub apex_distance: f64,
    /// Seconds; zero when the ball did not land
    pub flight_time: f64,
    pub carry_distance: f64,
    pub total_distance: f64,
    pub final_lateral_distance: f64,
    /// Speed at the end of the flight (mph)
    pub ball_speed: f64,
    /// Elevation of the final velocity (deg)
    pub launch_angle: f64,
    /// Azimuth of the final velocity (deg)
    pub launch_direction: f64,
    pub spin_rate: f64,
    pub spin_axis: f64,
    pub shot_shape: ShotShape,
    /// False when the time cap stopped the flight; distance metrics are then zero
    pub landed: bool,
    pub trajectory: Vec<TrajectoryPoint>,
}

// =============================================================================
// Simulator
// =============================================================================

/// Flight simulator: ball properties plus a force model.
///
/// Holds no per-shot state; each launch returns its own [`Flight`].
#[derive(Debug, Clone)]
pub struct BallFlight {
    ball: BallProperties,
    forces: GolfForces,
    time_step: f64,
    max_flight_time: f64,
}

impl Default for BallFlight {
    fn default() -> Self {
        Self::new()
    }
}

impl BallFlight {
    pub fn new() -> Self {
        Self {
            ball: BallProperties::default(),
            forces: GolfForces::default(),
            time_step: TIME_STEP,
            max_flight_time: MAX_FLIGHT_TIME,
        }
    }

    /// Replace the ball used for subsequent launches.
    pub fn with_ball_properties(mut self, ball: BallProperties) -> Self {
        self.ball = ball;
        self
    }

    pub fn set_ball_properties(&mut self, ball: BallProperties) {
        self.ball = ball;
    }

    pub fn with_forces(mut self, forces: GolfForces) -> Self {
        self.forces = forces;
        self
    }

    pub fn ball_properties(&self) -> &BallProperties {
        &self.ball
    }

    /// Launch directly from launch conditions.
    pub fn launch_ball(&self, launch: &LaunchConditions) -> Flight {
        let initial = launch.initial_state();
        log::debug!(
            "launch {:.1} mph, {:.1}° up, {:.1}° right, {:.0} rpm @ {:.1}°",
            launch.ball_speed,
            launch.launch_angle,
            launch.launch_direction,
            initial.spin.rate,
            initial.spin.axis
        );
        Flight::launched(initial)
    }

    /// Resolve the club, compute the strike, and launch.
    ///
    /// Fails before any flight exists if the club does not resolve.
    pub fn launch_with_club(
        &self,
        club: &ClubSelection,
        swing: &SwingParams,
    ) -> GolfResult<Flight> {
        let model = ImpactModel::for_club(club)?;
        let impact = model.calculate_impact(swing);
        Ok(self.launch_ball(&LaunchConditions::from(impact)))
    }

    /// Net force on the ball in the given state (N).
    pub fn calculate_forces(&self, state: &BallState) -> Vec3 {
        self.forces.force(state, &self.ball)
    }

    /// Integrate until the ball lands or the time cap is reached.
    ///
    /// A flight that is already terminal (or was never launched) is returned
    /// unchanged.
    pub fn simulate(&self, mut flight: Flight) -> Flight {
        if flight.phase == FlightPhase::Ready || flight.phase.is_terminal() {
            return flight;
        }

        let dt = self.time_step;
        let max_steps = (self.max_flight_time / dt).round() as usize;
        let mut step = flight.samples.len() - 1;

        while !flight.is_complete() && step < max_steps {
            let next = RungeKutta4::step_ball(&flight.state, &self.ball, &self.forces, dt);
            step += 1;
            flight.advance(next, step as f64 * dt);
        }

        if !flight.is_complete() {
            flight.phase = FlightPhase::TimedOut;
            log::warn!(
                "ball still airborne after {:.1}s at height {:.2} m; distance metrics unset",
                flight.time,
                flight.state.pos.y
            );
        }

        flight
    }

    /// Launch with a club, fly to completion and report.
    pub fn run(&self, club: &ClubSelection, swing: &SwingParams) -> GolfResult<SimulationResult> {
        let flight = self.launch_with_club(club, swing)?;
        Ok(self.simulate(flight).results())
    }

    /// Launch from conditions, fly to completion and report.
    pub fn run_launch(&self, launch: &LaunchConditions) -> SimulationResult {
        self.simulate(self.launch_ball(launch)).results()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::ClubConfig;
    use crate::constants::{METERS_TO_YARDS, MS_TO_MPH};
    use crate::error::GolfError;
    use crate::swing::ImpactLocation;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn seven_iron_swing() -> SwingParams {
        SwingParams::new(90.0, -4.0, 0.0, 0.0)
    }

    #[test]
    fn test_ready_flight_does_nothing() {
        let sim = BallFlight::new();
        let flight = sim.simulate(Flight::ready());
        assert_eq!(flight.phase(), FlightPhase::Ready);
        assert!(flight.samples().is_empty());
    }

    #[test]
    fn test_launch_velocity_decomposition() {
        let sim = BallFlight::new();
        let flight = sim.launch_ball(&LaunchConditions::new(100.0, 12.0, -3.0));
        let vel = flight.state().vel;
        let speed = 100.0 * 0.44704;

        assert_relative_eq!(vel.magnitude(), speed, epsilon = 1e-9);
        assert_relative_eq!(vel.y, speed * 12f64.to_radians().sin(), epsilon = 1e-9);
        assert_relative_eq!(
            vel.x,
            speed * 12f64.to_radians().cos() * (-3f64).to_radians().cos(),
            epsilon = 1e-9
        );
        assert!(vel.z < 0.0, "Negative direction launches left");
    }

    #[test]
    fn test_launch_records_initial_sample() {
        let sim = BallFlight::new();
        let flight = sim.launch_ball(&LaunchConditions::new(120.0, 15.0, 0.0).with_spin(6500.0, 2.0));

        assert_eq!(flight.phase(), FlightPhase::Launched);
        assert_eq!(flight.samples().len(), 1);
        let first = flight.samples()[0];
        assert_eq!(first.time, 0.0);
        assert_eq!(first.state.pos, Vec3::ZERO);
        assert_eq!(first.state.spin, SpinState::new(6500.0, 2.0));
    }

    #[test]
    fn test_spin_defaults_to_zero() {
        let flight = BallFlight::new().launch_ball(&LaunchConditions::new(120.0, 15.0, 0.0));
        assert_eq!(flight.state().spin, SpinState::NONE);
    }

    #[test]
    fn test_full_flight_lands() {
        init_logging();
        let sim = BallFlight::new();
        let flight = sim.simulate(sim.launch_ball(&LaunchConditions::new(120.0, 18.0, 0.0)));

        assert_eq!(flight.phase(), FlightPhase::Complete);
        assert!(flight.has_reached_apex());

        let samples = flight.samples();
        let last = samples[samples.len() - 1];
        let before = samples[samples.len() - 2];
        assert!(last.state.pos.y <= 0.0);
        assert!(before.state.pos.y > 0.0);

        let metrics = flight.metrics();
        assert!(metrics.carry_distance > 0.0);
        assert_relative_eq!(metrics.total_distance, metrics.carry_distance * 1.2, epsilon = 1e-12);
        assert_relative_eq!(metrics.flight_time, last.time, epsilon = 1e-12);
        assert!(metrics.final_lateral_distance.abs() < 1e-9);
    }

    #[test]
    fn test_apex_tracks_highest_sample() {
        let sim = BallFlight::new();
        let flight = sim.simulate(sim.launch_ball(&LaunchConditions::new(110.0, 25.0, 5.0)));

        let highest = flight
            .samples()
            .iter()
            .map(|s| s.state.pos.y)
            .fold(f64::MIN, f64::max);
        let apex = flight.metrics().apex_height;

        // Apex is sampled on the first descending step, within one step of the peak
        assert!(apex <= highest);
        assert!(highest - apex < 0.01, "apex {} vs highest {}", apex, highest);
        assert!(flight.metrics().apex_distance > 0.0);
        assert!(flight.metrics().apex_distance < flight.metrics().carry_distance);
    }

    #[test]
    fn test_time_cap_without_landing() {
        init_logging();
        // No gravity: the ball never comes down
        let sim = BallFlight::new().with_forces(GolfForces {
            enable_gravity: false,
            ..GolfForces::default()
        });
        let flight = sim.simulate(sim.launch_ball(&LaunchConditions::new(100.0, 10.0, 0.0)));

        assert_eq!(flight.phase(), FlightPhase::TimedOut);
        assert_eq!(flight.samples().len(), 1501);
        assert_relative_eq!(flight.time(), 15.0, epsilon = 1e-9);

        let results = flight.results();
        assert!(!results.landed);
        assert_eq!(results.carry_distance, 0.0);
        assert_eq!(results.total_distance, 0.0);
        assert_eq!(results.flight_time, 0.0);
    }

    #[test]
    fn test_simulate_is_idempotent_once_terminal() {
        let sim = BallFlight::new();
        let done = sim.simulate(sim.launch_ball(&LaunchConditions::new(100.0, 20.0, 0.0)));
        let again = sim.simulate(done.clone());
        assert_eq!(done, again);
    }

    #[test]
    fn test_results_unit_conversion() {
        let sim = BallFlight::new();
        let flight = sim.simulate(sim.launch_ball(&LaunchConditions::new(130.0, 14.0, 2.0)));
        let metrics = *flight.metrics();
        let results = flight.results();

        assert!(results.landed);
        assert_relative_eq!(results.carry_distance, metrics.carry_distance * METERS_TO_YARDS);
        assert_relative_eq!(results.apex_height, metrics.apex_height * METERS_TO_YARDS);
        assert_relative_eq!(
            results.final_lateral_distance,
            metrics.final_lateral_distance * METERS_TO_YARDS
        );
        assert_eq!(results.trajectory.len(), flight.samples().len());

        let last_sample = flight.samples()[flight.samples().len() - 1];
        let last_point = results.trajectory[results.trajectory.len() - 1];
        assert_relative_eq!(last_point.position.x, last_sample.state.pos.x * METERS_TO_YARDS);
        assert_relative_eq!(last_point.velocity.y, last_sample.state.vel.y * MS_TO_MPH);
        assert_eq!(last_point.time, last_sample.time);
    }

    #[test]
    fn test_reported_launch_metrics_are_terminal_kinematics() {
        // Known discrepancy: "launch" fields describe the landing state.
        let sim = BallFlight::new();
        let launch = LaunchConditions::new(120.0, 16.0, 0.0);
        let flight = sim.simulate(sim.launch_ball(&launch));
        let results = flight.results();

        let terminal = flight.state().vel;
        assert_relative_eq!(results.ball_speed, terminal.magnitude() * MS_TO_MPH);
        assert!(results.ball_speed < launch.ball_speed);
        assert!(results.launch_angle < 0.0, "Descending at landing");
        assert!(results.launch_angle < launch.launch_angle);
    }

    #[test]
    fn test_spin_held_constant() {
        let sim = BallFlight::new();
        let launch = LaunchConditions::new(110.0, 20.0, 0.0).with_spin(7200.0, -4.0);
        let results = sim.run_launch(&launch);

        assert!(results
            .trajectory
            .iter()
            .all(|p| p.spin == SpinState::new(7200.0, -4.0)));
        assert_eq!(results.spin_rate, 7200.0);
        assert_eq!(results.spin_axis, -4.0);
    }

    #[test]
    fn test_relaunch_is_independent() {
        let sim = BallFlight::new();
        let swing = seven_iron_swing();
        let blade = ClubSelection::from("BLADE_7IRON");

        let first = sim.run(&blade, &swing).expect("first run");
        let _other = sim
            .run(&ClubSelection::from("DRIVER_STANDARD"), &SwingParams::new(105.0, 0.0, 0.0, 0.0))
            .expect("driver run");
        let second = sim.run(&blade, &swing).expect("second run");

        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_club_fails_before_launch() {
        let sim = BallFlight::new();
        let result = sim.launch_with_club(&ClubSelection::from("SPOON_3WOOD"), &seven_iron_swing());
        assert!(matches!(result, Err(GolfError::UnknownClub(name)) if name == "SPOON_3WOOD"));
    }

    #[test]
    fn test_blade_seven_iron_shot() {
        let sim = BallFlight::new();
        let results = sim
            .run(&ClubSelection::from("BLADE_7IRON"), &seven_iron_swing())
            .expect("blade shot");

        assert!(results.landed);
        assert!(results.carry_distance > 50.0, "carry {}", results.carry_distance);
        assert!(results.apex_height > 0.0);
        assert!(results.final_lateral_distance.abs() < 1e-6);
        assert_eq!(results.shot_shape, ShotShape::Straight);
    }

    #[test]
    fn test_custom_club_launch() {
        let sim = BallFlight::new();
        let custom = ClubSelection::from(ClubConfig {
            loft: 22.0,
            ..ClubConfig::default()
        });
        let swing = SwingParams::new(95.0, -2.0, 0.0, 0.0).with_impact(ImpactLocation::new(-4.0, 2.0));

        let flight = sim.launch_with_club(&custom, &swing).expect("custom club");
        assert_eq!(flight.phase(), FlightPhase::Launched);
        // heel strike tilts the axis toward slice
        assert!(flight.state().spin.axis > 0.0);
    }

    #[test]
    fn test_heavier_ball_carries_farther() {
        let launch = LaunchConditions::new(120.0, 15.0, 0.0);
        let standard = BallFlight::new().run_launch(&launch);

        let mut heavy_sim = BallFlight::new();
        heavy_sim.set_ball_properties(BallProperties {
            mass: 0.06,
            ..BallProperties::default()
        });
        let heavy = heavy_sim.run_launch(&launch);

        assert!(heavy.carry_distance > standard.carry_distance);
        assert_eq!(heavy_sim.ball_properties().mass, 0.06);
    }

    #[test]
    fn test_calculate_forces_at_rest_is_gravity() {
        let sim = BallFlight::new();
        let force = sim.calculate_forces(&BallState::at_rest(Vec3::new(0.0, 5.0, 0.0)));
        assert_relative_eq!(force.y, -9.81 * 0.0459, epsilon = 1e-12);
        assert_eq!(force.x, 0.0);
    }

    #[test]
    fn test_results_serialize_camel_case() {
        let results = BallFlight::new().run_launch(&LaunchConditions::new(90.0, 20.0, 0.0));
        let yaml = serde_yaml::to_string(&results).expect("serialize results");
        assert!(yaml.contains("carryDistance"));
        assert!(yaml.contains("finalLateralDistance"));
        assert!(yaml.contains("shotShape"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Any upward launch lands inside the time cap, and the landing sample
        /// is the first one at or below the ground.
        #[test]
        fn prop_upward_launch_lands(
            speed in 30.0f64..180.0,
            angle in 1.0f64..89.0,
            direction in -20.0f64..20.0,
        ) {
            let sim = BallFlight::new();
            let flight = sim.simulate(sim.launch_ball(&LaunchConditions::new(speed, angle, direction)));

            prop_assert!(flight.is_complete());
            prop_assert!(flight.time() <= MAX_FLIGHT_TIME + 1e-9);

            let samples = flight.samples();
            prop_assert!(samples.len() >= 3);
            prop_assert!(samples[samples.len() - 1].state.pos.y <= 0.0);
            prop_assert!(samples[samples.len() - 2].state.pos.y > 0.0);
            prop_assert!(samples[..samples.len() - 1]
                .iter()
                .skip(1)
                .all(|s| s.state.pos.y > 0.0));
        }
    }
}
