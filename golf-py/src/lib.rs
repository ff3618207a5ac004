//! Python bindings for the golf-core flight engine.
//!
//! Provides a simple Python API:
//!
//! ```python
//! from golf_flight import BallFlight, simulate_shot
//!
//! shot = simulate_shot("BLADE_7IRON", club_speed=85.0)
//! print(f"{shot.carry_distance:.1} yd, {shot.shot_shape}")
//!
//! sim = BallFlight()
//! sim.launch_ball(150.0, 12.0, 0.0, spin_rate=2500.0)
//! for point in sim.simulate().trajectory:
//!     print(point.time, point.position.y)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use golf_core::club::{ClubConfig, ClubDesign, ClubSelection, PRESET_NAMES};
use golf_core::error::GolfError;
use golf_core::flight::{BallFlight as CoreBallFlight, Flight, LaunchConditions, SimulationResult};
use golf_core::shot;
use golf_core::swing::{ImpactLocation, SwingParams};
use golf_core::types::{BallProperties, TrajectoryPoint as CoreTrajectoryPoint, Vec3 as CoreVec3};

fn to_py_err(err: GolfError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Resolve a preset, reporting an unknown name as ValueError.
fn preset(club: &str) -> PyResult<ClubConfig> {
    ClubConfig::preset(club).map_err(to_py_err)
}

#[allow(clippy::too_many_arguments)]
fn swing_params(
    club_speed: f64,
    attack_angle: f64,
    club_path: f64,
    face_angle: f64,
    impact_x: f64,
    impact_y: f64,
    dynamic_loft: Option<f64>,
    shaft_lean: Option<f64>,
) -> SwingParams {
    let mut swing = SwingParams::new(club_speed, attack_angle, club_path, face_angle)
        .with_impact(ImpactLocation::new(impact_x, impact_y));
    swing.dynamic_loft = dynamic_loft;
    swing.shaft_lean = shaft_lean;
    swing
}

/// 3D vector in display units (yards or mph).
///
/// x is downrange, y is height, z is lateral (positive right).
#[pyclass]
#[derive(Clone, Copy)]
pub struct Vec3 {
    #[pyo3(get, set)]
    pub x: f64,
    #[pyo3(get, set)]
    pub y: f64,
    #[pyo3(get, set)]
    pub z: f64,
}

#[pymethods]
impl Vec3 {
    #[new]
    fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn __repr__(&self) -> String {
        format!("Vec3({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }

    fn magnitude(&self) -> f64 {
        CoreVec3::from(*self).magnitude()
    }

    fn to_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl From<CoreVec3> for Vec3 {
    fn from(v: CoreVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Vec3> for CoreVec3 {
    fn from(v: Vec3) -> Self {
        CoreVec3::new(v.x, v.y, v.z)
    }
}

/// One trajectory sample.
#[pyclass]
#[derive(Clone, Copy)]
pub struct TrajectoryPoint {
    #[pyo3(get)]
    pub position: Vec3,
    #[pyo3(get)]
    pub velocity: Vec3,
    /// rpm
    #[pyo3(get)]
    pub spin_rate: f64,
    /// degrees
    #[pyo3(get)]
    pub spin_axis: f64,
    #[pyo3(get)]
    pub time: f64,
}

#[pymethods]
impl TrajectoryPoint {
    fn __repr__(&self) -> String {
        format!(
            "TrajectoryPoint(t={:.2}, x={:.2}, y={:.2}, z={:.2})",
            self.time, self.position.x, self.position.y, self.position.z
        )
    }
}

impl From<&CoreTrajectoryPoint> for TrajectoryPoint {
    fn from(point: &CoreTrajectoryPoint) -> Self {
        Self {
            position: point.position.into(),
            velocity: point.velocity.into(),
            spin_rate: point.spin.rate,
            spin_axis: point.spin.axis,
            time: point.time,
        }
    }
}

/// Result of one simulated shot, in yards / mph / degrees.
///
/// `ball_speed`, `launch_angle` and `launch_direction` describe the ball at
/// the end of the flight.
#[pyclass]
#[derive(Clone)]
pub struct ShotResult {
    #[pyo3(get)]
    pub apex_height: f64,
    #[pyo3(get)]
    pub apex_distance: f64,
    #[pyo3(get)]
    pub flight_time: f64,
    #[pyo3(get)]
    pub carry_distance: f64,
    #[pyo3(get)]
    pub total_distance: f64,
    #[pyo3(get)]
    pub final_lateral_distance: f64,
    #[pyo3(get)]
    pub ball_speed: f64,
    #[pyo3(get)]
    pub launch_angle: f64,
    #[pyo3(get)]
    pub launch_direction: f64,
    #[pyo3(get)]
    pub spin_rate: f64,
    #[pyo3(get)]
    pub spin_axis: f64,
    #[pyo3(get)]
    pub shot_shape: String,
    #[pyo3(get)]
    pub description: String,
    #[pyo3(get)]
    pub landed: bool,
    #[pyo3(get)]
    pub trajectory: Vec<TrajectoryPoint>,
}

#[pymethods]
impl ShotResult {
    fn __repr__(&self) -> String {
        format!(
            "ShotResult(carry={:.1} yd, apex={:.1} yd, {})",
            self.carry_distance, self.apex_height, self.shot_shape
        )
    }
}

impl From<SimulationResult> for ShotResult {
    fn from(result: SimulationResult) -> Self {
        Self {
            apex_height: result.apex_height,
            apex_distance: result.apex_distance,
            flight_time: result.flight_time,
            carry_distance: result.carry_distance,
            total_distance: result.total_distance,
            final_lateral_distance: result.final_lateral_distance,
            ball_speed: result.ball_speed,
            launch_angle: result.launch_angle,
            launch_direction: result.launch_direction,
            spin_rate: result.spin_rate,
            spin_axis: result.spin_axis,
            shot_shape: result.shot_shape.to_string(),
            description: result.shot_shape.describe(result.spin_rate),
            landed: result.landed,
            trajectory: result.trajectory.iter().map(TrajectoryPoint::from).collect(),
        }
    }
}

/// Flight simulator holding the most recently launched ball.
///
/// Launch with one of the `launch_*` methods, then call `simulate`.
#[pyclass]
pub struct BallFlight {
    sim: CoreBallFlight,
    flight: Option<Flight>,
}

#[pymethods]
impl BallFlight {
    #[new]
    fn new() -> Self {
        Self {
            sim: CoreBallFlight::new(),
            flight: None,
        }
    }

    /// Launch from ball speed (mph) and angles (degrees).
    #[pyo3(signature = (ball_speed, launch_angle, launch_direction, spin_rate=None, spin_axis=None))]
    fn launch_ball(
        &mut self,
        ball_speed: f64,
        launch_angle: f64,
        launch_direction: f64,
        spin_rate: Option<f64>,
        spin_axis: Option<f64>,
    ) {
        let launch = LaunchConditions {
            ball_speed,
            launch_angle,
            launch_direction,
            spin_rate,
            spin_axis,
        };
        self.flight = Some(self.sim.launch_ball(&launch));
    }

    /// Launch with a preset club, e.g. "BLADE_7IRON".
    ///
    /// `attack_angle` defaults to the club's usual delivery: level for a
    /// driver, -4° for everything else.
    #[pyo3(signature = (
        club,
        club_speed,
        attack_angle=None,
        club_path=0.0,
        face_angle=0.0,
        impact_x=0.0,
        impact_y=0.0,
        dynamic_loft=None,
        shaft_lean=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn launch_with_club(
        &mut self,
        club: &str,
        club_speed: f64,
        attack_angle: Option<f64>,
        club_path: f64,
        face_angle: f64,
        impact_x: f64,
        impact_y: f64,
        dynamic_loft: Option<f64>,
        shaft_lean: Option<f64>,
    ) -> PyResult<()> {
        let config = preset(club)?;
        let swing = swing_params(
            club_speed,
            attack_angle.unwrap_or_else(|| config.suggested_attack_angle()),
            club_path,
            face_angle,
            impact_x,
            impact_y,
            dynamic_loft,
            shaft_lean,
        );
        let flight = self
            .sim
            .launch_with_club(&ClubSelection::from(club), &swing)
            .map_err(to_py_err)?;
        self.flight = Some(flight);
        Ok(())
    }

    /// Launch with a club described by loft, design and sweet spot.
    ///
    /// `design` is one of "blade", "cavity_back", "game_improvement",
    /// "hybrid", "modern"; any other label uses neutral coefficients. Spin and
    /// smash factor follow the design unless given explicitly.
    #[pyo3(signature = (
        loft,
        design,
        club_speed,
        attack_angle=-4.0,
        club_path=0.0,
        face_angle=0.0,
        impact_x=0.0,
        impact_y=0.0,
        sweet_spot_size=1.0,
        smash_factor=None,
        spin_factor=None,
        moi_y=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn launch_with_custom_club(
        &mut self,
        loft: f64,
        design: String,
        club_speed: f64,
        attack_angle: f64,
        club_path: f64,
        face_angle: f64,
        impact_x: f64,
        impact_y: f64,
        sweet_spot_size: f64,
        smash_factor: Option<f64>,
        spin_factor: Option<f64>,
        moi_y: Option<f64>,
    ) -> PyResult<()> {
        let mut config = ClubConfig::custom(loft, ClubDesign::from(design), sweet_spot_size);
        if let Some(smash_factor) = smash_factor {
            config.smash_factor = smash_factor;
        }
        if let Some(spin_factor) = spin_factor {
            config.spin_factor_coefficient = spin_factor;
        }
        if let Some(moi_y) = moi_y {
            config.moi.y = moi_y;
        }

        let swing = swing_params(
            club_speed,
            attack_angle,
            club_path,
            face_angle,
            impact_x,
            impact_y,
            None,
            None,
        );
        let flight = self
            .sim
            .launch_with_club(&ClubSelection::from(config), &swing)
            .map_err(to_py_err)?;
        self.flight = Some(flight);
        Ok(())
    }

    /// Replace the ball for subsequent launches. Omitted fields keep their
    /// current values.
    #[pyo3(signature = (mass=None, radius=None, compression_rate=None, core_design=None))]
    fn set_ball_properties(
        &mut self,
        mass: Option<f64>,
        radius: Option<f64>,
        compression_rate: Option<f64>,
        core_design: Option<String>,
    ) -> PyResult<()> {
        let current = self.sim.ball_properties();
        let ball = BallProperties {
            mass: mass.unwrap_or(current.mass),
            radius: radius.unwrap_or(current.radius),
            compression_rate: compression_rate.unwrap_or(current.compression_rate),
            core_design: core_design.unwrap_or_else(|| current.core_design.clone()),
        };
        ball.validate().map_err(to_py_err)?;
        self.sim.set_ball_properties(ball);
        Ok(())
    }

    /// Current ball as (mass kg, radius m, compression, core design).
    fn ball_properties(&self) -> (f64, f64, f64, String) {
        let ball = self.sim.ball_properties();
        (ball.mass, ball.radius, ball.compression_rate, ball.core_design.clone())
    }

    /// Fly the launched ball to completion.
    ///
    /// Raises ValueError if nothing has been launched since the last call.
    fn simulate(&mut self) -> PyResult<ShotResult> {
        let flight = self
            .flight
            .take()
            .ok_or_else(|| PyValueError::new_err("No ball launched"))?;
        Ok(self.sim.simulate(flight).results().into())
    }
}

/// Simulate one shot with a preset club.
///
/// `attack_angle` defaults to the club's usual delivery.
#[pyfunction]
#[pyo3(signature = (
    club,
    club_speed,
    attack_angle=None,
    club_path=0.0,
    face_angle=0.0,
    impact_x=0.0,
    impact_y=0.0,
    dynamic_loft=None,
    shaft_lean=None
))]
#[allow(clippy::too_many_arguments)]
fn simulate_shot(
    club: &str,
    club_speed: f64,
    attack_angle: Option<f64>,
    club_path: f64,
    face_angle: f64,
    impact_x: f64,
    impact_y: f64,
    dynamic_loft: Option<f64>,
    shaft_lean: Option<f64>,
) -> PyResult<ShotResult> {
    let config = preset(club)?;
    let swing = swing_params(
        club_speed,
        attack_angle.unwrap_or_else(|| config.suggested_attack_angle()),
        club_path,
        face_angle,
        impact_x,
        impact_y,
        dynamic_loft,
        shaft_lean,
    );
    CoreBallFlight::new()
        .run(&ClubSelection::from(club), &swing)
        .map(ShotResult::from)
        .map_err(to_py_err)
}

/// Blade, cavity back and game improvement 7-irons on the same swing.
///
/// Returns a list of `(club, ShotResult)` pairs.
#[pyfunction]
#[pyo3(signature = (club_speed, attack_angle=-4.0, club_path=0.0, face_angle=0.0, impact_x=0.0, impact_y=0.0))]
fn compare_irons(
    club_speed: f64,
    attack_angle: f64,
    club_path: f64,
    face_angle: f64,
    impact_x: f64,
    impact_y: f64,
) -> PyResult<Vec<(String, ShotResult)>> {
    let swing = swing_params(
        club_speed,
        attack_angle,
        club_path,
        face_angle,
        impact_x,
        impact_y,
        None,
        None,
    );
    let runs = shot::compare_irons(&swing).map_err(to_py_err)?;
    Ok(runs
        .into_iter()
        .map(|run| (run.club, ShotResult::from(run.result)))
        .collect())
}

/// Identifiers accepted wherever a preset club is expected.
#[pyfunction]
fn club_presets() -> Vec<&'static str> {
    PRESET_NAMES.to_vec()
}

/// Python module definition.
#[pymodule]
fn golf_flight(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Vec3>()?;
    m.add_class::<TrajectoryPoint>()?;
    m.add_class::<ShotResult>()?;
    m.add_class::<BallFlight>()?;
    m.add_function(wrap_pyfunction!(simulate_shot, m)?)?;
    m.add_function(wrap_pyfunction!(compare_irons, m)?)?;
    m.add_function(wrap_pyfunction!(club_presets, m)?)?;
    Ok(())
}
