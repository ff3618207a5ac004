//! # Golf Core
//!
//! A golf ball flight engine: club and swing in, launch conditions and a
//! trajectory out.
//!
//! ## Architecture
//!
//! - `constants`: Physical constants and unit conversion factors
//! - `units`: Conversions between SI and display units (mph, yards, degrees)
//! - `types`: Core data structures (Vec3, ball state, trajectory samples)
//! - `integrator`: Numerical integration (RK4)
//! - `forces`: Physical forces (gravity, drag, inert spin force)
//! - `swing`: Swing parameters and validation
//! - `club`: Club presets and the impact model
//! - `flight`: Flight state machine and the simulation loop
//! - `shot`: Shot shape classification and club comparison
//! - `equipment`: YAML-based club and ball loader
//! - `error`: Error types
//!
//! ## Example
//!
//! ```ignore
//! use golf_core::{BallFlight, ClubSelection, SwingParams};
//!
//! let swing = SwingParams::new(85.0, -4.0, 0.0, 0.0);
//! let result = BallFlight::new().run(&ClubSelection::from("BLADE_7IRON"), &swing)?;
//! println!("carry {:.1} yd", result.carry_distance);
//! ```

pub mod club;
pub mod constants;
pub mod equipment;
pub mod error;
pub mod flight;
pub mod forces;
pub mod integrator;
pub mod shot;
pub mod swing;
pub mod types;
pub mod units;

pub use club::{ClubConfig, ClubDesign, ClubSelection, ImpactModel, ImpactResult, PRESET_NAMES};
pub use equipment::EquipmentLoader;
pub use error::{EquipmentError, GolfError, GolfResult};
pub use flight::{BallFlight, Flight, FlightPhase, LaunchConditions, SimulationResult};
pub use shot::{compare_clubs, compare_irons, ClubRun, ShotShape};
pub use swing::{ImpactLocation, SwingInput, SwingParams};
pub use types::{BallProperties, BallState, SpinState, TrajectoryPoint, Vec3};
