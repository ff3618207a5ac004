//! Club configuration and the impact model.
//!
//! The impact model turns a club and a swing into launch conditions using
//! empirical relations:
//!
//! - **Energy transfer**: ball speed is club speed times smash factor, less an
//!   efficiency loss that grows with distance from the face center
//! - **Gear effect**: off-center strikes tilt the spin axis (heel/toe) and
//!   scale the spin rate (high/low)
//! - **Spin generation**: spin rate grows with spin loft and club speed
//!
//! ```text
//!            toe (+x)
//!   high  ┌───────────┐
//!   (+y)  │     ●     │  ● = face center, impact location in mm from here
//!   low   └───────────┘
//!            heel (-x)
//! ```
//!
//! Club design changes every empirical coefficient. Designs outside the named
//! set fall through to neutral values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GolfError, GolfResult};
use crate::swing::{SwingInput, SwingParams};
use crate::types::Vec3;

// =============================================================================
// Club Design
// =============================================================================

/// Head construction, which keys every empirical table below.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClubDesign {
    Blade,
    CavityBack,
    GameImprovement,
    Hybrid,
    Modern,
    /// Any other label; takes the neutral branch of every table
    Other(String),
}

impl ClubDesign {
    pub fn as_str(&self) -> &str {
        match self {
            ClubDesign::Blade => "blade",
            ClubDesign::CavityBack => "cavity_back",
            ClubDesign::GameImprovement => "game_improvement",
            ClubDesign::Hybrid => "hybrid",
            ClubDesign::Modern => "modern",
            ClubDesign::Other(label) => label,
        }
    }

    /// Gear effect strength before sweet-spot scaling
    pub fn gear_effect_coefficient(&self) -> f64 {
        match self {
            ClubDesign::Blade => 1.2,
            ClubDesign::CavityBack => 0.8,
            ClubDesign::GameImprovement => 0.6,
            _ => 1.0,
        }
    }

    /// Fraction of energy lost per mm off center, before MOI scaling
    pub fn efficiency_loss_rate(&self) -> f64 {
        match self {
            ClubDesign::Blade => 0.08,
            ClubDesign::CavityBack => 0.05,
            ClubDesign::GameImprovement => 0.03,
            _ => 0.06,
        }
    }

    /// Launch angle adjustment
    pub fn launch_multiplier(&self) -> f64 {
        match self {
            ClubDesign::Blade => 0.95,
            ClubDesign::GameImprovement => 1.05,
            _ => 1.0,
        }
    }

    /// Effective loft adjustment
    pub fn loft_multiplier(&self) -> f64 {
        match self {
            ClubDesign::CavityBack => 1.02,
            _ => 1.0,
        }
    }
}

impl From<String> for ClubDesign {
    fn from(label: String) -> Self {
        match label.as_str() {
            "blade" => ClubDesign::Blade,
            "cavity_back" => ClubDesign::CavityBack,
            "game_improvement" => ClubDesign::GameImprovement,
            "hybrid" => ClubDesign::Hybrid,
            "modern" => ClubDesign::Modern,
            _ => ClubDesign::Other(label),
        }
    }
}

impl From<ClubDesign> for String {
    fn from(design: ClubDesign) -> Self {
        design.as_str().to_string()
    }
}

impl fmt::Display for ClubDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Club Configuration
// =============================================================================

/// Moment of inertia of the head about each axis (g·cm²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentOfInertia {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MomentOfInertia {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Default for MomentOfInertia {
    fn default() -> Self {
        Self::new(4500.0, 2500.0, 5000.0)
    }
}

/// Everything the impact model needs to know about a club.
///
/// Omitted fields in YAML take the [`Default`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClubConfig {
    #[serde(rename = "type")]
    pub club_type: String,
    /// Static loft (deg)
    pub loft: f64,
    /// Lie angle (deg)
    pub lie: f64,
    /// Head mass (g)
    pub head_weight: f64,
    /// Center of gravity offset from the face center (mm)
    pub cg: Vec3,
    pub moi: MomentOfInertia,
    pub design: ClubDesign,
    /// Face thickness (mm)
    pub face_thickness: f64,
    /// Energy transfer ceiling, ball speed / club speed on a perfect strike
    pub smash_factor: f64,
    pub spin_factor_coefficient: f64,
    /// Relative size of the forgiving area, > 0
    pub sweet_spot_size: f64,
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self {
            club_type: "custom".to_string(),
            loft: 10.5,
            lie: 56.0,
            head_weight: 200.0,
            cg: Vec3::ZERO,
            moi: MomentOfInertia::default(),
            design: ClubDesign::Blade,
            face_thickness: 2.8,
            smash_factor: 1.48,
            spin_factor_coefficient: 1.0,
            sweet_spot_size: 1.0,
        }
    }
}

/// Identifiers of the built-in presets, in display order.
pub const PRESET_NAMES: [&str; 5] = [
    "DRIVER_STANDARD",
    "BLADE_7IRON",
    "CAVITY_BACK_7IRON",
    "GAME_IMPROVEMENT_7IRON",
    "WEDGE_PITCHING",
];

impl ClubConfig {
    /// Look up a built-in preset by identifier.
    ///
    /// Fails with [`GolfError::UnknownClub`] when the identifier is not in
    /// [`PRESET_NAMES`].
    pub fn preset(name: &str) -> GolfResult<Self> {
        let config = match name {
            "DRIVER_STANDARD" => Self {
                club_type: "driver".to_string(),
                loft: 10.5,
                lie: 56.0,
                head_weight: 200.0,
                cg: Vec3::new(0.0, -2.0, 38.0),
                moi: MomentOfInertia::new(4500.0, 2500.0, 5000.0),
                design: ClubDesign::Modern,
                face_thickness: 2.8,
                smash_factor: 1.48,
                spin_factor_coefficient: 1.0,
                sweet_spot_size: 1.0,
            },
            "BLADE_7IRON" => Self {
                club_type: "iron".to_string(),
                loft: 34.0,
                lie: 62.5,
                head_weight: 262.0,
                cg: Vec3::new(0.0, 2.0, 5.0),
                moi: MomentOfInertia::new(2400.0, 1800.0, 2700.0),
                design: ClubDesign::Blade,
                face_thickness: 3.2,
                smash_factor: 1.38,
                spin_factor_coefficient: 1.1,
                sweet_spot_size: 0.8,
            },
            "CAVITY_BACK_7IRON" => Self {
                club_type: "iron".to_string(),
                loft: 32.0,
                lie: 62.5,
                head_weight: 258.0,
                cg: Vec3::new(0.0, -1.0, 8.0),
                moi: MomentOfInertia::new(2700.0, 2200.0, 3000.0),
                design: ClubDesign::CavityBack,
                face_thickness: 2.6,
                smash_factor: 1.4,
                spin_factor_coefficient: 0.95,
                sweet_spot_size: 1.0,
            },
            "GAME_IMPROVEMENT_7IRON" => Self {
                club_type: "iron".to_string(),
                loft: 30.0,
                lie: 63.0,
                head_weight: 255.0,
                cg: Vec3::new(0.0, -3.0, 12.0),
                moi: MomentOfInertia::new(3100.0, 2700.0, 3400.0),
                design: ClubDesign::GameImprovement,
                face_thickness: 2.2,
                smash_factor: 1.42,
                spin_factor_coefficient: 0.85,
                sweet_spot_size: 1.3,
            },
            "WEDGE_PITCHING" => Self {
                club_type: "wedge".to_string(),
                loft: 46.0,
                lie: 64.0,
                head_weight: 290.0,
                cg: Vec3::new(0.0, 1.0, 4.0),
                moi: MomentOfInertia::new(2300.0, 1700.0, 2600.0),
                design: ClubDesign::Blade,
                face_thickness: 3.0,
                smash_factor: 1.25,
                spin_factor_coefficient: 1.2,
                sweet_spot_size: 0.9,
            },
            _ => return Err(GolfError::UnknownClub(name.to_string())),
        };
        log::trace!("resolved club preset {}", name);
        Ok(config)
    }

    /// Typical attack angle for this kind of club: level for drivers, descending
    /// for everything struck off the turf.
    pub fn suggested_attack_angle(&self) -> f64 {
        if self.club_type.eq_ignore_ascii_case("driver") {
            0.0
        } else {
            -4.0
        }
    }

    /// A custom club built from loft, design and sweet spot.
    ///
    /// Spin factor and smash factor follow the design: blades 1.1 / 1.38,
    /// cavity backs 0.95 / 1.40, everything else 0.85 / 1.42. Remaining fields
    /// take the [`Default`] values.
    pub fn custom(loft: f64, design: ClubDesign, sweet_spot_size: f64) -> Self {
        let (spin_factor_coefficient, smash_factor) = match design {
            ClubDesign::Blade => (1.1, 1.38),
            ClubDesign::CavityBack => (0.95, 1.4),
            _ => (0.85, 1.42),
        };
        Self {
            loft,
            design,
            sweet_spot_size,
            spin_factor_coefficient,
            smash_factor,
            ..Self::default()
        }
    }

    /// Check the invariants the impact model divides by.
    ///
    /// Fails with [`GolfError::InvalidClub`] naming the first offending field.
    pub fn validate(&self) -> GolfResult<()> {
        if self.sweet_spot_size.is_nan() || self.sweet_spot_size <= 0.0 {
            return Err(GolfError::InvalidClub(format!(
                "sweetSpotSize must be positive, got {}",
                self.sweet_spot_size
            )));
        }
        if self.smash_factor.is_nan() || self.smash_factor <= 1.0 {
            return Err(GolfError::InvalidClub(format!(
                "smashFactor must be greater than 1, got {}",
                self.smash_factor
            )));
        }
        if self.moi.y.is_nan() || self.moi.y <= 0.0 {
            return Err(GolfError::InvalidClub(format!(
                "moi.y must be positive, got {}",
                self.moi.y
            )));
        }
        Ok(())
    }
}

/// A club chosen either by preset identifier or as a full configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ClubSelection {
    Preset(String),
    Custom(ClubConfig),
}

impl ClubSelection {
    /// Resolve to a concrete configuration.
    pub fn resolve(&self) -> GolfResult<ClubConfig> {
        match self {
            ClubSelection::Preset(name) => ClubConfig::preset(name),
            ClubSelection::Custom(config) => Ok(config.clone()),
        }
    }

    /// Short label: the preset identifier, or the custom club's type.
    pub fn label(&self) -> &str {
        match self {
            ClubSelection::Preset(name) => name,
            ClubSelection::Custom(config) => &config.club_type,
        }
    }
}

impl From<&str> for ClubSelection {
    fn from(name: &str) -> Self {
        ClubSelection::Preset(name.to_string())
    }
}

impl From<String> for ClubSelection {
    fn from(name: String) -> Self {
        ClubSelection::Preset(name)
    }
}

impl From<ClubConfig> for ClubSelection {
    fn from(config: ClubConfig) -> Self {
        ClubSelection::Custom(config)
    }
}

// =============================================================================
// Impact Model
// =============================================================================

/// Adjustments from an off-center strike.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GearEffect {
    /// Spin axis shift in degrees; toe strikes shift negative (hook)
    pub horizontal: f64,
    /// Fractional spin rate modifier; high strikes add spin
    pub vertical: f64,
}

/// Launch conditions produced by a strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResult {
    /// mph
    pub ball_speed: f64,
    /// Elevation, degrees
    pub launch_angle: f64,
    /// Azimuth, degrees, positive right
    pub launch_direction: f64,
    /// rpm
    pub spin_rate: f64,
    /// degrees, positive slice-leaning
    pub spin_axis: f64,
    /// Spin efficiency, cos(spin axis)
    pub efficiency: f64,
    pub compression: f64,
    /// Achieved ball speed / club speed
    pub smash_factor: f64,
}

/// Empirical strike model for one club.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactModel {
    config: ClubConfig,
}

/// Efficiency loss never exceeds this fraction of ball speed
pub const MAX_EFFICIENCY_LOSS: f64 = 0.30;

/// MOI (about the vertical axis) at which the loss rate is unscaled
const REFERENCE_MOI: f64 = 3000.0;

impl ImpactModel {
    /// Fails with [`GolfError::InvalidClub`] if the configuration does not
    /// pass [`ClubConfig::validate`].
    pub fn new(config: ClubConfig) -> GolfResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build a model from a preset identifier or custom configuration.
    pub fn for_club(club: &ClubSelection) -> GolfResult<Self> {
        Self::new(club.resolve()?)
    }

    pub fn config(&self) -> &ClubConfig {
        &self.config
    }

    /// Validate a loosely-typed swing, then compute the strike.
    pub fn calculate_impact_input(&self, swing: &SwingInput) -> GolfResult<ImpactResult> {
        let params = swing.validate()?;
        Ok(self.calculate_impact(&params))
    }

    /// Compute launch conditions for a swing.
    pub fn calculate_impact(&self, swing: &SwingParams) -> ImpactResult {
        let config = &self.config;
        let impact = swing.impact_location;

        let effective_loft = self.effective_loft(swing);
        let gear = self.gear_effect(swing);

        let efficiency_loss = self.efficiency_loss(impact.distance_from_center());
        let ball_speed = swing.club_speed * config.smash_factor * (1.0 - efficiency_loss);

        let launch_angle =
            (effective_loft * 0.8 + impact.y * 0.2) * config.design.launch_multiplier();
        let launch_direction = swing.face_angle * 0.85 + swing.club_path * 0.15;

        let spin_loft = effective_loft - swing.attack_angle;
        let spin_rate = (50.0 * spin_loft * swing.club_speed)
            * config.spin_factor_coefficient
            * (1.0 + gear.vertical);
        let spin_axis = swing.resolved_face_to_path() + gear.horizontal;
        let efficiency = spin_axis.to_radians().cos();

        let smash_factor = if swing.club_speed > 0.0 {
            ball_speed / swing.club_speed
        } else {
            0.0
        };

        ImpactResult {
            ball_speed,
            launch_angle,
            launch_direction,
            spin_rate: spin_rate.max(0.0),
            spin_axis,
            efficiency,
            compression: 0.2 * ball_speed,
            smash_factor,
        }
    }

    /// Loft presented at impact.
    ///
    /// An explicit dynamic loft wins; otherwise static loft plus attack angle
    /// less shaft lean. Cavity backs then get a small launch boost.
    pub fn effective_loft(&self, swing: &SwingParams) -> f64 {
        let delivered_loft = self.config.loft - swing.shaft_lean.unwrap_or(0.0);
        swing.resolved_dynamic_loft(delivered_loft) * self.config.design.loft_multiplier()
    }

    /// Gear effect for the swing's impact location.
    pub fn gear_effect(&self, swing: &SwingParams) -> GearEffect {
        let impact = swing.impact_location;
        let coefficient =
            self.config.design.gear_effect_coefficient() / self.config.sweet_spot_size;

        GearEffect {
            horizontal: -impact.x * 0.15 * coefficient,
            vertical: impact.y * 0.1 * coefficient,
        }
    }

    /// Fractional speed loss for a strike `distance` mm from center, capped at
    /// [`MAX_EFFICIENCY_LOSS`].
    pub fn efficiency_loss(&self, distance: f64) -> f64 {
        let moi_scale = (self.config.moi.y / REFERENCE_MOI).sqrt();
        let loss = self.config.design.efficiency_loss_rate() * distance / moi_scale;
        loss.min(MAX_EFFICIENCY_LOSS)
    }
}

// =============================================================================
// Tests
// =============================================================================
