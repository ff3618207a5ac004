//! Swing descriptions fed to the impact model.
//!
//! [`SwingParams`] is the typed form the impact model consumes. Callers that
//! assemble swings from loose data (form fields, YAML, Python kwargs) build a
//! [`SwingInput`] and convert it, which is where missing fields are reported.

use serde::{Deserialize, Serialize};

use crate::error::{GolfError, GolfResult};

/// Where the ball met the face, in mm from the face center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImpactLocation {
    /// Heel (-) to toe (+)
    pub x: f64,
    /// Low (-) to high (+)
    pub y: f64,
}

impl ImpactLocation {
    /// Usable half-width of the face in each direction
    pub const FACE_HALF_WIDTH_MM: f64 = 15.0;

    pub const CENTER: ImpactLocation = ImpactLocation { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Maps a face fraction to mm from center.
    ///
    /// `fx` runs 0 (heel edge) to 1 (toe edge), `fy` runs 0 (top edge) to
    /// 1 (bottom edge). Fractions are clamped to the face.
    pub fn from_face_fraction(fx: f64, fy: f64) -> Self {
        let span = 2.0 * Self::FACE_HALF_WIDTH_MM;
        let fx = fx.clamp(0.0, 1.0);
        let fy = fy.clamp(0.0, 1.0);
        Self {
            x: fx * span - Self::FACE_HALF_WIDTH_MM,
            y: Self::FACE_HALF_WIDTH_MM - fy * span,
        }
    }

    /// Distance from the face center in mm
    pub fn distance_from_center(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// A fully specified swing.
///
/// Angles are in degrees, speed in mph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingParams {
    pub club_speed: f64,
    pub attack_angle: f64,
    pub club_path: f64,
    pub face_angle: f64,
    #[serde(default)]
    pub impact_location: ImpactLocation,
    /// Defaults to `face_angle - club_path`
    #[serde(default)]
    pub face_to_path: Option<f64>,
    /// When set, replaces the loft computed from the club and attack angle
    #[serde(default)]
    pub dynamic_loft: Option<f64>,
    #[serde(default)]
    pub shaft_lean: Option<f64>,
}

impl SwingParams {
    /// A center-face swing with no optional overrides.
    pub fn new(club_speed: f64, attack_angle: f64, club_path: f64, face_angle: f64) -> Self {
        Self {
            club_speed,
            attack_angle,
            club_path,
            face_angle,
            impact_location: ImpactLocation::CENTER,
            face_to_path: None,
            dynamic_loft: None,
            shaft_lean: None,
        }
    }

    pub fn with_impact(mut self, impact_location: ImpactLocation) -> Self {
        self.impact_location = impact_location;
        self
    }

    pub fn with_dynamic_loft(mut self, dynamic_loft: f64) -> Self {
        self.dynamic_loft = Some(dynamic_loft);
        self
    }

    pub fn with_shaft_lean(mut self, shaft_lean: f64) -> Self {
        self.shaft_lean = Some(shaft_lean);
        self
    }

    pub fn with_face_to_path(mut self, face_to_path: f64) -> Self {
        self.face_to_path = Some(face_to_path);
        self
    }

    /// Face-to-path, derived from face angle and path when not given.
    pub fn resolved_face_to_path(&self) -> f64 {
        self.face_to_path.unwrap_or(self.face_angle - self.club_path)
    }

    /// Dynamic loft delivered from the given loft, derived as
    /// `loft + attack_angle` when not given.
    pub fn resolved_dynamic_loft(&self, loft: f64) -> f64 {
        self.dynamic_loft.unwrap_or(loft + self.attack_angle)
    }
}

/// A swing as received from outside, with every field optional.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwingInput {
    pub club_speed: Option<f64>,
    pub attack_angle: Option<f64>,
    pub club_path: Option<f64>,
    pub face_angle: Option<f64>,
    pub impact_location: Option<ImpactLocation>,
    pub face_to_path: Option<f64>,
    pub dynamic_loft: Option<f64>,
    pub shaft_lean: Option<f64>,
}

impl SwingInput {
    /// Checks required fields in order and reports the first one missing.
    pub fn validate(&self) -> GolfResult<SwingParams> {
        let club_speed = self
            .club_speed
            .ok_or(GolfError::MissingParameter("clubSpeed"))?;
        let attack_angle = self
            .attack_angle
            .ok_or(GolfError::MissingParameter("attackAngle"))?;
        let club_path = self
            .club_path
            .ok_or(GolfError::MissingParameter("clubPath"))?;
        let face_angle = self
            .face_angle
            .ok_or(GolfError::MissingParameter("faceAngle"))?;
        let impact_location = self
            .impact_location
            .ok_or(GolfError::MissingParameter("impactLocation"))?;

        Ok(SwingParams {
            club_speed,
            attack_angle,
            club_path,
            face_angle,
            impact_location,
            face_to_path: self.face_to_path,
            dynamic_loft: self.dynamic_loft,
            shaft_lean: self.shaft_lean,
        })
    }
}

impl TryFrom<SwingInput> for SwingParams {
    type Error = GolfError;

    fn try_from(input: SwingInput) -> GolfResult<Self> {
        input.validate()
    }
}

impl From<SwingParams> for SwingInput {
    fn from(params: SwingParams) -> Self {
        Self {
            club_speed: Some(params.club_speed),
            attack_angle: Some(params.attack_angle),
            club_path: Some(params.club_path),
            face_angle: Some(params.face_angle),
            impact_location: Some(params.impact_location),
            face_to_path: params.face_to_path,
            dynamic_loft: params.dynamic_loft,
            shaft_lean: params.shaft_lean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn complete_input() -> SwingInput {
        SwingParams::new(90.0, -4.0, 1.0, 3.0)
            .with_impact(ImpactLocation::new(5.0, -2.0))
            .into()
    }

    #[test]
    fn test_validate_complete_input() {
        let params = complete_input().validate().expect("valid swing");
        assert_eq!(params.club_speed, 90.0);
        assert_eq!(params.impact_location, ImpactLocation::new(5.0, -2.0));
    }

    #[test]
    fn test_missing_fields_are_named() {
        let cases: [(fn(&mut SwingInput), &str); 5] = [
            (|s: &mut SwingInput| s.club_speed = None, "clubSpeed"),
            (|s: &mut SwingInput| s.attack_angle = None, "attackAngle"),
            (|s: &mut SwingInput| s.club_path = None, "clubPath"),
            (|s: &mut SwingInput| s.face_angle = None, "faceAngle"),
            (|s: &mut SwingInput| s.impact_location = None, "impactLocation"),
        ];

        for (clear, field) in cases {
            let mut input = complete_input();
            clear(&mut input);
            match SwingParams::try_from(input) {
                Err(GolfError::MissingParameter(name)) => assert_eq!(name, field),
                other => panic!("Expected MissingParameter({}), got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_first_missing_field_reported() {
        let input = SwingInput {
            face_angle: Some(0.0),
            ..SwingInput::default()
        };
        assert!(matches!(
            input.validate(),
            Err(GolfError::MissingParameter("clubSpeed"))
        ));
    }

    #[test]
    fn test_derived_defaults() {
        let swing = SwingParams::new(85.0, -3.0, 2.0, -1.5);
        assert_relative_eq!(swing.resolved_face_to_path(), -3.5);
        assert_relative_eq!(swing.resolved_dynamic_loft(34.0), 31.0);

        let explicit = swing.with_face_to_path(1.0).with_dynamic_loft(28.0);
        assert_eq!(explicit.resolved_face_to_path(), 1.0);
        assert_eq!(explicit.resolved_dynamic_loft(34.0), 28.0);
    }

    #[test]
    fn test_face_fraction_mapping() {
        let center = ImpactLocation::from_face_fraction(0.5, 0.5);
        assert_relative_eq!(center.x, 0.0);
        assert_relative_eq!(center.y, 0.0);

        let toe_high = ImpactLocation::from_face_fraction(1.0, 0.0);
        assert_eq!(toe_high, ImpactLocation::new(15.0, 15.0));

        let clamped = ImpactLocation::from_face_fraction(-1.0, 2.0);
        assert_eq!(clamped, ImpactLocation::new(-15.0, -15.0));
    }

    #[test]
    fn test_swing_input_from_yaml() {
        let yaml = "clubSpeed: 92\nattackAngle: -4\nclubPath: 0\nfaceAngle: 0\nimpactLocation: {x: 0, y: 0}\n";
        let input: SwingInput = serde_yaml::from_str(yaml).expect("swing yaml");
        let params = input.validate().expect("complete swing");
        assert_eq!(params.club_speed, 92.0);
        assert!(params.dynamic_loft.is_none());

        let partial: SwingInput = serde_yaml::from_str("clubSpeed: 92\n").expect("partial yaml");
        assert!(matches!(
            partial.validate(),
            Err(GolfError::MissingParameter("attackAngle"))
        ));
    }
}
