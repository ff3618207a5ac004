//! Shot-level summaries: shape classification and club comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::club::ClubSelection;
use crate::error::GolfResult;
use crate::flight::{BallFlight, SimulationResult};
use crate::swing::SwingParams;

/// Curvature family of a shot, named for a right-handed player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotShape {
    Straight,
    /// Gentle left-to-right
    Fade,
    /// Strong left-to-right
    Slice,
    /// Gentle right-to-left
    Draw,
    /// Strong right-to-left
    Hook,
    /// Starts off line with little curve
    SlightPushPull,
}

impl ShotShape {
    /// Classify from direction and spin axis, both in degrees.
    ///
    /// Thresholds: a shot is straight inside ±1° of direction and ±2° of axis;
    /// past that, axis tilts beyond ±2° read as fade/draw and beyond ±5° as
    /// slice/hook.
    pub fn classify(launch_direction: f64, spin_axis: f64) -> Self {
        if launch_direction.abs() < 1.0 && spin_axis.abs() < 2.0 {
            ShotShape::Straight
        } else if spin_axis > 5.0 {
            ShotShape::Slice
        } else if spin_axis > 2.0 {
            ShotShape::Fade
        } else if spin_axis < -5.0 {
            ShotShape::Hook
        } else if spin_axis < -2.0 {
            ShotShape::Draw
        } else {
            ShotShape::SlightPushPull
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShotShape::Straight => "Straight",
            ShotShape::Fade => "Fade",
            ShotShape::Slice => "Slice",
            ShotShape::Draw => "Draw",
            ShotShape::Hook => "Hook",
            ShotShape::SlightPushPull => "Slight Push/Pull",
        }
    }

    /// One-line description, e.g. "Fade shot with 6500 rpm of spin."
    pub fn describe(&self, spin_rate: f64) -> String {
        format!("{} shot with {:.0} rpm of spin.", self.name(), spin_rate)
    }
}

impl fmt::Display for ShotShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The three 7-irons compared side by side.
pub const IRON_COMPARISON: [&str; 3] = [
    "BLADE_7IRON",
    "CAVITY_BACK_7IRON",
    "GAME_IMPROVEMENT_7IRON",
];

/// One club's result in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubRun {
    pub club: String,
    pub result: SimulationResult,
}

/// Fly the same swing with each club.
///
/// Runs are independent and sequential; the first club that fails to resolve
/// aborts the comparison.
pub fn compare_clubs(clubs: &[ClubSelection], swing: &SwingParams) -> GolfResult<Vec<ClubRun>> {
    let sim = BallFlight::new();
    clubs
        .iter()
        .map(|club| -> GolfResult<ClubRun> {
            Ok(ClubRun {
                club: club.label().to_string(),
                result: sim.run(club, swing)?,
            })
        })
        .collect()
}

/// Blade vs cavity back vs game improvement 7-iron for one swing.
pub fn compare_irons(swing: &SwingParams) -> GolfResult<Vec<ClubRun>> {
    let clubs: Vec<ClubSelection> = IRON_COMPARISON.iter().map(|&name| name.into()).collect();
    compare_clubs(&clubs, swing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{ClubConfig, ImpactModel};
    use crate::error::GolfError;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(ShotShape::classify(0.5, 1.5), ShotShape::Straight);
        assert_eq!(ShotShape::classify(0.0, 6.0), ShotShape::Slice);
        assert_eq!(ShotShape::classify(0.0, 3.0), ShotShape::Fade);
        assert_eq!(ShotShape::classify(0.0, -6.0), ShotShape::Hook);
        assert_eq!(ShotShape::classify(0.0, -3.0), ShotShape::Draw);
        assert_eq!(ShotShape::classify(4.0, 0.5), ShotShape::SlightPushPull);
        // Boundaries are exclusive
        assert_eq!(ShotShape::classify(2.0, 5.0), ShotShape::Fade);
        assert_eq!(ShotShape::classify(2.0, -2.0), ShotShape::SlightPushPull);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            ShotShape::Draw.describe(6543.4),
            "Draw shot with 6543 rpm of spin."
        );
        assert_eq!(ShotShape::SlightPushPull.to_string(), "Slight Push/Pull");
    }

    #[test]
    fn test_compare_irons_order_and_spin() {
        let swing = SwingParams::new(85.0, -4.0, 0.0, 0.0);
        let runs = compare_irons(&swing).expect("iron comparison");

        let names: Vec<&str> = runs.iter().map(|r| r.club.as_str()).collect();
        assert_eq!(names, IRON_COMPARISON.to_vec());
        assert!(runs.iter().all(|r| r.result.landed));

        // Spin is reported from the flight, which holds launch spin constant
        assert!(runs[0].result.spin_rate > runs[1].result.spin_rate);
        assert!(runs[1].result.spin_rate > runs[2].result.spin_rate);
    }

    #[test]
    fn test_compare_matches_individual_runs() {
        let swing = SwingParams::new(88.0, -3.0, 1.0, 2.0);
        let runs = compare_irons(&swing).expect("iron comparison");

        for run in &runs {
            let solo = BallFlight::new()
                .run(&ClubSelection::from(run.club.as_str()), &swing)
                .expect("solo run");
            assert_eq!(run.result, solo);
        }
    }

    #[test]
    fn test_compare_reports_unknown_club() {
        let swing = SwingParams::new(85.0, -4.0, 0.0, 0.0);
        let clubs = vec![
            ClubSelection::from("BLADE_7IRON"),
            ClubSelection::from("LOB_WEDGE"),
        ];
        assert!(matches!(
            compare_clubs(&clubs, &swing),
            Err(GolfError::UnknownClub(name)) if name == "LOB_WEDGE"
        ));
    }

    #[test]
    fn test_compare_custom_club_label() {
        let swing = SwingParams::new(85.0, -4.0, 0.0, 0.0);
        let custom = ClubSelection::from(ClubConfig {
            club_type: "hybrid".to_string(),
            loft: 24.0,
            ..ClubConfig::default()
        });
        let runs = compare_clubs(&[custom], &swing).expect("custom comparison");
        assert_eq!(runs[0].club, "hybrid");
    }

    #[test]
    fn test_fade_swing_classified() {
        // Open face to path: axis tilts right
        let swing = SwingParams::new(90.0, -4.0, -2.0, 2.0);
        let impact = ImpactModel::new(ClubConfig::preset("CAVITY_BACK_7IRON").unwrap())
            .unwrap()
            .calculate_impact(&swing);
        assert_eq!(ShotShape::classify(impact.launch_direction, impact.spin_axis), ShotShape::Fade);
    }
}
