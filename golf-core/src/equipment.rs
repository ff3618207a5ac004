//! Equipment configuration loader.
//!
//! Loads club and ball definitions from YAML files, so custom equipment can
//! be described without recompiling. Omitted fields fall back to the same
//! defaults as [`ClubConfig::default`] and [`BallProperties::default`].
//!
//! ## Directory Structure
//!
//! ```text
//! equipment/
//! ├── clubs/
//! │   ├── blade_7iron.yaml
//! │   └── ...
//! └── balls/
//!     ├── standard.yaml
//!     └── ...
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::club::ClubConfig;
use crate::error::{EquipmentError, GolfResult};
use crate::types::BallProperties;

/// Equipment loader with configurable base directory.
pub struct EquipmentLoader {
    base_path: PathBuf,
}

impl EquipmentLoader {
    /// Create a new loader with the given base path.
    ///
    /// The base path should contain `clubs/` and `balls/` subdirectories.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load a club by name (without .yaml extension).
    ///
    /// The club must also pass [`ClubConfig::validate`], so a file that parses
    /// but describes an impossible head is rejected here rather than at launch.
    ///
    /// # Example
    /// ```ignore
    /// let loader = EquipmentLoader::new("equipment");
    /// let blade = loader.load_club("blade_7iron")?;
    /// ```
    pub fn load_club(&self, name: &str) -> GolfResult<ClubConfig> {
        let club: ClubConfig = self.load("clubs", name)?;
        club.validate()?;
        Ok(club)
    }

    /// Load a ball by name; it must pass [`BallProperties::validate`].
    pub fn load_ball(&self, name: &str) -> GolfResult<BallProperties> {
        let ball: BallProperties = self.load("balls", name)?;
        ball.validate()?;
        Ok(ball)
    }

    /// List all available clubs.
    pub fn list_clubs(&self) -> Result<Vec<String>, EquipmentError> {
        self.list("clubs")
    }

    /// List all available balls.
    pub fn list_balls(&self) -> Result<Vec<String>, EquipmentError> {
        self.list("balls")
    }

    fn load<T: DeserializeOwned>(&self, subdir: &str, name: &str) -> Result<T, EquipmentError> {
        let path = self.base_path.join(subdir).join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(EquipmentError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let item = serde_yaml::from_str(&contents)?;
        log::debug!("loaded {} from {}", name, path.display());
        Ok(item)
    }

    fn list(&self, subdir: &str) -> Result<Vec<String>, EquipmentError> {
        let path = self.base_path.join(subdir);
        if !path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if let Some(stem) = name.strip_suffix(".yaml") {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================
