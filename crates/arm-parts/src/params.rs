//! Design parameters
//!
//! Shared inputs of every recipe. Parameters can be loaded from a RON file so
//! a print can be retuned (for example a looser tolerance) without touching
//! the recipes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    BEARING_INNER_DIAMETER, BEARING_OUTER_DIAMETER, BEARING_WIDTH, DEFAULT_TOLERANCE, HOLE_INF,
    M5_HEAD_SIZE, M5_RADIUS, MOTOR_SCREW_HOLE_DIAMETER,
};

/// Errors from reading or writing parameter files
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid parameter: {0}")]
    Invalid(String),
}

/// Parameters shared by all recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignParams {
    /// Fit tolerance added to clearances
    pub tolerance: f64,
    /// Length of tools that should cut through any part
    pub hole_inf: f64,
}

impl Default for DesignParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            hole_inf: HOLE_INF,
        }
    }
}

impl DesignParams {
    /// Clearance radius for an M5 screw
    pub fn m5_size(&self) -> f64 {
        M5_RADIUS + self.tolerance * 2.0
    }

    /// Clearance diameter for an M5 screw
    pub fn m5_hole_diameter(&self) -> f64 {
        self.m5_size() * 2.0
    }

    /// Clearance for an M5 head or nut
    pub fn m5_head_size(&self) -> f64 {
        M5_HEAD_SIZE + self.tolerance * 2.0
    }

    pub fn bearing_width(&self) -> f64 {
        BEARING_WIDTH + self.tolerance
    }

    pub fn bearing_outer_radius(&self) -> f64 {
        BEARING_OUTER_DIAMETER / 2.0
    }

    pub fn bearing_inner_radius(&self) -> f64 {
        BEARING_INNER_DIAMETER / 2.0 + self.tolerance / 2.0
    }

    /// Clearance diameter for the motor mounting screws
    pub fn motor_hole_diameter(&self) -> f64 {
        (MOTOR_SCREW_HOLE_DIAMETER / 2.0 + self.tolerance / 2.0) * 2.0
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ParamsError::Invalid(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        if !self.hole_inf.is_finite() || self.hole_inf <= 0.0 {
            return Err(ParamsError::Invalid(format!(
                "hole_inf must be positive, got {}",
                self.hole_inf
            )));
        }
        Ok(())
    }

    /// Parse parameters from RON text
    pub fn from_ron_str(content: &str) -> Result<Self, ParamsError> {
        let params: DesignParams =
            ron::from_str(content).map_err(|e| ParamsError::Deserialize(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ParamsError::Io(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Save parameters to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ParamsError::Serialize(e.to_string()))?;
        std::fs::write(path.as_ref(), content).map_err(|e| ParamsError::Io(e.to_string()))?;
        Ok(())
    }
}
