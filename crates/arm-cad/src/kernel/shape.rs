//! Derived profile solids
//!
//! Shapes that are not plain primitives. Each is described by its defining
//! parameters in local coordinates; the kernel decides how to realize it.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::{CadError, CadResult};
use crate::math::{Aabb, polar};

/// Parametric definition of a derived solid in local coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeDef {
    /// Tube along +Z from z=0; an inner radius of zero gives a full cylinder
    HollowCylinder {
        outer_radius: f64,
        inner_radius: f64,
        height: f64,
    },
    /// Pie slice from 0 to `angle_deg` around Z, extruded from z=0
    CircleSector {
        radius: f64,
        angle_deg: f64,
        height: f64,
    },
    /// Equilateral triangle centered on its centroid, extruded from z=0
    Triangle { side: f64, height: f64 },
    /// Box `length x width x height` with a wedge removed from its top
    ///
    /// The wedge spans x from `offset_length` to `length + offset_length`,
    /// dropping from `height` to `height - length * tan(slope_deg)`.
    SlopedWall {
        length: f64,
        height: f64,
        width: f64,
        slope_deg: f64,
        offset_length: f64,
    },
}

fn require_positive(what: &str, value: f64) -> CadResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CadError::InvalidParameter(format!(
            "{what} must be positive, got {value}"
        )))
    }
}

impl ShapeDef {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::HollowCylinder { .. } => "HollowCylinder",
            Self::CircleSector { .. } => "CircleSector",
            Self::Triangle { .. } => "Triangle",
            Self::SlopedWall { .. } => "SlopedWall",
        }
    }

    /// Check that the parameters describe a non-degenerate solid
    pub fn validate(&self) -> CadResult<()> {
        match *self {
            Self::HollowCylinder {
                outer_radius,
                inner_radius,
                height,
            } => {
                require_positive("outer radius", outer_radius)?;
                require_positive("height", height)?;
                if !(0.0..outer_radius).contains(&inner_radius) {
                    return Err(CadError::InvalidParameter(format!(
                        "inner radius {inner_radius} must be in [0, {outer_radius})"
                    )));
                }
                Ok(())
            }
            Self::CircleSector {
                radius,
                angle_deg,
                height,
            } => {
                require_positive("radius", radius)?;
                require_positive("height", height)?;
                if !(angle_deg > 0.0 && angle_deg <= 360.0) {
                    return Err(CadError::InvalidParameter(format!(
                        "sector angle {angle_deg} must be in (0, 360]"
                    )));
                }
                Ok(())
            }
            Self::Triangle { side, height } => {
                require_positive("side length", side)?;
                require_positive("height", height)
            }
            Self::SlopedWall {
                length,
                height,
                width,
                slope_deg,
                offset_length,
            } => {
                require_positive("length", length)?;
                require_positive("height", height)?;
                require_positive("width", width)?;
                if !slope_deg.is_finite() || !offset_length.is_finite() {
                    return Err(CadError::InvalidParameter(
                        "slope and offset must be finite".into(),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Bounds of the shape in its own coordinates
    pub fn local_bounds(&self) -> Aabb {
        match *self {
            Self::HollowCylinder {
                outer_radius: r,
                height,
                ..
            } => Aabb::new(DVec3::new(-r, -r, 0.0), DVec3::new(r, r, height)),
            Self::CircleSector {
                radius,
                angle_deg,
                height,
            } => {
                // Arc end points, every axis crossing inside the arc, and the center
                let crossings = [90.0, 180.0, 270.0]
                    .into_iter()
                    .filter(|a| *a < angle_deg)
                    .chain([0.0, angle_deg]);
                let outline = crossings
                    .map(|a| polar(radius, a))
                    .chain([glam::DVec2::ZERO]);
                let flat = Aabb::from_points(outline.map(|p| p.extend(0.0)));
                Aabb::new(flat.min, DVec3::new(flat.max.x, flat.max.y, height))
            }
            Self::Triangle { side, height } => {
                let altitude = 3f64.sqrt() / 2.0 * side;
                Aabb::new(
                    DVec3::new(-side / 2.0, -altitude / 3.0, 0.0),
                    DVec3::new(side / 2.0, 2.0 * altitude / 3.0, height),
                )
            }
            Self::SlopedWall {
                length,
                height,
                width,
                ..
            } => Aabb::new(DVec3::ZERO, DVec3::new(length, width, height)),
        }
    }
}
