//! Hole cutter

use glam::DVec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BuildResult, boolean::cut, require_positive};
use crate::document::{Document, ObjectKind};
use crate::math::{Placement, Rotation};

/// Cross-section of a hole tool
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum HoleProfile {
    /// Cylinder of the hole diameter
    #[default]
    Round,
    /// Box centered on the hole axis
    Rect { length: f64, width: f64 },
}

/// Description of a subtractive tool
///
/// The tool extends along its local +Z by `height` from `position`. With
/// `through` set it is shifted back by half its height along its own
/// rotated axis, so it straddles `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleSpec {
    pub diameter: f64,
    pub height: f64,
    pub position: DVec3,
    pub rotation: Rotation,
    pub through: bool,
    pub profile: HoleProfile,
}

impl HoleSpec {
    /// Round blind hole along +Z
    pub fn new(diameter: f64, height: f64, position: DVec3) -> Self {
        Self {
            diameter,
            height,
            position,
            rotation: Rotation::default(),
            through: false,
            profile: HoleProfile::Round,
        }
    }

    /// Rectangular pocket tool
    pub fn rect(length: f64, width: f64, height: f64, position: DVec3) -> Self {
        Self {
            profile: HoleProfile::Rect { length, width },
            ..Self::new(length.max(width), height, position)
        }
    }

    pub fn through(mut self) -> Self {
        self.through = true;
        self
    }

    pub fn rotated(mut self, rotation: impl Into<Rotation>) -> Self {
        self.rotation = rotation.into();
        self
    }

    /// Placement of the tool's axis origin
    pub fn tool_placement(&self) -> Placement {
        let rotation = self.rotation.to_quat();
        let mut base = self.position;
        if self.through {
            base -= rotation * DVec3::new(0.0, 0.0, self.height / 2.0);
        }
        Placement::new(base, rotation)
    }

    fn validate(&self) -> BuildResult<()> {
        require_positive("hole height", self.height)?;
        match self.profile {
            HoleProfile::Round => require_positive("hole diameter", self.diameter),
            HoleProfile::Rect { length, width } => {
                require_positive("hole length", length)?;
                require_positive("hole width", width)
            }
        }
    }
}

/// Cut the tool described by `spec` out of `part`, returning the cut object
///
/// A tool that misses the part leaves its shape unchanged.
pub fn make_hole(doc: &mut Document, part: Uuid, spec: &HoleSpec) -> BuildResult<Uuid> {
    spec.validate()?;
    let placement = spec.tool_placement();

    let tool = match spec.profile {
        HoleProfile::Round => doc.add_object(
            "Hole",
            ObjectKind::Cylinder {
                radius: spec.diameter / 2.0,
                height: spec.height,
            },
            placement,
        )?,
        HoleProfile::Rect { length, width } => {
            let centering = Placement::from_translation(DVec3::new(-length / 2.0, -width / 2.0, 0.0));
            doc.add_object(
                "Hole",
                ObjectKind::Box {
                    length,
                    width,
                    height: spec.height,
                },
                placement.multiply(&centering),
            )?
        }
    };
    cut(doc, part, tool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{BuildError, create_cylinder};
    use crate::math::EulerDeg;
    use approx::assert_relative_eq;

    fn assert_vec_eq(a: DVec3, b: DVec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
    }

    #[test]
    fn test_blind_hole_placement() {
        let spec = HoleSpec::new(8.0, 20.0, DVec3::new(1.0, 2.0, 3.0));
        let p = spec.tool_placement();
        assert_eq!(p.base, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_through_shift_straight() {
        let spec = HoleSpec::new(7.0, 1000.0, DVec3::new(85.0, 0.0, 5.0)).through();
        let p = spec.tool_placement();
        assert_vec_eq(p.base, DVec3::new(85.0, 0.0, -495.0));
    }

    #[test]
    fn test_through_shift_follows_composed_rotation() {
        let position = DVec3::new(10.0, -4.0, 20.0);
        let height = 60.0;
        let rotation = Rotation::composed(&[(0.0, 90.0, 0.0), (45.0, 0.0, 0.0)]);
        let spec = HoleSpec::new(8.5, height, position)
            .rotated(rotation.clone())
            .through();

        let p = spec.tool_placement();
        // The tool axis points radially at 45 degrees, so the shift is along it
        let (s, c) = 45f64.to_radians().sin_cos();
        let expected = position - DVec3::new(c, s, 0.0) * (height / 2.0);
        assert_vec_eq(p.base, expected);
        assert_vec_eq(p.base, position - rotation.to_quat() * DVec3::new(0.0, 0.0, height / 2.0));
        // Not a world-axis shift
        assert!((p.base - (position - DVec3::new(0.0, 0.0, height / 2.0))).length() > 1.0);
    }

    #[test]
    fn test_hole_through_part() {
        let mut doc = Document::new("test");
        let base = create_cylinder(&mut doc, 10.0, 95.0, DVec3::ZERO).unwrap();
        let spec = HoleSpec::new(7.0, 1000.0, DVec3::new(85.0, 0.0, 0.0)).through();
        let cut = make_hole(&mut doc, base, &spec).unwrap();

        assert_eq!(doc.object(cut).unwrap().name, "Cut");
        assert_eq!(doc.bounds(cut).unwrap(), doc.bounds(base).unwrap());
        let hole = doc.find_by_name("Hole").unwrap();
        let hb = doc.bounds(hole.id).unwrap();
        assert_relative_eq!(hb.min.z, -500.0, epsilon = 1e-9);
        assert_relative_eq!(hb.max.z, 500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hole_outside_part_leaves_it_unchanged() {
        let mut doc = Document::new("test");
        let base = create_cylinder(&mut doc, 5.0, 10.0, DVec3::ZERO).unwrap();
        let spec = HoleSpec::new(2.0, 5.0, DVec3::new(500.0, 0.0, 0.0));
        let cut = make_hole(&mut doc, base, &spec).unwrap();
        assert_eq!(doc.bounds(cut).unwrap(), doc.bounds(base).unwrap());
    }

    #[test]
    fn test_rect_hole_trims_part() {
        let mut doc = Document::new("test");
        let base = crate::build::create_centered_rectangle(&mut doc, 80.0, 80.0, 40.0, "Block")
            .unwrap();
        // Slab covering the top 10 mm of the block
        let spec = HoleSpec::rect(100.0, 100.0, 20.0, DVec3::new(0.0, 0.0, 30.0));
        let cut = make_hole(&mut doc, base, &spec).unwrap();
        let b = doc.bounds(cut).unwrap();
        assert_relative_eq!(b.max.z, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rect_hole_is_centered_on_axis() {
        let spec = HoleSpec::rect(6.0, 10.0, 2.0, DVec3::new(70.0, 0.0, 8.0))
            .rotated(EulerDeg::yaw(90.0));
        let mut doc = Document::new("test");
        let base = create_cylinder(&mut doc, 10.0, 95.0, DVec3::ZERO).unwrap();
        make_hole(&mut doc, base, &spec).unwrap();
        let tool = doc.find_by_name("Hole").unwrap();
        let b = doc.bounds(tool.id).unwrap();
        assert_vec_eq(b.center(), DVec3::new(70.0, 0.0, 9.0));
        assert_relative_eq!(b.size().x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(b.size().y, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_hole_rejected() {
        let mut doc = Document::new("test");
        let base = create_cylinder(&mut doc, 10.0, 95.0, DVec3::ZERO).unwrap();
        let spec = HoleSpec::new(0.0, 10.0, DVec3::ZERO);
        assert!(matches!(
            make_hole(&mut doc, base, &spec),
            Err(BuildError::InvalidParameter(_))
        ));
    }
}
