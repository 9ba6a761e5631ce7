//! Primitive factories
//!
//! Each factory creates one solid at a canonical placement. Labelled
//! primitives are wrapped in a compound carrying the label, so the caller can
//! place the group without disturbing the centering offset inside it.

use glam::DVec3;
use uuid::Uuid;

use super::{BuildError, BuildResult, require_positive};
use crate::document::{Document, ObjectKind};
use crate::kernel::ShapeDef;
use crate::math::Placement;

/// Wrap `inner` in a compound named and labelled `label`
fn wrap_in_compound(doc: &mut Document, inner: Uuid, label: &str) -> BuildResult<Uuid> {
    let compound = doc.add_object(
        label,
        ObjectKind::Compound { links: vec![inner] },
        Placement::IDENTITY,
    )?;
    doc.set_label(compound, label)?;
    Ok(compound)
}

/// Cylinder of `radius` standing on its base disc at `position`
pub fn create_cylinder(
    doc: &mut Document,
    height: f64,
    radius: f64,
    position: DVec3,
) -> BuildResult<Uuid> {
    require_positive("cylinder height", height)?;
    require_positive("cylinder radius", radius)?;
    Ok(doc.add_object(
        "Cylinder",
        ObjectKind::Cylinder { radius, height },
        Placement::from_translation(position),
    )?)
}

/// Box centered in X and Y on the origin, resting on Z = 0
///
/// The box sits at `(-length/2, -width/2, 0)` inside a compound named `label`;
/// the compound is returned.
pub fn create_centered_rectangle(
    doc: &mut Document,
    length: f64,
    width: f64,
    height: f64,
    label: &str,
) -> BuildResult<Uuid> {
    require_positive("rectangle length", length)?;
    require_positive("rectangle width", width)?;
    require_positive("rectangle height", height)?;

    let cube = doc.add_object(
        "CenteredRectangle",
        ObjectKind::Box {
            length,
            width,
            height,
        },
        Placement::from_translation(DVec3::new(-length / 2.0, -width / 2.0, 0.0)),
    )?;
    let compound = wrap_in_compound(doc, cube, label)?;
    doc.recompute()?;
    Ok(compound)
}

/// Wall with a sloped top, centered in X and Y like a centered rectangle
pub fn create_sloped_wall(
    doc: &mut Document,
    length: f64,
    height: f64,
    width: f64,
    slope_deg: f64,
    offset_length: f64,
    label: &str,
) -> BuildResult<Uuid> {
    let wall = doc.add_object(
        "SlopedWallInternal",
        ObjectKind::Feature {
            shape: ShapeDef::SlopedWall {
                length,
                height,
                width,
                slope_deg,
                offset_length,
            },
        },
        Placement::from_translation(DVec3::new(-length / 2.0, -width / 2.0, 0.0)),
    )?;
    let compound = wrap_in_compound(doc, wall, label)?;
    doc.recompute()?;
    Ok(compound)
}

/// Tube along +Z at `position`; an inner radius of zero gives a solid disc
pub fn create_hollow_cylinder(
    doc: &mut Document,
    outer_radius: f64,
    inner_radius: f64,
    height: f64,
    position: DVec3,
) -> BuildResult<Uuid> {
    if inner_radius >= outer_radius {
        return Err(BuildError::InvalidParameter(format!(
            "inner radius {inner_radius} must be smaller than outer radius {outer_radius}"
        )));
    }
    if inner_radius < 0.0 {
        return Err(BuildError::InvalidParameter(format!(
            "inner radius {inner_radius} must not be negative"
        )));
    }
    require_positive("hollow cylinder height", height)?;

    Ok(doc.add_object(
        "HollowCylinder",
        ObjectKind::Feature {
            shape: ShapeDef::HollowCylinder {
                outer_radius,
                inner_radius,
                height,
            },
        },
        Placement::from_translation(position),
    )?)
}

/// Circle sector from 0 to `angle_deg`, extruded symmetrically about Z = 0
pub fn create_extruded_circle_sector(
    doc: &mut Document,
    radius: f64,
    angle_deg: f64,
    height: f64,
) -> BuildResult<Uuid> {
    Ok(doc.add_object(
        "ExtrudedSector",
        ObjectKind::Feature {
            shape: ShapeDef::CircleSector {
                radius,
                angle_deg,
                height,
            },
        },
        Placement::from_translation(DVec3::new(0.0, 0.0, -height / 2.0)),
    )?)
}

/// Equilateral triangle prism with its centroid on the Z axis
pub fn create_centered_triangle(
    doc: &mut Document,
    side: f64,
    height: f64,
    label: &str,
) -> BuildResult<Uuid> {
    let triangle = doc.add_object(
        "CenteredTriangle",
        ObjectKind::Feature {
            shape: ShapeDef::Triangle { side, height },
        },
        Placement::IDENTITY,
    )?;
    let compound = wrap_in_compound(doc, triangle, label)?;
    doc.recompute()?;
    Ok(compound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentError;
    use crate::kernel::CadError;
    use crate::math::Aabb;
    use approx::assert_relative_eq;

    #[test]
    fn test_centered_rectangle_bounds() {
        let mut doc = Document::new("test");
        let rect = create_centered_rectangle(&mut doc, 10.0, 20.0, 14.0, "Barrier").unwrap();
        let b = doc.bounds(rect).unwrap();
        assert_eq!(b, Aabb::new(DVec3::new(-5.0, -10.0, 0.0), DVec3::new(5.0, 10.0, 14.0)));
        assert_eq!(doc.object(rect).unwrap().label, "Barrier");
        assert_eq!(doc.object(rect).unwrap().kind.type_name(), "Compound");
    }

    #[test]
    fn test_centered_rectangle_placement_moves_group() {
        let mut doc = Document::new("test");
        let rect = create_centered_rectangle(&mut doc, 8.5, 24.0, 50.0, "Pocket").unwrap();
        doc.set_placement(rect, Placement::from_translation(DVec3::new(72.5, 0.0, 0.0)))
            .unwrap();
        doc.recompute().unwrap();
        let b = doc.bounds(rect).unwrap();
        assert_relative_eq!(b.center().x, 72.5, epsilon = 1e-9);
        assert_relative_eq!(b.center().y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(b.min.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rectangle_rejects_zero_dimension() {
        let mut doc = Document::new("test");
        assert!(matches!(
            create_centered_rectangle(&mut doc, 0.0, 1.0, 1.0, "Bad"),
            Err(BuildError::InvalidParameter(_))
        ));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_hollow_cylinder_inner_must_be_smaller() {
        let mut doc = Document::new("test");
        let err = create_hollow_cylinder(&mut doc, 10.0, 10.0, 5.0, DVec3::ZERO);
        assert!(matches!(err, Err(BuildError::InvalidParameter(_))));

        let disc = create_hollow_cylinder(&mut doc, 69.0, 0.0, 10.0, DVec3::new(0.0, 0.0, 40.0))
            .unwrap();
        doc.recompute().unwrap();
        let b = doc.bounds(disc).unwrap();
        assert_eq!(b.min, DVec3::new(-69.0, -69.0, 40.0));
        assert_eq!(b.max, DVec3::new(69.0, 69.0, 50.0));
    }

    #[test]
    fn test_sloped_wall_is_centered() {
        let mut doc = Document::new("test");
        let wall = create_sloped_wall(&mut doc, 50.0, 86.0, 102.0, 70.0, 16.0, "Sloped Wall")
            .unwrap();
        let object = doc.object(wall).unwrap();
        assert_eq!(object.name, "Sloped_Wall");
        assert_eq!(object.label, "Sloped Wall");
        let b = doc.bounds(wall).unwrap();
        assert_eq!(b.min, DVec3::new(-25.0, -51.0, 0.0));
        assert_eq!(b.max, DVec3::new(25.0, 51.0, 86.0));
    }

    #[test]
    fn test_sector_is_centered_on_z() {
        let mut doc = Document::new("test");
        let sector = create_extruded_circle_sector(&mut doc, 10.0, 90.0, 6.0).unwrap();
        doc.recompute().unwrap();
        let b = doc.bounds(sector).unwrap();
        assert_relative_eq!(b.min.z, -3.0);
        assert_relative_eq!(b.max.z, 3.0);
    }

    #[test]
    fn test_invalid_sector_fails_on_recompute() {
        let mut doc = Document::new("test");
        create_extruded_circle_sector(&mut doc, 10.0, 0.0, 6.0).unwrap();
        assert!(matches!(
            doc.recompute(),
            Err(DocumentError::Recompute {
                source: CadError::InvalidParameter(_),
                ..
            })
        ));
    }

    #[test]
    fn test_triangle_compound() {
        let mut doc = Document::new("test");
        let tri = create_centered_triangle(&mut doc, 6.0, 2.0, "Compound").unwrap();
        let b = doc.bounds(tri).unwrap();
        assert_relative_eq!(b.center().x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(b.size().z, 2.0, epsilon = 1e-9);
    }
}
