//! Placement edits

use glam::DVec3;
use uuid::Uuid;

use super::{BuildResult, boolean::cut, primitives::create_centered_rectangle};
use crate::document::Document;
use crate::math::{Placement, axis_angle};

/// Offset of the marker cut by [`reset_rotation`], far outside any part
const RESET_MARKER_OFFSET: f64 = 100_000.0;

/// Rotate the object named `name` about its bounding box center
///
/// The placement is replaced by `(c - R c, R)`, where `c` is the center of
/// the object's current bounds and `R` the rotation of `degrees` about `axis`.
/// Pending objects are recomputed first so the bounds are up to date.
pub fn rotate_object_around_center(
    doc: &mut Document,
    name: &str,
    axis: DVec3,
    degrees: f64,
) -> BuildResult<()> {
    let id = doc.get_object(name)?.id;
    doc.recompute()?;
    let center = doc.bounds(id)?.center();
    let placement = Placement::around_center(center, axis_angle(axis, degrees));
    doc.set_placement(id, placement)?;
    tracing::debug!("Rotated '{}' by {} deg about {:?} around {:?}", name, degrees, axis, center);
    Ok(())
}

/// New object with the shape of `object` and an identity placement
///
/// Cuts a tiny box placed far away from the part, so the result is an
/// unchanged copy of the shape whose own placement starts fresh.
pub fn reset_rotation(doc: &mut Document, object: Uuid) -> BuildResult<Uuid> {
    let marker = create_centered_rectangle(doc, 0.001, 0.001, 0.001, "ResetRotation")?;
    doc.set_placement(
        marker,
        Placement::from_translation(DVec3::splat(RESET_MARKER_OFFSET)),
    )?;
    cut(doc, object, marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{BuildError, create_cylinder};
    use crate::document::DocumentError;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_keeps_center_fixed() {
        let mut doc = Document::new("test");
        let cyl = create_cylinder(&mut doc, 43.0, 40.0, DVec3::ZERO).unwrap();
        doc.recompute().unwrap();
        let before = doc.bounds(cyl).unwrap();

        rotate_object_around_center(&mut doc, "Cylinder", DVec3::X, 180.0).unwrap();
        doc.recompute().unwrap();
        let after = doc.bounds(cyl).unwrap();

        assert!(after.approx_eq(&before, 1e-9));
        let placement = doc.placement(cyl).unwrap();
        assert!(placement.rotation.abs_diff_eq(axis_angle(DVec3::X, 180.0), 1e-12));
        assert_relative_eq!(placement.base.z, 43.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quarter_turn_about_x() {
        let mut doc = Document::new("test");
        let cyl = create_cylinder(&mut doc, 20.0, 10.0, DVec3::ZERO).unwrap();
        doc.recompute().unwrap();

        rotate_object_around_center(&mut doc, "Cylinder", DVec3::X, -90.0).unwrap();
        let b = doc.bounds(cyl).unwrap();
        // Center stays at (0, 0, 10); the axis now lies along Y
        assert_relative_eq!(b.center().z, 10.0, epsilon = 1e-9);
        assert_relative_eq!(b.size().y, 20.0, epsilon = 1e-9);
        assert_relative_eq!(b.size().z, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_missing_object() {
        let mut doc = Document::new("test");
        let err = rotate_object_around_center(&mut doc, "Missing", DVec3::Z, 45.0).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Document(DocumentError::ObjectNotFound(name)) if name == "Missing"
        ));
    }

    #[test]
    fn test_reset_rotation_keeps_shape() {
        let mut doc = Document::new("test");
        let cyl = create_cylinder(&mut doc, 10.0, 5.0, DVec3::new(3.0, 0.0, 0.0)).unwrap();
        doc.recompute().unwrap();
        rotate_object_around_center(&mut doc, "Cylinder", DVec3::Z, 30.0).unwrap();
        doc.recompute().unwrap();

        let fresh = reset_rotation(&mut doc, cyl).unwrap();
        assert_eq!(doc.placement(fresh).unwrap(), Placement::IDENTITY);
        assert!(
            doc.bounds(fresh)
                .unwrap()
                .approx_eq(&doc.bounds(cyl).unwrap(), 1e-9)
        );
    }
}
