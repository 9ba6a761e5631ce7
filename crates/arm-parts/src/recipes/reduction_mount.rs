//! Adapter plate between the second motor and its reduction

use arm_cad::Document;
use arm_cad::build::{HoleSpec, create_centered_rectangle, join_parts, make_hole};
use arm_cad::math::RadialPattern;
use glam::DVec3;
use uuid::Uuid;

use super::Recipe;
use super::common::{TOOL_LABEL, rotate_about_center, wall_axis};
use crate::{DesignParams, RecipeResult};

const PLATE_SIDE: f64 = 85.0;
const PLATE_THICKNESS: f64 = 5.0;
const REDUCTION_DIAMETER: f64 = 85.0;
/// Motor screw circle of this motor, slightly wider than the standard one
const MOTOR_SCREW_RADIUS: f64 = 49.41;
const CLEARANCE_DIAMETER: f64 = 20.0;
const SHAFT_DIAMETER: f64 = 44.0;

/// Two square plates, the motor one turned 45 degrees, each with the other's clearances
#[derive(Debug, Clone, Copy, Default)]
pub struct ReductionMount;

impl Recipe for ReductionMount {
    fn name(&self) -> &'static str {
        "second-motor-reduction-mount"
    }

    fn description(&self) -> &'static str {
        "Plate joining the second motor to its gear reduction"
    }

    fn build(&self, doc: &mut Document, params: &DesignParams) -> RecipeResult<Vec<Uuid>> {
        let center_z = PLATE_SIDE / 2.0;
        let motor_hole = params.motor_hole_diameter();

        let mut reduction =
            create_centered_rectangle(doc, PLATE_SIDE, PLATE_THICKNESS, PLATE_SIDE, TOOL_LABEL)?;
        let mut motor =
            create_centered_rectangle(doc, PLATE_SIDE, PLATE_THICKNESS, PLATE_SIDE, TOOL_LABEL)?;
        rotate_about_center(doc, motor, DVec3::Y, 45.0)?;
        doc.translate(motor, DVec3::new(0.0, PLATE_THICKNESS, 0.0))?;

        let wall_hole = |diameter: f64, radius: f64, angle: f64| {
            let (sin, cos) = angle.to_radians().sin_cos();
            HoleSpec::new(
                diameter,
                params.hole_inf,
                DVec3::new(cos * radius, 0.0, sin * radius + center_z),
            )
            .rotated(wall_axis())
            .through()
        };

        let ring = RadialPattern::new(4);
        let diagonal = ring.with_phase(ring.step() / 2.0);
        for slot in diagonal.slots() {
            let angle = slot.angle_deg;
            // The motor plate is turned, so its screws sit on the axes
            motor = make_hole(doc, motor, &wall_hole(motor_hole, MOTOR_SCREW_RADIUS, angle + 45.0))?;
            motor = make_hole(
                doc,
                motor,
                &wall_hole(CLEARANCE_DIAMETER, REDUCTION_DIAMETER / 2.0, angle),
            )?;
        }
        for slot in diagonal.slots() {
            let angle = slot.angle_deg;
            reduction = make_hole(
                doc,
                reduction,
                &wall_hole(motor_hole, REDUCTION_DIAMETER / 2.0, angle),
            )?;
            reduction = make_hole(
                doc,
                reduction,
                &wall_hole(CLEARANCE_DIAMETER, MOTOR_SCREW_RADIUS, angle + 45.0),
            )?;
        }

        let plate = join_parts(doc, motor, reduction)?;
        let plate = make_hole(doc, plate, &wall_hole(SHAFT_DIAMETER, 0.0, 0.0))?;

        doc.recompute()?;
        Ok(vec![plate])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reduction_mount_envelope() {
        let mut doc = Document::new("mount");
        let parts = ReductionMount.build(&mut doc, &DesignParams::default()).unwrap();
        let b = doc.bounds(parts[0]).unwrap();
        // Turned plate reaches the half diagonal around its center
        let half_diagonal = PLATE_SIDE / 2.0 * 2f64.sqrt();
        assert_relative_eq!(b.max.z, PLATE_SIDE / 2.0 + half_diagonal, epsilon = 1e-9);
        assert_relative_eq!(b.min.y, -PLATE_THICKNESS / 2.0, epsilon = 1e-9);
        assert_relative_eq!(b.max.y, PLATE_THICKNESS * 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_reduction_mount_is_unlabelled() {
        let mut doc = Document::new("mount");
        let parts = ReductionMount.build(&mut doc, &DesignParams::default()).unwrap();
        let plate = doc.object(parts[0]).unwrap();
        assert_eq!(plate.label, plate.name);
    }

    #[test]
    fn test_holes_cross_the_plates() {
        let mut doc = Document::new("mount");
        ReductionMount.build(&mut doc, &DesignParams::default()).unwrap();
        let holes: Vec<_> = doc
            .objects()
            .filter(|o| o.name.starts_with("Hole"))
            .collect();
        assert_eq!(holes.len(), 17);
        for hole in holes {
            let axis = hole.placement.rotation * DVec3::Z;
            assert_relative_eq!(axis.y.abs(), 1.0, epsilon = 1e-12);
        }
    }
}
