//! Second motor arm for the 18 mm shaft

use arm_cad::build::{HoleSpec, create_centered_rectangle, cut, join_parts, make_hole};
use arm_cad::math::RadialPattern;
use arm_cad::{Document, Placement};
use glam::DVec3;
use uuid::Uuid;

use super::Recipe;
use super::common::{ARM_RADIUS, TOOL_LABEL, arm_body, half_cylinder_mount, on_circle, place};
use crate::{DesignParams, RecipeResult};

const ARM_HEIGHT: f64 = 40.0;
const COLLAR_HEIGHT: f64 = 5.0;
const SCREW_POCKET_DEPTH: f64 = 35.0;
/// Height of the arm above the first joint
const MOUNT_HEIGHT: f64 = 150.0;

/// Arm cylinder with eight screw pockets and a keyed 18 mm shaft mount
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondMotorArm18mm;

impl Recipe for SecondMotorArm18mm {
    fn name(&self) -> &'static str {
        "second-motor-arm-18mm"
    }

    fn description(&self) -> &'static str {
        "Second motor arm with eight screw pockets and an 18 mm keyed shaft mount"
    }

    fn build(&self, doc: &mut Document, params: &DesignParams) -> RecipeResult<Vec<Uuid>> {
        let head = params.m5_head_size();
        let shaft_radius = 9.0 + params.tolerance / 5.0;

        let mut arm = arm_body(doc, ARM_HEIGHT, COLLAR_HEIGHT)?;
        let ring = RadialPattern::new(8);
        for slot in ring.with_phase(ring.step() / 2.0).slots() {
            let angle = slot.angle_deg;
            let head_pocket = HoleSpec::new(
                head * 1.5,
                SCREW_POCKET_DEPTH,
                on_circle(ARM_RADIUS - head, angle, 0.0),
            );
            arm = make_hole(doc, arm, &head_pocket)?;

            let opening = create_centered_rectangle(
                doc,
                head,
                head * 1.5,
                SCREW_POCKET_DEPTH,
                TOOL_LABEL,
            )?;
            place(doc, opening, on_circle(ARM_RADIUS - head / 2.0, angle, 0.0), angle)?;
            arm = cut(doc, arm, opening)?;

            let collar_screw = HoleSpec::new(
                params.m5_hole_diameter(),
                COLLAR_HEIGHT,
                on_circle(ARM_RADIUS - head, angle, -COLLAR_HEIGHT),
            );
            arm = make_hole(doc, arm, &collar_screw)?;
        }

        let key_width = 6.3 + params.tolerance / 3.0;
        let mount = half_cylinder_mount(doc, params, ARM_HEIGHT, shaft_radius, key_width)?;
        let arm = join_parts(doc, arm, mount)?;

        doc.set_label(arm, "Arm Cylinder")?;
        doc.set_placement(
            arm,
            Placement::from_translation(DVec3::new(0.0, 0.0, MOUNT_HEIGHT)),
        )?;
        doc.recompute()?;
        Ok(vec![arm])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arm_18mm_is_raised() {
        let mut doc = Document::new("arm");
        let parts = SecondMotorArm18mm
            .build(&mut doc, &DesignParams::default())
            .unwrap();
        let arm = doc.object(parts[0]).unwrap();
        assert_eq!(arm.label, "Arm Cylinder");

        let b = doc.bounds(parts[0]).unwrap();
        assert_relative_eq!(b.min.z, MOUNT_HEIGHT - COLLAR_HEIGHT, epsilon = 1e-9);
        assert_relative_eq!(b.max.z, MOUNT_HEIGHT + 110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shaft_bore_diameter() {
        let mut doc = Document::new("arm");
        SecondMotorArm18mm
            .build(&mut doc, &DesignParams::default())
            .unwrap();
        let bores = doc
            .objects()
            .filter(|o| {
                matches!(o.kind, arm_cad::ObjectKind::Cylinder { radius, .. } if (radius - 9.1).abs() < 1e-12)
            })
            .count();
        assert_eq!(bores, 1);
    }
}
