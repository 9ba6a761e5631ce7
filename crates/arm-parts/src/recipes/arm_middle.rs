//! Middle link of the second motor arm

use arm_cad::Document;
use arm_cad::build::{HoleSpec, create_centered_rectangle, cut, join_parts, make_hole};
use arm_cad::math::RadialPattern;
use glam::DVec3;
use uuid::Uuid;

use super::Recipe;
use super::common::{
    ARM_RADIUS, TOOL_LABEL, arm_body, halve_and_stand, on_circle, place, rotate_about_center,
};
use crate::{DesignParams, RecipeResult};

const ARM_HEIGHT: f64 = 35.0;
const COLLAR_HEIGHT: f64 = 8.0;
/// Sideways shift of the clamp screws from their slot centers
const CLAMP_SCREW_SHIFT: f64 = 8.0;

/// Two slotted arm halves stacked back to back, split and laid on the cut face
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondMotorArmMiddle;

impl Recipe for SecondMotorArmMiddle {
    fn name(&self) -> &'static str {
        "second-motor-arm-middle"
    }

    fn description(&self) -> &'static str {
        "Middle arm link made of two mirrored slotted cylinders"
    }

    fn build(&self, doc: &mut Document, params: &DesignParams) -> RecipeResult<Vec<Uuid>> {
        let head = params.m5_head_size();
        let mut arm = arm_body(doc, ARM_HEIGHT, COLLAR_HEIGHT)?;

        let ring = RadialPattern::new(4);
        let pattern = ring.with_phase(ring.step() / 2.0);
        for slot in pattern.slots() {
            let angle = slot.angle_deg;
            let pocket =
                create_centered_rectangle(doc, head * 2.5, head * 2.5, ARM_HEIGHT, TOOL_LABEL)?;
            place(doc, pocket, on_circle(ARM_RADIUS - head / 2.0, angle, 0.0), angle + 45.0)?;
            arm = cut(doc, arm, pocket)?;

            let screw = HoleSpec::new(
                params.m5_hole_diameter(),
                COLLAR_HEIGHT,
                on_circle(ARM_RADIUS - head, angle, -COLLAR_HEIGHT),
            );
            arm = make_hole(doc, arm, &screw)?;
        }

        // Mirror a full copy on top of the first half
        let upper = doc.copy_object(arm, true)?;
        rotate_about_center(doc, upper, DVec3::X, 180.0)?;
        doc.translate(upper, DVec3::new(0.0, 0.0, ARM_HEIGHT + COLLAR_HEIGHT))?;
        let arm = join_parts(doc, arm, upper)?;

        let mut arm = halve_and_stand(doc, params, arm, ARM_HEIGHT, COLLAR_HEIGHT)?;

        for slot in pattern.slots() {
            let shift = if matches!(slot.index, 0 | 3) {
                CLAMP_SCREW_SHIFT
            } else {
                -CLAMP_SCREW_SHIFT
            };
            let p = slot.at(ARM_RADIUS - head);
            let clamp = HoleSpec::new(
                params.m5_hole_diameter(),
                params.hole_inf,
                DVec3::new(p.x + shift, p.y, 0.0),
            )
            .through();
            arm = make_hole(doc, arm, &clamp)?;
        }

        doc.recompute()?;
        Ok(vec![arm])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arm_middle_is_laid_flat() {
        let mut doc = Document::new("arm");
        let parts = SecondMotorArmMiddle
            .build(&mut doc, &DesignParams::default())
            .unwrap();
        let b = doc.bounds(parts[0]).unwrap();
        // Stacked halves span 86 mm and now lie along Y; the half radius is the height
        assert_relative_eq!(b.size().y, 86.0, epsilon = 1e-9);
        assert_relative_eq!(b.size().z, ARM_RADIUS, epsilon = 1e-9);
        assert_relative_eq!(b.size().x, ARM_RADIUS * 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut doc = Document::new("arm");
        SecondMotorArmMiddle
            .build(&mut doc, &DesignParams::default())
            .unwrap();
        // Every slot pocket and collar hole exists twice
        let collar_holes = doc
            .objects()
            .filter(|o| o.name.starts_with("Hole"))
            .filter(|o| {
                matches!(o.kind, arm_cad::ObjectKind::Cylinder { height, .. } if height == COLLAR_HEIGHT)
            })
            .count();
        assert_eq!(collar_holes, 8);
    }

    #[test]
    fn test_clamp_screw_shift() {
        let mut doc = Document::new("arm");
        SecondMotorArmMiddle
            .build(&mut doc, &DesignParams::default())
            .unwrap();
        let clamps: Vec<_> = doc
            .objects()
            .filter(|o| {
                matches!(o.kind, arm_cad::ObjectKind::Cylinder { height, .. } if height == 1000.0)
            })
            .map(|o| o.placement.base)
            .collect();
        assert_eq!(clamps.len(), 4);
        let p = on_circle(30.5, 45.0, 0.0);
        assert_relative_eq!(clamps[0].x, p.x + CLAMP_SCREW_SHIFT, epsilon = 1e-9);
        assert_relative_eq!(clamps[1].x, -p.x - CLAMP_SCREW_SHIFT, epsilon = 1e-9);
    }
}
