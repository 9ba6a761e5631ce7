//! Motor to arm coupling for the 16 mm link

use arm_cad::Document;
use arm_cad::build::{HoleSpec, create_centered_rectangle, cut, join_parts, make_hole};
use arm_cad::math::RadialPattern;
use glam::DVec3;
use uuid::Uuid;

use super::Recipe;
use super::common::{
    ARM_RADIUS, HALF_CYLINDER_RADIUS, TOOL_LABEL, arm_body, half_cylinder_mount, halve_and_stand,
    on_circle, place,
};
use crate::{DesignParams, RecipeResult};

const ARM_HEIGHT: f64 = 40.0;
const COLLAR_HEIGHT: f64 = 8.0;
/// Drop applied once the coupling is laid on its side
const LOWERING: f64 = 31.0;

/// Half arm with a keyed shaft mount, laid on its cut face
#[derive(Debug, Clone, Copy, Default)]
pub struct MotorToArm16mm;

impl Recipe for MotorToArm16mm {
    fn name(&self) -> &'static str {
        "motor-to-arm-16mm"
    }

    fn description(&self) -> &'static str {
        "Coupling between the second motor shaft and the 16 mm arm"
    }

    fn build(&self, doc: &mut Document, params: &DesignParams) -> RecipeResult<Vec<Uuid>> {
        let head = params.m5_head_size();
        let screw = params.m5_hole_diameter();
        let shaft_radius = 7.0 + params.tolerance / 4.0;

        let mut arm = arm_body(doc, ARM_HEIGHT, COLLAR_HEIGHT)?;
        let ring = RadialPattern::new(4);
        let pattern = ring.with_phase(ring.step() / 2.0);
        for slot in pattern.slots() {
            let angle = slot.angle_deg;
            let pocket = create_centered_rectangle(doc, head * 3.0, head * 3.0, 35.0, TOOL_LABEL)?;
            place(doc, pocket, on_circle(ARM_RADIUS - head / 2.0, angle, 0.0), angle + 45.0)?;
            arm = cut(doc, arm, pocket)?;

            let collar_screw = HoleSpec::new(
                screw,
                COLLAR_HEIGHT,
                on_circle(ARM_RADIUS - head, angle, -COLLAR_HEIGHT),
            );
            arm = make_hole(doc, arm, &collar_screw)?;
        }

        let key_width = 5.0 + params.tolerance / 3.0;
        let mount = half_cylinder_mount(doc, params, ARM_HEIGHT, shaft_radius, key_width)?;
        let mut arm = join_parts(doc, arm, mount)?;

        // Wrench clearance next to each screw
        for slot in pattern.slots() {
            let p = slot.at(ARM_RADIUS - head);
            let dx = if matches!(slot.index, 1 | 2) { -head } else { head };
            let dy = if matches!(slot.index, 0 | 1) { -head } else { head };
            let clearance =
                create_centered_rectangle(doc, head * 4.0, head * 3.0, params.hole_inf, TOOL_LABEL)?;
            place(doc, clearance, DVec3::new(p.x + dx, p.y - dy, 0.0), 0.0)?;
            arm = cut(doc, arm, clearance)?;
        }

        let mut arm = halve_and_stand(doc, params, arm, ARM_HEIGHT, COLLAR_HEIGHT)?;

        for slot in pattern.slots().filter(|s| s.index >= 2) {
            let hole = HoleSpec::new(screw, params.hole_inf, slot.at(ARM_RADIUS - head).extend(0.0))
                .through();
            arm = make_hole(doc, arm, &hole)?;
        }

        doc.translate(arm, DVec3::new(0.0, 0.0, -LOWERING))?;

        // Counterbored screw through the top of the mount
        let counterbore_diameter = screw * 2.0;
        let top_y = -1.56 - counterbore_diameter / 2.0
            + HALF_CYLINDER_RADIUS
            + HALF_CYLINDER_RADIUS / 1.5;
        let counterbore = HoleSpec::new(
            counterbore_diameter,
            params.hole_inf,
            DVec3::new(0.0, top_y, head * 1.5),
        );
        arm = make_hole(doc, arm, &counterbore)?;
        let top_screw =
            HoleSpec::new(screw, params.hole_inf, DVec3::new(0.0, top_y, 0.0)).through();
        arm = make_hole(doc, arm, &top_screw)?;

        doc.set_label(arm, "Arm Cylinder")?;
        doc.recompute()?;
        Ok(vec![arm])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn build() -> (Document, Uuid) {
        let mut doc = Document::new("coupling");
        let parts = MotorToArm16mm
            .build(&mut doc, &DesignParams::default())
            .unwrap();
        (doc, parts[0])
    }

    #[test]
    fn test_coupling_label() {
        let (doc, part) = build();
        assert_eq!(doc.object(part).unwrap().label, "Arm Cylinder");
    }

    #[test]
    fn test_coupling_envelope() {
        let (doc, part) = build();
        let b = doc.bounds(part).unwrap();
        // Collar to mount top spans 118 mm, now along Y
        assert_relative_eq!(b.size().y, 118.0, epsilon = 1e-9);
        assert_relative_eq!(b.size().z, ARM_RADIUS, epsilon = 1e-9);
    }

    #[test]
    fn test_only_two_screw_holes_after_standing() {
        let (doc, _) = build();
        let through: Vec<_> = doc
            .objects()
            .filter(|o| o.name.starts_with("Hole"))
            .filter(|o| {
                matches!(o.kind, arm_cad::ObjectKind::Cylinder { radius, height } if radius == 3.5 && height == 1000.0)
            })
            .collect();
        // Two below the arm and the top screw
        assert_eq!(through.len(), 3);
    }
}
