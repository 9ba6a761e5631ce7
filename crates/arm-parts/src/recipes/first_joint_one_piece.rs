//! First joint printed as a single piece

use arm_cad::Document;
use arm_cad::build::{HoleSpec, create_centered_rectangle, create_cylinder, cut, join_parts, make_hole};
use arm_cad::math::RadialPattern;
use glam::DVec3;
use uuid::Uuid;

use super::Recipe;
use super::common::{
    HOLDER_HEIGHT, HOLDER_WALL, HOLDER_WIDTH, TOOL_LABEL, joint_holder_shell, place, wall_axis,
};
use crate::constants::{BEARING_OUTER_DIAMETER, MOTOR_BOSS_RADIUS, MOTOR_HOLE_CIRCLE_RADIUS};
use crate::{DesignParams, RecipeResult};

const INITIAL_HEIGHT: f64 = 50.0;
const BASE_RADIUS: f64 = 95.0;
const BASE_HEIGHT: f64 = 5.0;
/// Distance of each holder from the joint axis
const HOLDER_OFFSET: f64 = 50.0;

/// Base plate with the stepper holder and the opposite shaft bearing holder fused on
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstJointOnePiece;

impl Recipe for FirstJointOnePiece {
    fn name(&self) -> &'static str {
        "first-joint-one-piece"
    }

    fn description(&self) -> &'static str {
        "First joint base, motor holder and shaft holder fused into one part"
    }

    fn build(&self, doc: &mut Document, params: &DesignParams) -> RecipeResult<Vec<Uuid>> {
        let base = keyed_plate(doc, params)?;
        let motor = motor_holder(doc, params)?;
        let shaft = shaft_holder(doc, params)?;

        doc.set_label(base, "Base For First Joint")?;
        doc.set_label(motor, "Motor Holder For First Joint")?;
        doc.set_label(shaft, "Shaft Holder For First Joint")?;

        let part = join_parts(doc, base, motor)?;
        let part = join_parts(doc, part, shaft)?;
        doc.recompute()?;
        Ok(vec![part])
    }
}

fn motor_axis_z() -> f64 {
    INITIAL_HEIGHT + HOLDER_HEIGHT / 2.0 + BASE_HEIGHT
}

fn keyed_plate(doc: &mut Document, params: &DesignParams) -> RecipeResult<Uuid> {
    let shaft_radius = 7.0 + params.tolerance;
    let plate = create_cylinder(
        doc,
        BASE_HEIGHT,
        BASE_RADIUS,
        DVec3::new(0.0, 0.0, INITIAL_HEIGHT),
    )?;
    let bore = HoleSpec::new(shaft_radius * 2.0, params.hole_inf, DVec3::ZERO).through();
    let plate = make_hole(doc, plate, &bore)?;

    let key_width = 5.0 + params.tolerance / 2.5;
    let key = create_centered_rectangle(doc, key_width, key_width, params.hole_inf, TOOL_LABEL)?;
    place(doc, key, DVec3::new(-shaft_radius - key_width / 3.0, 0.0, 0.0), 0.0)?;
    Ok(cut(doc, plate, key)?)
}

fn motor_holder(doc: &mut Document, params: &DesignParams) -> RecipeResult<Uuid> {
    let mut holder = joint_holder_shell(doc, params)?;
    place(
        doc,
        holder,
        DVec3::new(0.0, HOLDER_OFFSET, INITIAL_HEIGHT + BASE_HEIGHT),
        90.0,
    )?;

    let ring = RadialPattern::new(4);
    for slot in ring.with_phase(ring.step() / 2.0).slots() {
        let p = slot.at(MOTOR_HOLE_CIRCLE_RADIUS);
        let hole = HoleSpec::new(
            params.motor_hole_diameter(),
            params.hole_inf,
            DVec3::new(p.x, 0.0, p.y + motor_axis_z()),
        )
        .rotated(wall_axis())
        .through();
        holder = make_hole(doc, holder, &hole)?;
    }

    let shaft = HoleSpec::new(
        MOTOR_BOSS_RADIUS * 2.0,
        params.hole_inf,
        DVec3::new(0.0, 0.0, motor_axis_z()),
    )
    .rotated(wall_axis())
    .through();
    Ok(make_hole(doc, holder, &shaft)?)
}

/// Mirror of the motor holder carrying the bearing for the far shaft end
fn shaft_holder(doc: &mut Document, params: &DesignParams) -> RecipeResult<Uuid> {
    let holder = joint_holder_shell(doc, params)?;
    place(
        doc,
        holder,
        DVec3::new(0.0, -HOLDER_OFFSET, INITIAL_HEIGHT + BASE_HEIGHT),
        -90.0,
    )?;

    let bearing_outer_radius = BEARING_OUTER_DIAMETER / 2.0 + params.tolerance;
    let bearing = HoleSpec::new(
        bearing_outer_radius * 2.0,
        params.hole_inf,
        DVec3::new(0.0, 0.0, motor_axis_z()),
    )
    .rotated(wall_axis())
    .through();
    let holder = make_hole(doc, holder, &bearing)?;

    // Backing plate behind the bearing
    let backing = create_centered_rectangle(
        doc,
        HOLDER_WALL,
        HOLDER_WIDTH + params.tolerance,
        HOLDER_HEIGHT,
        TOOL_LABEL,
    )?;
    place(
        doc,
        backing,
        DVec3::new(0.0, -HOLDER_OFFSET + 13.0, INITIAL_HEIGHT + BASE_HEIGHT),
        90.0,
    )?;
    Ok(join_parts(doc, holder, backing)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_piece_envelope() {
        let mut doc = Document::new("joint");
        let parts = FirstJointOnePiece
            .build(&mut doc, &DesignParams::default())
            .unwrap();
        assert_eq!(parts.len(), 1);

        let b = doc.bounds(parts[0]).unwrap();
        assert_relative_eq!(b.min.z, 50.0, epsilon = 1e-9);
        assert_relative_eq!(b.max.z, 55.0 + HOLDER_HEIGHT, epsilon = 1e-9);
        // Both holders stay inside the plate footprint
        assert_relative_eq!(b.max.y, 95.0, epsilon = 1e-9);
        assert_relative_eq!(b.min.y, -95.0, epsilon = 1e-9);
    }

    #[test]
    fn test_one_piece_labels() {
        let mut doc = Document::new("joint");
        FirstJointOnePiece
            .build(&mut doc, &DesignParams::default())
            .unwrap();
        assert!(doc.find_by_label("Base For First Joint").is_some());
        assert!(doc.find_by_label("Motor Holder For First Joint").is_some());
        assert!(doc.find_by_label("Shaft Holder For First Joint").is_some());
    }

    #[test]
    fn test_bearing_bore_uses_tolerance() {
        let mut doc = Document::new("joint");
        FirstJointOnePiece
            .build(&mut doc, &DesignParams::default())
            .unwrap();
        let bore = doc
            .objects()
            .filter(|o| o.name.starts_with("Hole"))
            .last()
            .unwrap();
        assert!(matches!(
            bore.kind,
            arm_cad::ObjectKind::Cylinder { radius, .. } if (radius - 11.5).abs() < 1e-12
        ));
    }
}
