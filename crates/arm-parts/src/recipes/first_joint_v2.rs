//! First joint, two-piece revision
//!
//! A ring base that rides on the z axis base, and a stepper holder screwed
//! onto it through side bars. The holder also carries the endstop arm.

use arm_cad::build::{
    HoleSpec, create_centered_rectangle, create_cylinder, create_hollow_cylinder,
    create_sloped_wall, cut, join_parts, make_hole,
};
use arm_cad::math::RadialPattern;
use arm_cad::{Document, EulerDeg, Placement, Rotation};
use glam::DVec3;
use uuid::Uuid;

use super::Recipe;
use super::common::{
    HOLDER_BASE_WIDTH, HOLDER_HEIGHT, TOOL_LABEL, joint_holder_shell, on_circle, place,
    side_sign, wall_axis,
};
use crate::constants::{MOTOR_BOSS_RADIUS, MOTOR_HOLE_CIRCLE_RADIUS};
use crate::{DesignParams, RecipeResult};

const INITIAL_HEIGHT: f64 = 50.0;
const BASE_RADIUS: f64 = 95.0;
const BASE_HEIGHT: f64 = 8.0;
const RING_EXTRA_HEIGHT: f64 = 10.0;
const SHAFT_DEPTH: f64 = 18.0;
const SIDE_BAR_LENGTH: f64 = 40.0;
const SIDE_BAR_HEIGHT: f64 = 5.0;
const SIDE_BAR_HOLE_OFFSET: f64 = 15.0;
const ENDSTOP_LENGTH: f64 = 8.0;
const ENDSTOP_WIDTH: f64 = 100.0;
const ENDSTOP_HEIGHT: f64 = 40.0;
/// Angle of the screw that ties the endstop arm down
const ENDSTOP_SCREW_ANGLE: f64 = 215.0;

/// First joint base and stepper holder
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstJointV2;

impl Recipe for FirstJointV2 {
    fn name(&self) -> &'static str {
        "first-joint-v2"
    }

    fn description(&self) -> &'static str {
        "First joint ring base and stepper holder with side bars and endstop"
    }

    fn build(&self, doc: &mut Document, params: &DesignParams) -> RecipeResult<Vec<Uuid>> {
        let base = joint_base(doc, params)?;
        let (holder, base) = motor_holder(doc, params, base)?;

        doc.set_label(base, "Base For First Joint")?;
        doc.set_label(holder, "Motor Holder For First Joint")?;
        doc.recompute()?;
        Ok(vec![base, holder])
    }
}

fn shaft_radius(params: &DesignParams) -> f64 {
    7.0 + params.tolerance
}

fn spacer_radius(params: &DesignParams) -> f64 {
    8.0 + params.tolerance
}

/// Ring base with a keyed shaft bore
fn joint_base(doc: &mut Document, params: &DesignParams) -> RecipeResult<Uuid> {
    let shaft_radius = shaft_radius(params);
    let ring_bottom = DVec3::new(0.0, 0.0, INITIAL_HEIGHT - RING_EXTRA_HEIGHT);
    let keep = [BASE_RADIUS - 14.0, BASE_RADIUS - 26.0];

    let base = create_cylinder(doc, BASE_HEIGHT + RING_EXTRA_HEIGHT, BASE_RADIUS, ring_bottom)?;
    // Leave only a ring between the two kept radii below the plate
    let outside = create_hollow_cylinder(doc, BASE_RADIUS, keep[0], RING_EXTRA_HEIGHT, ring_bottom)?;
    let base = cut(doc, base, outside)?;
    let inside = create_hollow_cylinder(doc, keep[1], 0.0, RING_EXTRA_HEIGHT, ring_bottom)?;
    let base = cut(doc, base, inside)?;

    // Boss around the motor shaft
    let boss_bottom = DVec3::new(0.0, 0.0, INITIAL_HEIGHT - SHAFT_DEPTH);
    let boss = create_cylinder(doc, SHAFT_DEPTH, BASE_RADIUS, boss_bottom)?;
    let trim = create_hollow_cylinder(doc, BASE_RADIUS, shaft_radius + 10.0, SHAFT_DEPTH, boss_bottom)?;
    let boss = cut(doc, boss, trim)?;
    let base = join_parts(doc, base, boss)?;

    let bore = HoleSpec::new(shaft_radius * 2.0, params.hole_inf, DVec3::ZERO).through();
    let base = make_hole(doc, base, &bore)?;

    let key_width = 5.0 + params.tolerance / 3.0;
    let key = create_centered_rectangle(doc, key_width, key_width, params.hole_inf, TOOL_LABEL)?;
    place(doc, key, DVec3::new(-shaft_radius - key_width / 3.0, 0.0, 0.0), 0.0)?;
    Ok(cut(doc, base, key)?)
}

/// Stepper holder with side bars and endstop; drills the matching holes in `base`
fn motor_holder(doc: &mut Document, params: &DesignParams, base: Uuid) -> RecipeResult<(Uuid, Uuid)> {
    let plate_top = INITIAL_HEIGHT + BASE_HEIGHT;
    let motor_axis_z = plate_top + HOLDER_HEIGHT / 2.0;
    let screw = params.m5_hole_diameter();
    let mut base = base;

    let mut holder = joint_holder_shell(doc, params)?;
    place(doc, holder, DVec3::new(0.0, 50.0, plate_top), 90.0)?;

    let ring = RadialPattern::new(4);
    for slot in ring.with_phase(ring.step() / 2.0).slots() {
        let p = slot.at(MOTOR_HOLE_CIRCLE_RADIUS);
        let hole = HoleSpec::new(
            params.motor_hole_diameter(),
            params.hole_inf,
            DVec3::new(p.x, 0.0, p.y + motor_axis_z),
        )
        .rotated(wall_axis())
        .through();
        holder = make_hole(doc, holder, &hole)?;
    }
    let shaft = HoleSpec::new(
        MOTOR_BOSS_RADIUS * 2.0,
        params.hole_inf,
        DVec3::new(0.0, 0.0, motor_axis_z),
    )
    .rotated(wall_axis())
    .through();
    holder = make_hole(doc, holder, &shaft)?;

    // Pull the holder back over the shaft
    let setback = 17.5 + shaft_radius(params) + 20.0;
    place(doc, holder, DVec3::new(0.0, -setback, 0.0), 0.0)?;

    let bar_width = screw + 8.0;
    let bar_offset = HOLDER_BASE_WIDTH / 2.0 + bar_width / 2.0;
    for i in 0..2 {
        let side = side_sign(i);
        let mut bar =
            create_centered_rectangle(doc, bar_width, SIDE_BAR_LENGTH, SIDE_BAR_HEIGHT, TOOL_LABEL)?;
        for j in 0..2 {
            let along = side_sign(j) * SIDE_BAR_HOLE_OFFSET;
            let bar_hole =
                HoleSpec::new(screw, params.hole_inf, DVec3::new(0.0, along, 0.0)).through();
            bar = make_hole(doc, bar, &bar_hole)?;

            let base_hole = HoleSpec::new(
                screw,
                params.hole_inf,
                DVec3::new(side * bar_offset, along, plate_top),
            )
            .through();
            base = make_hole(doc, base, &base_hole)?;
        }
        place(doc, bar, DVec3::new(side * bar_offset, 0.0, plate_top), 0.0)?;
        holder = join_parts(doc, holder, bar)?;
    }

    let (endstop, screw_position) = endstop_arm(doc, params)?;
    holder = join_parts(doc, holder, endstop)?;

    let holder_screw = HoleSpec::new(screw, params.hole_inf, screw_position).through();
    holder = make_hole(doc, holder, &holder_screw)?;
    let base_screw = HoleSpec::new(
        screw,
        params.hole_inf,
        DVec3::new(screw_position.x, screw_position.y, plate_top),
    )
    .through();
    base = make_hole(doc, base, &base_screw)?;

    Ok((holder, base))
}

/// Endstop arm in front of the holder, trimmed to the base radius
///
/// Returns the arm and the position of its tie-down screw.
fn endstop_arm(doc: &mut Document, params: &DesignParams) -> RecipeResult<(Uuid, DVec3)> {
    let plate_top = INITIAL_HEIGHT + BASE_HEIGHT;
    let spacer_radius = spacer_radius(params);
    let x = -HOLDER_BASE_WIDTH / 2.0 + ENDSTOP_LENGTH / 2.0;
    let start_y = -ENDSTOP_WIDTH / 2.0 - shaft_radius(params) - 12.5;

    let block =
        create_centered_rectangle(doc, ENDSTOP_LENGTH, ENDSTOP_WIDTH, ENDSTOP_HEIGHT, TOOL_LABEL)?;
    place(doc, block, DVec3::new(x, start_y, plate_top), 0.0)?;

    // Rounded top edge
    let rounded = create_cylinder(doc, ENDSTOP_WIDTH, ENDSTOP_LENGTH / 2.0, DVec3::ZERO)?;
    doc.set_placement(
        rounded,
        Placement::new(
            DVec3::new(x, start_y - ENDSTOP_WIDTH / 2.0, plate_top + ENDSTOP_HEIGHT),
            wall_axis().to_quat(),
        ),
    )?;
    let mut arm = join_parts(doc, block, rounded)?;

    let length_until_border = 60.15;
    let across_x = Rotation::Composed(vec![EulerDeg::pitch(90.0), EulerDeg::IDENTITY]);
    let pair = RadialPattern::new(2);
    for slot in pair.with_phase(pair.step() / 2.0).slots() {
        let (sin, cos) = slot.angle_deg.to_radians().sin_cos();
        let dz = cos * ENDSTOP_HEIGHT / 3.0;
        let dy = sin * length_until_border / 6.0;
        let hole = HoleSpec::new(
            params.m5_hole_diameter(),
            params.hole_inf,
            DVec3::new(
                0.0,
                -dy - length_until_border / 1.2,
                dz + plate_top + ENDSTOP_HEIGHT - spacer_radius,
            ),
        )
        .rotated(across_x.clone())
        .through();
        arm = make_hole(doc, arm, &hole)?;
    }

    let slope_length = 100.0;
    let slope = create_sloped_wall(
        doc,
        slope_length,
        ENDSTOP_HEIGHT - spacer_radius * 2.0,
        ENDSTOP_WIDTH,
        30.0,
        0.0,
        "Endstop Slope",
    )?;
    place(
        doc,
        slope,
        DVec3::new(-HOLDER_BASE_WIDTH / 2.0 - slope_length / 2.0, start_y, plate_top),
        180.0,
    )?;
    arm = join_parts(doc, arm, slope)?;

    let outside = create_hollow_cylinder(doc, 200.0, BASE_RADIUS, params.hole_inf, DVec3::ZERO)?;
    arm = cut(doc, arm, outside)?;

    let screw_position = on_circle(
        BASE_RADIUS - spacer_radius,
        ENDSTOP_SCREW_ANGLE,
        plate_top + SIDE_BAR_HEIGHT,
    );
    let spacer = HoleSpec::new(spacer_radius * 2.0, params.hole_inf, screw_position);
    arm = make_hole(doc, arm, &spacer)?;

    Ok((arm, screw_position))
}
