//! Steps shared by several recipes

use arm_cad::build::{
    HoleSpec, create_centered_rectangle, create_cylinder, create_hollow_cylinder,
    create_sloped_wall, cut, join_parts, make_hole, rotate_object_around_center,
};
use arm_cad::math::{polar, remap};
use arm_cad::{Document, EulerDeg, Placement, Rotation};
use glam::DVec3;
use uuid::Uuid;

use crate::{DesignParams, RecipeResult};

/// Label given to helper rectangles that are only used as tools
pub(super) const TOOL_LABEL: &str = "Compound";

/// Height of the stepper holder wall
pub(super) const HOLDER_HEIGHT: f64 = 86.0;
/// Motor face width the holder wall is cut to
pub(super) const HOLDER_WIDTH: f64 = 86.0;
/// Holder footprint width, the motor face plus a wall on each side
pub(super) const HOLDER_BASE_WIDTH: f64 = HOLDER_WIDTH + 8.0 + 8.0;
/// Thickness of the holder's front plate
pub(super) const HOLDER_WALL: f64 = 8.0;
pub(super) const HOLDER_SLOPE_LENGTH: f64 = 50.0;
pub(super) const HOLDER_SLOPE_DEG: f64 = 70.0;

pub(super) const ARM_RADIUS: f64 = 40.0;
/// Radius of the half cylinder carrying the motor shaft on top of an arm
pub(super) const HALF_CYLINDER_RADIUS: f64 = 35.0;
/// Correction applied after standing a halved arm upright
const STAND_CORRECTION: f64 = 1.564;

/// Hole axis pointing radially outward at `angle_deg`
pub(super) fn radial_axis(angle_deg: f64) -> Rotation {
    Rotation::composed(&[(0.0, 90.0, 0.0), (angle_deg, 0.0, 0.0)])
}

/// Axis along -Y, used for holes through walls facing the Y direction
pub(super) fn wall_axis() -> Rotation {
    radial_axis(90.0)
}

/// -1 for the first of a pair, +1 for the second
pub(super) fn side_sign(index: usize) -> f64 {
    remap((0.0, 1.0), (-1.0, 1.0))(index as f64)
}

/// Point at `radius` and `angle_deg` around the Z axis, at height `z`
pub(super) fn on_circle(radius: f64, angle_deg: f64, z: f64) -> DVec3 {
    polar(radius, angle_deg).extend(z)
}

/// Replace the placement of `id` with a translation and a turn about Z
pub(super) fn place(doc: &mut Document, id: Uuid, position: DVec3, yaw_deg: f64) -> RecipeResult<()> {
    doc.set_placement(id, Placement::new(position, EulerDeg::yaw(yaw_deg).to_quat()))?;
    Ok(())
}

/// Rotate an object about its own bounds center, looked up by id
pub(super) fn rotate_about_center(
    doc: &mut Document,
    id: Uuid,
    axis: DVec3,
    degrees: f64,
) -> RecipeResult<()> {
    let name = doc.object(id)?.name.clone();
    rotate_object_around_center(doc, &name, axis, degrees)?;
    Ok(())
}

/// Sloped stepper holder wall with the motor pocket cut out
///
/// Centered on the origin with the motor face towards +X, before placement.
pub(super) fn joint_holder_shell(doc: &mut Document, params: &DesignParams) -> RecipeResult<Uuid> {
    let wall = create_sloped_wall(
        doc,
        HOLDER_SLOPE_LENGTH,
        HOLDER_HEIGHT,
        HOLDER_BASE_WIDTH,
        HOLDER_SLOPE_DEG,
        HOLDER_WALL * 2.0,
        "Sloped Wall",
    )?;
    let pocket = create_centered_rectangle(
        doc,
        HOLDER_SLOPE_LENGTH,
        HOLDER_WIDTH + params.tolerance,
        HOLDER_HEIGHT,
        TOOL_LABEL,
    )?;
    place(doc, pocket, DVec3::new(HOLDER_WALL, 0.0, 0.0), 0.0)?;
    Ok(cut(doc, wall, pocket)?)
}

/// Arm cylinder standing on Z = 0 with a collar of `extra` below it
pub(super) fn arm_body(doc: &mut Document, height: f64, extra: f64) -> RecipeResult<Uuid> {
    let body = create_cylinder(doc, height, ARM_RADIUS, DVec3::ZERO)?;
    let collar = create_cylinder(doc, extra, ARM_RADIUS, DVec3::new(0.0, 0.0, -extra))?;
    Ok(join_parts(doc, body, collar)?)
}

/// Half cylinder with a keyed shaft hole that sits on top of an arm
///
/// The mount lies along X over an arm of `arm_height`, trimmed to the arm
/// radius. It is returned unfused.
pub(super) fn half_cylinder_mount(
    doc: &mut Document,
    params: &DesignParams,
    arm_height: f64,
    shaft_radius: f64,
    key_width: f64,
) -> RecipeResult<Uuid> {
    let radius = HALF_CYLINDER_RADIUS;
    let length = ARM_RADIUS * 2.0;
    let lying = Rotation::composed(&[(0.0, 90.0, 0.0), (0.0, 0.0, 90.0)]);

    let drum = create_cylinder(doc, length, radius, DVec3::new(0.0, 0.0, arm_height))?;
    let lower_half = create_centered_rectangle(doc, length, radius * 2.0, radius, TOOL_LABEL)?;
    place(doc, lower_half, DVec3::new(0.0, 0.0, arm_height - radius), 0.0)?;
    doc.set_placement(
        drum,
        Placement::new(DVec3::new(-length / 2.0, 0.0, arm_height), lying.to_quat()),
    )?;
    let half = cut(doc, drum, lower_half)?;

    // Solid block under the half cylinder
    let block = create_centered_rectangle(doc, length, radius * 2.0, radius, TOOL_LABEL)?;
    place(doc, block, DVec3::new(0.0, 0.0, arm_height - radius), 0.0)?;
    let mount = join_parts(doc, half, block)?;
    place(doc, mount, DVec3::new(0.0, 0.0, radius), 0.0)?;

    let axis_height = arm_height + radius;
    let along_x = Rotation::Composed(vec![EulerDeg::pitch(90.0)]);
    let shaft = HoleSpec::new(shaft_radius * 2.0, params.hole_inf, DVec3::new(0.0, 0.0, axis_height))
        .rotated(along_x.clone())
        .through();
    let mount = make_hole(doc, mount, &shaft)?;

    let key = create_centered_rectangle(doc, key_width, key_width, params.hole_inf, TOOL_LABEL)?;
    doc.set_placement(
        key,
        Placement::new(
            DVec3::new(
                -params.hole_inf / 2.0,
                0.0,
                axis_height - shaft_radius - key_width / 3.0,
            ),
            along_x.to_quat(),
        ),
    )?;
    let mount = cut(doc, mount, key)?;

    let outside = create_hollow_cylinder(
        doc,
        ARM_RADIUS + 200.0,
        ARM_RADIUS,
        params.hole_inf,
        DVec3::ZERO,
    )?;
    Ok(cut(doc, mount, outside)?)
}

/// Keep the -Y half of an arm and stand it on its cut face
pub(super) fn halve_and_stand(
    doc: &mut Document,
    params: &DesignParams,
    arm: Uuid,
    height: f64,
    extra: f64,
) -> RecipeResult<Uuid> {
    let size = ARM_RADIUS * 2.0;
    let box_cut = create_centered_rectangle(doc, size, size, params.hole_inf, TOOL_LABEL)?;
    place(
        doc,
        box_cut,
        DVec3::new(0.0, ARM_RADIUS, -params.hole_inf / 2.0),
        0.0,
    )?;
    let half = cut(doc, arm, box_cut)?;

    rotate_about_center(doc, half, DVec3::X, -90.0)?;
    doc.translate(
        half,
        DVec3::new(0.0, height / 2.0 + extra / 2.0 - STAND_CORRECTION, 0.0),
    )?;
    Ok(half)
}
