//! Base for the z axis with bearing barriers

use arm_cad::build::{HoleSpec, create_centered_rectangle, create_cylinder, cut, join_parts, make_hole};
use arm_cad::math::RadialPattern;
use arm_cad::Document;
use glam::DVec3;
use uuid::Uuid;

use super::Recipe;
use super::common::{on_circle, place, radial_axis};
use crate::constants::{MOTOR_BOSS_RADIUS, MOTOR_HOLE_CIRCLE_RADIUS};
use crate::{DesignParams, RecipeResult};

const BASE_RADIUS: f64 = 95.0;
const BASE_HEIGHT: f64 = 5.0;
const BARRIER_HEIGHT: f64 = 14.0;
const BARRIER_WIDTH: f64 = 20.0;
const BARRIER_LENGTH: f64 = 10.0;

/// Flat base with mounting holes, eight bearing barriers and the motor cut-outs
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseV2;

impl Recipe for BaseV2 {
    fn name(&self) -> &'static str {
        "base-v2"
    }

    fn description(&self) -> &'static str {
        "Base for the z axis with eight bearing barriers and a motor mount"
    }

    fn build(&self, doc: &mut Document, params: &DesignParams) -> RecipeResult<Vec<Uuid>> {
        let bearing_width = params.bearing_width();
        let mut base = create_cylinder(doc, BASE_HEIGHT, BASE_RADIUS, DVec3::ZERO)?;

        // Two rings of mounting holes between the barriers
        let ring = RadialPattern::new(8);
        for slot in ring.with_phase(ring.step() / 2.0).slots() {
            for radius in [BASE_RADIUS - 10.0, BASE_RADIUS - 25.0] {
                let hole = HoleSpec::new(
                    params.m5_hole_diameter(),
                    params.hole_inf,
                    on_circle(radius, slot.angle_deg, 0.0),
                )
                .through();
                base = make_hole(doc, base, &hole)?;
            }
        }

        let bearings_distance = BASE_RADIUS - (bearing_width + BARRIER_LENGTH * 2.0);
        for slot in RadialPattern::new(8).slots() {
            let angle = slot.angle_deg;

            let inner = create_centered_rectangle(
                doc,
                BARRIER_LENGTH,
                BARRIER_WIDTH,
                BARRIER_HEIGHT,
                "InnerBarrier",
            )?;
            place(doc, inner, on_circle(bearings_distance, angle, BASE_HEIGHT), angle)?;

            let outer_distance = bearings_distance + BARRIER_LENGTH / 2.0 + bearing_width;
            let outer = create_centered_rectangle(
                doc,
                BARRIER_LENGTH,
                BARRIER_WIDTH,
                BARRIER_HEIGHT,
                "OuterBarrier",
            )?;
            place(doc, outer, on_circle(outer_distance, angle, BASE_HEIGHT), angle)?;

            let barriers = join_parts(doc, inner, outer)?;
            // Axle hole runs outward from the center at bearing height
            let axle = HoleSpec::new(
                params.bearing_inner_radius() * 2.0,
                params.hole_inf,
                DVec3::new(0.0, 0.0, BASE_HEIGHT + BARRIER_HEIGHT * 0.5),
            )
            .rotated(radial_axis(angle));
            let barriers = make_hole(doc, barriers, &axle)?;
            base = join_parts(doc, base, barriers)?;

            // Pocket letting the bearing sink into the plate, turned with its barriers
            let pocket = create_centered_rectangle(
                doc,
                bearing_width + params.tolerance * 2.0,
                params.bearing_outer_radius() * 2.0 + params.tolerance * 4.0,
                50.0,
                "BearingHole",
            )?;
            let pocket_center = on_circle(bearings_distance + BARRIER_LENGTH / 2.0, angle, 0.0);
            place(doc, pocket, pocket_center, angle)?;
            base = cut(doc, base, pocket)?;
        }

        for slot in RadialPattern::new(4).slots() {
            let hole = HoleSpec::new(
                params.motor_hole_diameter(),
                params.hole_inf,
                on_circle(MOTOR_HOLE_CIRCLE_RADIUS, slot.angle_deg, BASE_HEIGHT),
            )
            .through();
            base = make_hole(doc, base, &hole)?;
        }

        let shaft = HoleSpec::new(
            MOTOR_BOSS_RADIUS * 2.0,
            params.hole_inf,
            DVec3::new(0.0, 0.0, BASE_HEIGHT),
        )
        .through();
        base = make_hole(doc, base, &shaft)?;

        doc.set_label(base, "Base for z axis")?;
        doc.recompute()?;
        Ok(vec![base])
    }
}
