//! First rotating base with side bearing pins

use arm_cad::Document;
use arm_cad::build::{HoleSpec, create_cylinder, cut, join_parts, make_hole};
use arm_cad::math::RadialPattern;
use glam::DVec3;
use uuid::Uuid;

use super::Recipe;
use super::common::{on_circle, radial_axis};
use crate::constants::{BEARING_INNER_DIAMETER, BEARING_OUTER_DIAMETER, BEARING_WIDTH};
use crate::{DesignParams, RecipeResult};

const BASE_RADIUS: f64 = 100.0;
const FLOOR_HEIGHT: f64 = 8.0;
const GROOVE_RADIUS: f64 = 90.0;
const LIP_HEIGHT: f64 = 1.0;
const BEARING_COUNT: usize = 8;

/// Base disc with a bearing groove and eight radial bearing axles
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseV1;

impl Recipe for BaseV1 {
    fn name(&self) -> &'static str {
        "base-v1"
    }

    fn description(&self) -> &'static str {
        "Rotating base with a bearing groove and eight side bearing pins"
    }

    fn build(&self, doc: &mut Document, params: &DesignParams) -> RecipeResult<Vec<Uuid>> {
        // Catalog bearing, no fit tolerance on this revision
        let bearing_outer_radius = BEARING_OUTER_DIAMETER / 2.0;
        let groove_height = bearing_outer_radius * 2.0 + 1.0;
        let total_height = FLOOR_HEIGHT + groove_height + LIP_HEIGHT;

        let base = create_cylinder(doc, total_height, BASE_RADIUS, DVec3::ZERO)?;
        let groove = create_cylinder(
            doc,
            groove_height,
            GROOVE_RADIUS,
            DVec3::new(0.0, 0.0, FLOOR_HEIGHT),
        )?;
        let base = cut(doc, base, groove)?;
        let lip = create_cylinder(
            doc,
            LIP_HEIGHT,
            BASE_RADIUS,
            DVec3::new(0.0, 0.0, FLOOR_HEIGHT + groove_height),
        )?;
        let base = cut(doc, base, lip)?;

        let middle_radius = GROOVE_RADIUS - BEARING_WIDTH - 2.0;
        let middle = create_cylinder(
            doc,
            groove_height - 3.0,
            middle_radius,
            DVec3::new(0.0, 0.0, FLOOR_HEIGHT),
        )?;
        let mut base = join_parts(doc, base, middle)?;

        let axle_z = FLOOR_HEIGHT + groove_height * 0.5;
        let pin_z = FLOOR_HEIGHT + groove_height;
        for slot in RadialPattern::new(BEARING_COUNT).slots() {
            let angle = slot.angle_deg;
            let axle = HoleSpec::new(
                BEARING_INNER_DIAMETER,
                params.hole_inf,
                on_circle(middle_radius - BEARING_WIDTH, angle, axle_z),
            )
            .rotated(radial_axis(angle));
            base = make_hole(doc, base, &axle)?;

            let pin = create_cylinder(
                doc,
                BEARING_WIDTH,
                BEARING_INNER_DIAMETER / 2.0,
                on_circle(GROOVE_RADIUS + bearing_outer_radius - 1.0, angle, pin_z),
            )?;
            base = join_parts(doc, base, pin)?;
        }

        doc.recompute()?;
        tracing::debug!("Base v1 finished as '{}'", doc.object(base)?.name);
        Ok(vec![base])
    }
}
