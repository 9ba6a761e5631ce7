//! Base plate with captive nut pockets

use arm_cad::Document;
use arm_cad::build::{HoleSpec, create_centered_rectangle, create_cylinder, cut, make_hole};
use arm_cad::math::RadialPattern;
use glam::DVec3;
use uuid::Uuid;

use super::Recipe;
use super::common::{on_circle, place};
use crate::{DesignParams, RecipeResult};

const BASE_RADIUS: f64 = 95.0;
const BASE_HEIGHT: f64 = 10.0;
const NUT_POCKET_LENGTH: f64 = 6.0;
const NUT_POCKET_WIDTH: f64 = 10.0;
const NUT_POCKET_DEPTH: f64 = 2.0;

/// Thick base plate with two rings of screw holes, each with a nut pocket
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseV3;

impl Recipe for BaseV3 {
    fn name(&self) -> &'static str {
        "base-v3"
    }

    fn description(&self) -> &'static str {
        "Base plate with sixteen screw holes and captive nut pockets"
    }

    fn build(&self, doc: &mut Document, params: &DesignParams) -> RecipeResult<Vec<Uuid>> {
        let mut base = create_cylinder(doc, BASE_HEIGHT, BASE_RADIUS, DVec3::ZERO)?;

        let ring = RadialPattern::new(8);
        let rings = [
            (BASE_RADIUS - 10.0, "FirstNutHolder"),
            (BASE_RADIUS - 25.0, "SecondNutHolder"),
        ];
        for slot in ring.with_phase(ring.step()).slots() {
            let angle = slot.angle_deg;
            for (radius, label) in rings {
                let hole = HoleSpec::new(
                    params.m5_hole_diameter(),
                    params.hole_inf,
                    on_circle(radius, angle, 0.0),
                )
                .through();
                base = make_hole(doc, base, &hole)?;

                let pocket = create_centered_rectangle(
                    doc,
                    NUT_POCKET_LENGTH,
                    NUT_POCKET_WIDTH,
                    NUT_POCKET_DEPTH,
                    label,
                )?;
                place(
                    doc,
                    pocket,
                    on_circle(radius, angle, BASE_HEIGHT - NUT_POCKET_DEPTH),
                    angle,
                )?;
                base = cut(doc, base, pocket)?;
            }
        }

        doc.recompute()?;
        Ok(vec![base])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_v3_pockets() {
        let mut doc = Document::new("base");
        let parts = BaseV3.build(&mut doc, &DesignParams::default()).unwrap();

        let first: Vec<_> = doc
            .objects()
            .filter(|o| o.label == "FirstNutHolder")
            .map(|o| o.placement)
            .collect();
        let second = doc.objects().filter(|o| o.label == "SecondNutHolder").count();
        assert_eq!(first.len(), 8);
        assert_eq!(second, 8);
        for placement in &first {
            assert_relative_eq!(placement.base.z, 8.0, epsilon = 1e-12);
            assert_relative_eq!(placement.base.truncate().length(), 85.0, epsilon = 1e-9);
        }

        let b = doc.bounds(parts[0]).unwrap();
        assert_relative_eq!(b.max.z, BASE_HEIGHT, epsilon = 1e-9);
        assert_relative_eq!(b.max.x, BASE_RADIUS, epsilon = 1e-9);
    }

    #[test]
    fn test_base_v3_hole_pattern_starts_at_45() {
        let mut doc = Document::new("base");
        BaseV3.build(&mut doc, &DesignParams::default()).unwrap();
        let hole = doc.find_by_name("Hole").unwrap();
        let expected = on_circle(85.0, 45.0, -500.0);
        assert!(hole.placement.base.abs_diff_eq(expected, 1e-9));
    }
}
