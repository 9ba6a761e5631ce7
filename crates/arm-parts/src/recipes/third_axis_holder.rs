//! Shaft holder for the third axis motor

use arm_cad::Document;
use arm_cad::build::{HoleSpec, create_cylinder, create_hollow_cylinder, cut, make_hole};
use glam::DVec3;
use uuid::Uuid;

use super::Recipe;
use crate::{DesignParams, RecipeResult};

const HOLDER_DIAMETER: f64 = 45.0;
const HOLDER_HEIGHT: f64 = 100.0;
const BEARING_DIAMETER: f64 = 40.0;
const BEARING_SEAT_HEIGHT: f64 = 24.0;
const SHAFT_DEPTH: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct ThirdAxisMotorHolder;

impl Recipe for ThirdAxisMotorHolder {
    fn name(&self) -> &'static str {
        "third-axis-motor-holder"
    }

    fn description(&self) -> &'static str {
        "Column holding the third axis motor shaft with a bearing seat on top"
    }

    fn build(&self, doc: &mut Document, params: &DesignParams) -> RecipeResult<Vec<Uuid>> {
        let shaft_radius = 7.0 + params.tolerance / 4.0;

        let column = create_cylinder(doc, HOLDER_HEIGHT, HOLDER_DIAMETER / 2.0, DVec3::ZERO)?;
        // Turn the top of the column down to the bearing bore
        let seat = create_hollow_cylinder(
            doc,
            params.hole_inf,
            BEARING_DIAMETER / 2.0,
            BEARING_SEAT_HEIGHT,
            DVec3::new(0.0, 0.0, HOLDER_HEIGHT - BEARING_SEAT_HEIGHT),
        )?;
        let column = cut(doc, column, seat)?;

        let shaft = HoleSpec::new(
            shaft_radius * 2.0,
            SHAFT_DEPTH,
            DVec3::new(0.0, 0.0, HOLDER_HEIGHT - SHAFT_DEPTH),
        );
        let column = make_hole(doc, column, &shaft)?;

        doc.recompute()?;
        Ok(vec![column])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_third_axis_holder() {
        let mut doc = Document::new("holder");
        let parts = ThirdAxisMotorHolder
            .build(&mut doc, &DesignParams::default())
            .unwrap();
        let b = doc.bounds(parts[0]).unwrap();
        assert_relative_eq!(b.max.z, HOLDER_HEIGHT, epsilon = 1e-9);
        assert_relative_eq!(b.max.x, HOLDER_DIAMETER / 2.0, epsilon = 1e-9);

        let hole = doc.find_by_name("Hole").unwrap();
        assert_eq!(hole.placement.base, DVec3::new(0.0, 0.0, 50.0));
        assert!(matches!(
            hole.kind,
            arm_cad::ObjectKind::Cylinder { radius, height } if radius == 7.125 && height == SHAFT_DEPTH
        ));
    }
}
