//! Part recipes
//!
//! A recipe is a fixed sequence of primitive and boolean calls that builds
//! one printed part from the design parameters. Running a recipe twice on the
//! same document adds a second, independent set of objects.

mod arm_18mm;
mod arm_middle;
mod base_v1;
mod base_v2;
mod base_v3;
mod common;
mod first_joint_one_piece;
mod first_joint_v2;
mod motor_to_arm_16mm;
mod reduction_mount;
mod third_axis_holder;

pub use arm_18mm::SecondMotorArm18mm;
pub use arm_middle::SecondMotorArmMiddle;
pub use base_v1::BaseV1;
pub use base_v2::BaseV2;
pub use base_v3::BaseV3;
pub use first_joint_one_piece::FirstJointOnePiece;
pub use first_joint_v2::FirstJointV2;
pub use motor_hole_test::MotorHoleTest;
pub use motor_to_arm_16mm::MotorToArm16mm;
pub use reduction_mount::ReductionMount;
pub use third_axis_holder::ThirdAxisMotorHolder;

use arm_cad::Document;
use uuid::Uuid;

use crate::{DesignParams, RecipeResult};

/// A parametric part
pub trait Recipe: Send + Sync {
    /// Registry name, e.g. `base-v2`
    fn name(&self) -> &'static str;

    /// One line description of the part
    fn description(&self) -> &'static str;

    /// Build the part in `doc`, returning its finished solids
    fn build(&self, doc: &mut Document, params: &DesignParams) -> RecipeResult<Vec<Uuid>>;
}

/// Every registered recipe, in catalog order
pub fn all_recipes() -> Vec<Box<dyn Recipe>> {
    vec![
        Box::new(BaseV1),
        Box::new(BaseV2),
        Box::new(BaseV3),
        Box::new(FirstJointV2),
        Box::new(FirstJointOnePiece),
        Box::new(SecondMotorArmMiddle),
        Box::new(SecondMotorArm18mm),
        Box::new(MotorToArm16mm),
        Box::new(ReductionMount),
        Box::new(MotorHoleTest),
        Box::new(ThirdAxisMotorHolder),
    ]
}

/// Look up a recipe by name
pub fn find_recipe(name: &str) -> Option<Box<dyn Recipe>> {
    all_recipes().into_iter().find(|r| r.name() == name)
}

/// Run `recipe` with validated parameters, logging start and finish
pub fn run_recipe(
    recipe: &dyn Recipe,
    doc: &mut Document,
    params: &DesignParams,
) -> RecipeResult<Vec<Uuid>> {
    params.validate()?;
    tracing::info!("Building '{}'", recipe.name());
    let parts = recipe.build(doc, params)?;
    tracing::info!(
        "Built '{}': {} part(s), {} object(s) in document",
        recipe.name(),
        parts.len(),
        doc.len()
    );
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_names_are_unique() {
        let recipes = all_recipes();
        let names: HashSet<_> = recipes.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), recipes.len());
        assert_eq!(recipes.len(), 11);
    }

    #[test]
    fn test_find_recipe() {
        assert!(find_recipe("base-v2").is_some());
        assert!(find_recipe("nope").is_none());
    }

    #[test]
    fn test_every_recipe_builds() {
        let params = DesignParams::default();
        for recipe in all_recipes() {
            let mut doc = Document::new(recipe.name());
            let parts = run_recipe(recipe.as_ref(), &mut doc, &params)
                .unwrap_or_else(|e| panic!("{} failed: {e}", recipe.name()));
            assert!(!parts.is_empty(), "{} returned no parts", recipe.name());
            for part in parts {
                let bounds = doc.bounds(part).unwrap();
                assert!(!bounds.is_empty(), "{} has an empty part", recipe.name());
                assert!(!doc.object(part).unwrap().is_touched());
            }
        }
    }

    #[test]
    fn test_recipes_are_not_idempotent() {
        let recipe = BaseV1;
        let params = DesignParams::default();
        let mut doc = Document::new("twice");
        let first = recipe.build(&mut doc, &params).unwrap();
        let count = doc.len();
        let second = recipe.build(&mut doc, &params).unwrap();
        assert_eq!(doc.len(), count * 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = DesignParams {
            tolerance: f64::NAN,
            ..DesignParams::default()
        };
        let mut doc = Document::new("bad");
        assert!(run_recipe(&BaseV1, &mut doc, &params).is_err());
        assert!(doc.is_empty());
    }
}
