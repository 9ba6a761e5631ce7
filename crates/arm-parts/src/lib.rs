//! Robotic Arm Part Recipes
//!
//! This crate provides:
//! - Catalog dimensions of bought parts (bearings, screws, motors)
//! - Design parameters loadable from RON
//! - One recipe per printed part, each building its solids in a document

pub mod constants;
pub mod params;
pub mod recipes;

use thiserror::Error;

use arm_cad::{BuildError, DocumentError};

pub use params::{DesignParams, ParamsError};
pub use recipes::{Recipe, all_recipes, find_recipe, run_recipe};

/// Errors from running a recipe
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),

    #[error("Invalid parameters: {0}")]
    Params(#[from] ParamsError),

    #[error("Build failed: {0}")]
    Build(#[from] BuildError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

/// Result type for recipes
pub type RecipeResult<T> = Result<T, RecipeError>;
