//! Construction helpers
//!
//! Thin helpers that add objects to an explicit [`Document`](crate::Document):
//! primitives at canonical placements, holes, cut and fuse, and placement
//! edits. Helpers that produce a finished solid recompute before returning.

mod boolean;
mod hole;
mod primitives;
mod transform;

pub use boolean::{cut, join_parts};
pub use hole::{HoleProfile, HoleSpec, make_hole};
pub use primitives::{
    create_centered_rectangle, create_centered_triangle, create_cylinder,
    create_extruded_circle_sector, create_hollow_cylinder, create_sloped_wall,
};
pub use transform::{reset_rotation, rotate_object_around_center};

use thiserror::Error;

use crate::document::DocumentError;

/// Errors from construction helpers
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Result type for construction helpers
pub type BuildResult<T> = Result<T, BuildError>;

pub(crate) fn require_positive(what: &str, value: f64) -> BuildResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BuildError::InvalidParameter(format!(
            "{what} must be positive, got {value}"
        )))
    }
}
