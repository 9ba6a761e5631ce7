//! CAD Kernel trait definitions
//!
//! These traits define the interface that all CAD kernels must implement.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::ShapeDef;
use crate::math::{Aabb, Placement};

/// Error type for CAD kernel operations
#[derive(Debug, Clone, Error)]
pub enum CadError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Boolean operation failed: {0}")]
    BooleanFailed(String),

    #[error("Kernel not available: {0}")]
    KernelNotAvailable(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("Unknown solid: {0}")]
    SolidNotFound(Uuid),
}

/// Result type for CAD operations
pub type CadResult<T> = Result<T, CadError>;

/// Handle to a solid owned by a kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solid {
    /// Unique identifier
    pub id: Uuid,
}

impl Solid {
    /// Create a new solid handle with the given ID
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// Boolean operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanType {
    /// Union (fuse)
    Union,
    /// Subtraction (cut)
    Subtract,
}

/// CAD kernel trait
///
/// Implementations of this trait provide the actual geometry operations.
/// Shapes are created in local coordinates and moved with [`CadKernel::transform`].
pub trait CadKernel: Send + Sync {
    /// Get the name of this kernel
    fn name(&self) -> &str;

    /// Check if the kernel is available
    fn is_available(&self) -> bool;

    /// Create a cylinder with its base disc centered on the origin, extending along +Z
    fn create_cylinder(&self, radius: f64, height: f64) -> CadResult<Solid>;

    /// Create a box with one corner at the origin, spanning the positive octant
    fn create_box(&self, length: f64, width: f64, height: f64) -> CadResult<Solid>;

    /// Create one of the derived profile solids
    fn create_shape(&self, shape: &ShapeDef) -> CadResult<Solid>;

    /// Return a copy of `solid` moved by `placement`
    fn transform(&self, solid: &Solid, placement: &Placement) -> CadResult<Solid>;

    /// Perform a boolean operation on two solids
    ///
    /// # Arguments
    /// * `a` - The base solid
    /// * `b` - The tool solid
    /// * `op` - The boolean operation type
    fn boolean(&self, a: &Solid, b: &Solid, op: BooleanType) -> CadResult<Solid>;

    /// Group solids into one compound without merging them
    fn compound(&self, solids: &[Solid]) -> CadResult<Solid>;

    /// Axis-aligned bounds of a solid
    fn bounds(&self, solid: &Solid) -> CadResult<Aabb>;

    /// Drop kernel data held for `solid`
    fn release(&self, _solid: &Solid) {}
}

/// A null kernel that always returns errors (used when no kernel is available)
#[derive(Debug, Default)]
pub struct NullKernel;

impl NullKernel {
    fn unavailable<T>() -> CadResult<T> {
        Err(CadError::KernelNotAvailable("No CAD kernel available".into()))
    }
}

impl CadKernel for NullKernel {
    fn name(&self) -> &str {
        "null"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn create_cylinder(&self, _radius: f64, _height: f64) -> CadResult<Solid> {
        Self::unavailable()
    }

    fn create_box(&self, _length: f64, _width: f64, _height: f64) -> CadResult<Solid> {
        Self::unavailable()
    }

    fn create_shape(&self, _shape: &ShapeDef) -> CadResult<Solid> {
        Self::unavailable()
    }

    fn transform(&self, _solid: &Solid, _placement: &Placement) -> CadResult<Solid> {
        Self::unavailable()
    }

    fn boolean(&self, _a: &Solid, _b: &Solid, _op: BooleanType) -> CadResult<Solid> {
        Self::unavailable()
    }

    fn compound(&self, _solids: &[Solid]) -> CadResult<Solid> {
        Self::unavailable()
    }

    fn bounds(&self, _solid: &Solid) -> CadResult<Aabb> {
        Self::unavailable()
    }
}

/// Get the default CAD kernel
pub fn default_kernel() -> Box<dyn CadKernel> {
    Box::new(super::EnvelopeKernel::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_kernel_reports_unavailable() {
        let kernel = NullKernel;
        assert!(!kernel.is_available());
        assert!(matches!(
            kernel.create_cylinder(1.0, 1.0),
            Err(CadError::KernelNotAvailable(_))
        ));
    }

    #[test]
    fn test_default_kernel_is_available() {
        let kernel = default_kernel();
        assert!(kernel.is_available());
        assert_eq!(kernel.name(), "envelope");
    }
}
