//! CAD Document and Construction Helpers
//!
//! This crate provides:
//! - Placement math: degree-triple rotations, compound rotations, radial patterns
//! - An abstract CAD kernel trait with an analytic envelope backend
//! - A document holding the named object graph of a part, with recompute
//! - Construction helpers (primitives, holes, cut/fuse) that edit a document

pub mod build;
pub mod document;
pub mod kernel;
pub mod math;

// Re-exports for convenience
pub use build::{BuildError, BuildResult, HoleProfile, HoleSpec};
pub use document::{Document, DocumentError, DocumentObject, DocumentResult, ObjectKind};
pub use kernel::{
    BooleanType, CadError, CadKernel, CadResult, EnvelopeKernel, NullKernel, ShapeDef, Solid,
    default_kernel,
};
pub use math::{Aabb, EulerDeg, Placement, RadialPattern, Rotation};
