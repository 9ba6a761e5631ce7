//! Placement math
//!
//! Rotations are expressed as degree triples `(yaw, pitch, roll)` and may be
//! chained into compound rotations. Placements pair a translation with a
//! rotation, and radial patterns lay features out on a circle.

mod bounds;
mod placement;
mod radial;
mod rotation;

pub use bounds::Aabb;
pub use placement::Placement;
pub use radial::{RadialPattern, RadialSlot, polar, remap};
pub use rotation::{EulerDeg, Rotation, axis_angle, compound_rotation, create_rotation};

/// Tolerance used when comparing lengths in millimeters
pub const LINEAR_EPSILON: f64 = 1e-9;
