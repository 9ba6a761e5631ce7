//! CAD kernel abstraction
//!
//! The document talks to geometry only through [`CadKernel`]. The bundled
//! [`EnvelopeKernel`] tracks analytic bounding envelopes, which is enough to
//! validate dimensions, evaluate placements and query bounds.

mod envelope;
mod shape;
mod traits;

pub use envelope::EnvelopeKernel;
pub use shape::ShapeDef;
pub use traits::*;
