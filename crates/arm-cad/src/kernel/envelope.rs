//! Envelope CAD Kernel Backend
//!
//! Tracks each solid as an axis-aligned envelope rather than a boundary
//! representation. Fuses and compounds take the union of their inputs. A cut
//! keeps the base envelope, trimmed only when the tool is an exact box that
//! slices clean through the base.

use std::collections::HashMap;

use glam::{DMat3, DVec3};
use parking_lot::Mutex;
use uuid::Uuid;

use super::{BooleanType, CadError, CadKernel, CadResult, ShapeDef, Solid};
use crate::math::{Aabb, LINEAR_EPSILON, Placement};

#[derive(Debug, Clone, Copy)]
struct Envelope {
    bounds: Aabb,
    /// The solid fills its bounds completely
    exact_box: bool,
}

/// Analytic bounding-envelope kernel
#[derive(Debug, Default)]
pub struct EnvelopeKernel {
    /// Storage for solid data (keyed by UUID)
    solids: Mutex<HashMap<Uuid, Envelope>>,
}

impl EnvelopeKernel {
    /// Create a new envelope kernel
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of solids currently held by the kernel
    pub fn solid_count(&self) -> usize {
        self.solids.lock().len()
    }

    fn store(&self, envelope: Envelope) -> Solid {
        let id = Uuid::new_v4();
        self.solids.lock().insert(id, envelope);
        Solid::new(id)
    }

    fn fetch(&self, solid: &Solid) -> CadResult<Envelope> {
        self.solids
            .lock()
            .get(&solid.id)
            .copied()
            .ok_or(CadError::SolidNotFound(solid.id))
    }
}

fn check_dimension(what: &str, value: f64) -> CadResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CadError::InvalidParameter(format!(
            "{what} must be positive, got {value}"
        )))
    }
}

/// True when the rotation only permutes and flips axes
fn is_axis_permutation(placement: &Placement) -> bool {
    let m = DMat3::from_quat(placement.rotation);
    m.to_cols_array().iter().all(|c| {
        let a = c.abs();
        a < 1e-9 || (a - 1.0).abs() < 1e-9
    })
}

/// Cut an exact box tool out of `base`
fn subtract_box(base: Envelope, tool: &Aabb) -> CadResult<Envelope> {
    let b = &base.bounds;
    let spanned: Vec<usize> = (0..3).filter(|&axis| tool.spans(b, axis)).collect();

    match spanned.len() {
        3 => Err(CadError::BooleanFailed(
            "cut tool encloses the whole base".into(),
        )),
        2 => {
            // The tool is a slab across the base; trim it if it reaches an end
            let Some(axis) = (0..3).find(|axis| !spanned.contains(axis)) else {
                return Ok(base);
            };
            let mut bounds = *b;
            if tool.min[axis] <= b.min[axis] + LINEAR_EPSILON {
                bounds.min[axis] = tool.max[axis];
            } else if tool.max[axis] >= b.max[axis] - LINEAR_EPSILON {
                bounds.max[axis] = tool.min[axis];
            } else {
                return Ok(Envelope {
                    bounds: *b,
                    exact_box: false,
                });
            }
            Ok(Envelope {
                bounds,
                exact_box: base.exact_box,
            })
        }
        _ => Ok(Envelope {
            bounds: *b,
            exact_box: false,
        }),
    }
}

impl CadKernel for EnvelopeKernel {
    fn name(&self) -> &str {
        "envelope"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn create_cylinder(&self, radius: f64, height: f64) -> CadResult<Solid> {
        check_dimension("cylinder radius", radius)?;
        check_dimension("cylinder height", height)?;
        Ok(self.store(Envelope {
            bounds: Aabb::new(
                DVec3::new(-radius, -radius, 0.0),
                DVec3::new(radius, radius, height),
            ),
            exact_box: false,
        }))
    }

    fn create_box(&self, length: f64, width: f64, height: f64) -> CadResult<Solid> {
        check_dimension("box length", length)?;
        check_dimension("box width", width)?;
        check_dimension("box height", height)?;
        Ok(self.store(Envelope {
            bounds: Aabb::new(DVec3::ZERO, DVec3::new(length, width, height)),
            exact_box: true,
        }))
    }

    fn create_shape(&self, shape: &ShapeDef) -> CadResult<Solid> {
        shape.validate()?;
        Ok(self.store(Envelope {
            bounds: shape.local_bounds(),
            exact_box: false,
        }))
    }

    fn transform(&self, solid: &Solid, placement: &Placement) -> CadResult<Solid> {
        if !placement.is_finite() {
            return Err(CadError::OperationFailed(format!(
                "non-finite placement {placement:?}"
            )));
        }
        let envelope = self.fetch(solid)?;
        Ok(self.store(Envelope {
            bounds: envelope.bounds.transformed(placement),
            exact_box: envelope.exact_box && is_axis_permutation(placement),
        }))
    }

    fn boolean(&self, a: &Solid, b: &Solid, op: BooleanType) -> CadResult<Solid> {
        let base = self.fetch(a)?;
        let tool = self.fetch(b)?;

        let result = match op {
            BooleanType::Union => Envelope {
                bounds: base.bounds.union(&tool.bounds),
                exact_box: (base.exact_box && base.bounds.contains(&tool.bounds))
                    || (tool.exact_box && tool.bounds.contains(&base.bounds)),
            },
            BooleanType::Subtract => {
                if !base.bounds.overlaps(&tool.bounds) {
                    base
                } else if tool.exact_box {
                    subtract_box(base, &tool.bounds)?
                } else {
                    Envelope {
                        bounds: base.bounds,
                        exact_box: false,
                    }
                }
            }
        };
        Ok(self.store(result))
    }

    fn compound(&self, solids: &[Solid]) -> CadResult<Solid> {
        let envelopes = solids
            .iter()
            .map(|s| self.fetch(s))
            .collect::<CadResult<Vec<_>>>()?;
        let Some(first) = envelopes.first() else {
            return Err(CadError::InvalidParameter("empty compound".into()));
        };
        let bounds = envelopes
            .iter()
            .fold(Aabb::EMPTY, |acc, e| acc.union(&e.bounds));
        Ok(self.store(Envelope {
            bounds,
            exact_box: envelopes.len() == 1 && first.exact_box,
        }))
    }

    fn bounds(&self, solid: &Solid) -> CadResult<Aabb> {
        Ok(self.fetch(solid)?.bounds)
    }

    fn release(&self, solid: &Solid) {
        self.solids.lock().remove(&solid.id);
    }
}
