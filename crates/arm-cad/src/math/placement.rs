//! Rigid placement (translation + rotation)

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use super::rotation::axis_angle;

/// Position and orientation of an object in world space
///
/// A point `p` of the object's local shape lands at `base + rotation * p`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub base: DVec3,
    pub rotation: DQuat,
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Placement {
    pub const IDENTITY: Self = Self {
        base: DVec3::ZERO,
        rotation: DQuat::IDENTITY,
    };

    pub fn new(base: DVec3, rotation: DQuat) -> Self {
        Self { base, rotation }
    }

    pub fn from_translation(base: DVec3) -> Self {
        Self {
            base,
            rotation: DQuat::IDENTITY,
        }
    }

    /// Placement rotated about `axis` by `degrees`; a zero axis means no rotation
    pub fn from_axis_angle(base: DVec3, axis: DVec3, degrees: f64) -> Self {
        Self::new(base, axis_angle(axis, degrees))
    }

    /// Rotation by `rotation` that keeps `center` fixed
    pub fn around_center(center: DVec3, rotation: DQuat) -> Self {
        Self::new(center - rotation * center, rotation)
    }

    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.base + self.rotation * point
    }

    /// `self * other`: apply `other` first, then `self`
    pub fn multiply(&self, other: &Placement) -> Placement {
        Placement {
            base: self.base + self.rotation * other.base,
            rotation: (self.rotation * other.rotation).normalize(),
        }
    }

    pub fn translated(mut self, offset: DVec3) -> Self {
        self.base += offset;
        self
    }

    pub fn is_finite(&self) -> bool {
        self.base.is_finite() && self.rotation.is_finite()
    }
}
