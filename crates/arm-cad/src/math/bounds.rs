//! Axis-aligned bounding boxes

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::{LINEAR_EPSILON, Placement};

/// Axis-aligned bounding box in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Box containing nothing; neutral element of [`Aabb::union`]
    pub const EMPTY: Self = Self {
        min: DVec3::INFINITY,
        max: DVec3::NEG_INFINITY,
    };

    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Self {
        points.into_iter().fold(Self::EMPTY, |acc, p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> DVec3 {
        if self.is_empty() {
            DVec3::ZERO
        } else {
            self.max - self.min
        }
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// True when the interiors overlap; touching faces do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (0..3).all(|axis| {
            self.min[axis] < other.max[axis] - LINEAR_EPSILON
                && other.min[axis] < self.max[axis] - LINEAR_EPSILON
        })
    }

    /// True when `other` lies entirely inside `self`
    pub fn contains(&self, other: &Aabb) -> bool {
        (0..3).all(|axis| self.spans(other, axis))
    }

    /// True when `self` covers `other` along a single axis
    pub fn spans(&self, other: &Aabb, axis: usize) -> bool {
        self.min[axis] <= other.min[axis] + LINEAR_EPSILON
            && self.max[axis] >= other.max[axis] - LINEAR_EPSILON
    }

    pub fn corners(&self) -> [DVec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            DVec3::new(a.x, a.y, a.z),
            DVec3::new(b.x, a.y, a.z),
            DVec3::new(a.x, b.y, a.z),
            DVec3::new(b.x, b.y, a.z),
            DVec3::new(a.x, a.y, b.z),
            DVec3::new(b.x, a.y, b.z),
            DVec3::new(a.x, b.y, b.z),
            DVec3::new(b.x, b.y, b.z),
        ]
    }

    /// Bounds of this box after moving it by `placement`
    pub fn transformed(&self, placement: &Placement) -> Aabb {
        if self.is_empty() {
            return *self;
        }
        Aabb::from_points(self.corners().map(|c| placement.transform_point(c)))
    }

    pub fn approx_eq(&self, other: &Aabb, epsilon: f64) -> bool {
        self.min.abs_diff_eq(other.min, epsilon) && self.max.abs_diff_eq(other.max, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::axis_angle;

    #[test]
    fn test_empty_union() {
        let b = Aabb::new(DVec3::ZERO, DVec3::ONE);
        assert!(Aabb::EMPTY.is_empty());
        assert_eq!(Aabb::EMPTY.union(&b), b);
        assert_eq!(Aabb::EMPTY.size(), DVec3::ZERO);
    }

    #[test]
    fn test_overlap_ignores_touching() {
        let a = Aabb::new(DVec3::ZERO, DVec3::ONE);
        let b = Aabb::new(DVec3::new(1.0, 0.0, 0.0), DVec3::new(2.0, 1.0, 1.0));
        let c = Aabb::new(DVec3::splat(0.5), DVec3::splat(1.5));
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_transformed_rotation() {
        let b = Aabb::new(DVec3::ZERO, DVec3::new(10.0, 2.0, 1.0));
        let p = Placement::new(DVec3::new(0.0, 0.0, 5.0), axis_angle(DVec3::Z, 90.0));
        let t = b.transformed(&p);
        let expected = Aabb::new(DVec3::new(-2.0, 0.0, 5.0), DVec3::new(0.0, 10.0, 6.0));
        assert!(t.approx_eq(&expected, 1e-9));
    }
}
