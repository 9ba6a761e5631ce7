//! Radial layouts

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// `count` slots evenly spaced around a circle, starting at `phase_deg`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialPattern {
    pub count: usize,
    pub phase_deg: f64,
}

/// One slot of a radial pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialSlot {
    pub index: usize,
    pub angle_deg: f64,
}

impl RadialSlot {
    /// Point on the circle of `radius` at this slot's angle
    pub fn at(&self, radius: f64) -> DVec2 {
        polar(radius, self.angle_deg)
    }
}

impl RadialPattern {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            phase_deg: 0.0,
        }
    }

    pub fn with_phase(mut self, phase_deg: f64) -> Self {
        self.phase_deg = phase_deg;
        self
    }

    /// Angular spacing between consecutive slots
    pub fn step(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            360.0 / self.count as f64
        }
    }

    pub fn angle(&self, index: usize) -> f64 {
        self.step() * index as f64 + self.phase_deg
    }

    pub fn slots(&self) -> impl Iterator<Item = RadialSlot> + '_ {
        (0..self.count).map(|index| RadialSlot {
            index,
            angle_deg: self.angle(index),
        })
    }
}

/// Cartesian point at `radius` and `angle_deg` in the XY plane
pub fn polar(radius: f64, angle_deg: f64) -> DVec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    DVec2::new(cos * radius, sin * radius)
}

/// Linear map from the `from` interval onto the `to` interval
///
/// `remap((0.0, 1.0), (-1.0, 1.0))` turns a loop index 0/1 into a side sign.
pub fn remap(from: (f64, f64), to: (f64, f64)) -> impl Fn(f64) -> f64 {
    let span = from.1 - from.0;
    move |value| {
        if span == 0.0 {
            to.0
        } else {
            to.0 + (value - from.0) / span * (to.1 - to.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pattern_angles_with_phase() {
        let pattern = RadialPattern::new(8).with_phase(22.5);
        let angles: Vec<f64> = pattern.slots().map(|s| s.angle_deg).collect();
        assert_eq!(angles.len(), 8);
        for (i, angle) in angles.iter().enumerate() {
            assert_relative_eq!(*angle, 22.5 + 45.0 * i as f64);
        }
    }

    #[test]
    fn test_empty_pattern() {
        let pattern = RadialPattern::new(0);
        assert_eq!(pattern.slots().count(), 0);
        assert_eq!(pattern.step(), 0.0);
    }

    #[test]
    fn test_polar() {
        let p = polar(70.0, 90.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 70.0, epsilon = 1e-9);

        let slot = RadialPattern::new(4).with_phase(45.0).slots().next();
        let q = slot.map(|s| s.at(2f64.sqrt()));
        assert!(q.is_some_and(|q| q.abs_diff_eq(DVec2::ONE, 1e-9)));
    }

    #[test]
    fn test_remap_index_to_side() {
        let side = remap((0.0, 1.0), (-1.0, 1.0));
        assert_relative_eq!(side(0.0), -1.0);
        assert_relative_eq!(side(1.0), 1.0);
        assert_relative_eq!(side(0.5), 0.0);
    }
}
