//! Degree-triple rotations
//!
//! A triple `(yaw, pitch, roll)` denotes `Rz(yaw) * Ry(pitch) * Rx(roll)`:
//! yaw about Z, then pitch about the new Y, then roll about the newest X.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Rotation given as yaw/pitch/roll angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerDeg {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl EulerDeg {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Pure rotation about Z
    pub const fn yaw(degrees: f64) -> Self {
        Self::new(degrees, 0.0, 0.0)
    }

    /// Pure rotation about Y
    pub const fn pitch(degrees: f64) -> Self {
        Self::new(0.0, degrees, 0.0)
    }

    /// Pure rotation about X
    pub const fn roll(degrees: f64) -> Self {
        Self::new(0.0, 0.0, degrees)
    }

    pub fn to_quat(self) -> DQuat {
        DQuat::from_rotation_z(self.yaw.to_radians())
            * DQuat::from_rotation_y(self.pitch.to_radians())
            * DQuat::from_rotation_x(self.roll.to_radians())
    }
}

impl From<(f64, f64, f64)> for EulerDeg {
    fn from((yaw, pitch, roll): (f64, f64, f64)) -> Self {
        Self::new(yaw, pitch, roll)
    }
}

/// Rotation argument accepted by the construction helpers
///
/// Either a single triple or a sequence of triples applied in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rotation {
    Single(EulerDeg),
    Composed(Vec<EulerDeg>),
}

impl Default for Rotation {
    fn default() -> Self {
        Self::Single(EulerDeg::IDENTITY)
    }
}

impl Rotation {
    /// Build a composed rotation from raw triples
    pub fn composed(triples: &[(f64, f64, f64)]) -> Self {
        Self::Composed(triples.iter().copied().map(EulerDeg::from).collect())
    }

    pub fn to_quat(&self) -> DQuat {
        match self {
            Self::Single(triple) => create_rotation(*triple),
            Self::Composed(triples) => compound_rotation(triples),
        }
    }
}

impl From<EulerDeg> for Rotation {
    fn from(triple: EulerDeg) -> Self {
        Self::Single(triple)
    }
}

impl From<(f64, f64, f64)> for Rotation {
    fn from(triple: (f64, f64, f64)) -> Self {
        Self::Single(triple.into())
    }
}

impl From<Vec<EulerDeg>> for Rotation {
    fn from(triples: Vec<EulerDeg>) -> Self {
        Self::Composed(triples)
    }
}

/// Rotation for a single triple
pub fn create_rotation(triple: impl Into<EulerDeg>) -> DQuat {
    triple.into().to_quat()
}

/// Chain triples so that the first listed rotation is applied first
///
/// Each step pre-multiplies: `acc = rot(triple) * acc`. An empty slice is the
/// identity.
pub fn compound_rotation(triples: &[EulerDeg]) -> DQuat {
    triples
        .iter()
        .fold(DQuat::IDENTITY, |acc, triple| (triple.to_quat() * acc).normalize())
}

/// Rotation about an arbitrary axis
///
/// A zero axis falls back to +Z, so the angle still turns the object about Z.
pub fn axis_angle(axis: DVec3, degrees: f64) -> DQuat {
    let axis = axis.try_normalize().unwrap_or(DVec3::Z);
    DQuat::from_axis_angle(axis, degrees.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec_eq(a: DVec3, b: DVec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
    }

    #[test]
    fn test_pitch_turns_z_onto_x() {
        let rot = create_rotation((0.0, 90.0, 0.0));
        assert_vec_eq(rot * DVec3::Z, DVec3::X);
        assert_vec_eq(rot * DVec3::X, -DVec3::Z);
    }

    #[test]
    fn test_yaw_matches_axis_angle_about_z() {
        let a = create_rotation(EulerDeg::yaw(30.0));
        let b = axis_angle(DVec3::Z, 30.0);
        assert!(a.abs_diff_eq(b, 1e-12));
    }

    #[test]
    fn test_triple_order_is_z_then_y_then_x() {
        let triple = EulerDeg::new(20.0, 35.0, 50.0);
        let expected = axis_angle(DVec3::Z, 20.0)
            * axis_angle(DVec3::Y, 35.0)
            * axis_angle(DVec3::X, 50.0);
        let v = DVec3::new(0.3, -1.2, 2.5);
        assert_vec_eq(triple.to_quat() * v, expected * v);
    }

    #[test]
    fn test_compound_matches_manual_product() {
        // Rz(45) * Ry(90), written out as a matrix product
        let (s, c) = 45f64.to_radians().sin_cos();
        let v = DVec3::new(1.0, 2.0, 3.0);
        let expected = DVec3::new(-2.0 * s + 3.0 * c, 2.0 * c + 3.0 * s, -1.0);

        let rot = compound_rotation(&[EulerDeg::pitch(90.0), EulerDeg::yaw(45.0)]);
        assert_vec_eq(rot * v, expected);
    }

    #[test]
    fn test_compound_applies_first_rotation_first() {
        let first = EulerDeg::new(10.0, 90.0, 0.0);
        let second = EulerDeg::new(135.0, 0.0, 15.0);
        let v = DVec3::new(0.5, 4.0, -7.0);

        let composed = compound_rotation(&[first, second]);
        let stepwise = second.to_quat() * (first.to_quat() * v);
        assert_vec_eq(composed * v, stepwise);
    }

    #[test]
    fn test_radial_hole_axis_points_outward() {
        for angle in [0.0, 45.0, 200.0] {
            let rot = Rotation::composed(&[(0.0, 90.0, 0.0), (angle, 0.0, 0.0)]).to_quat();
            let (s, c) = f64::to_radians(angle).sin_cos();
            assert_vec_eq(rot * DVec3::Z, DVec3::new(c, s, 0.0));
        }
    }

    #[test]
    fn test_empty_compound_is_identity() {
        assert!(compound_rotation(&[]).abs_diff_eq(DQuat::IDENTITY, 1e-12));
        assert!(Rotation::Composed(Vec::new()).to_quat().abs_diff_eq(DQuat::IDENTITY, 1e-12));
        assert!(Rotation::default().to_quat().abs_diff_eq(DQuat::IDENTITY, 1e-12));
    }

    #[test]
    fn test_zero_axis_turns_about_z() {
        let rot = axis_angle(DVec3::ZERO, 90.0);
        assert!(rot.abs_diff_eq(axis_angle(DVec3::Z, 90.0), 1e-12));
        assert_vec_eq(rot * DVec3::X, DVec3::Y);
        assert!(axis_angle(DVec3::ZERO, 0.0).abs_diff_eq(DQuat::IDENTITY, 1e-12));
    }
}
