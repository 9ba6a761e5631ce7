//! Catalog dimensions of the bought parts, in millimeters

/// M5 screw nominal radius
pub const M5_RADIUS: f64 = 2.5;

/// M5 screw head (and nut) clearance radius before tolerance
pub const M5_HEAD_SIZE: f64 = 8.5;

/// 608 bearing width
pub const BEARING_WIDTH: f64 = 7.0;

/// 608 bearing outer diameter
pub const BEARING_OUTER_DIAMETER: f64 = 22.0;

/// 608 bearing bore
pub const BEARING_INNER_DIAMETER: f64 = 8.0;

/// Stepper motor mounting screw hole diameter
pub const MOTOR_SCREW_HOLE_DIAMETER: f64 = 6.21;

/// Radius of the circle through the motor mounting holes
pub const MOTOR_HOLE_CIRCLE_RADIUS: f64 = 49.21;

/// Clearance radius for the motor's shaft boss
pub const MOTOR_BOSS_RADIUS: f64 = 28.0;

/// Default length of cutting tools meant to pass through everything
pub const HOLE_INF: f64 = 1000.0;

/// Default fit tolerance
pub const DEFAULT_TOLERANCE: f64 = 0.5;
