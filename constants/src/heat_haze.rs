use bevy::math::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

/// Plane width along its local X axis.
pub const PLANE_WIDTH: f32 = 35.0;

/// Plane height along its local Y axis.
pub const PLANE_HEIGHT: f32 = 6.0;

/// Distance of every plane from the scene centre.
pub const PLANE_DISTANCE: f32 = 10.0;

/// Height of the plane centres above the ground.
pub const PLANE_ELEVATION: f32 = 2.0;

/// Warm tint applied to the shimmer (linear RGB).
pub const TINT: [f32; 3] = [1.0, 0.95, 0.85];

pub struct HazePlane {
    /// Unit direction from the centre to the plane.
    pub direction: Vec3,
    pub yaw: f32,
}

/// One plane per cardinal boundary: right, left, front, back.
pub const HAZE_PLANES: [HazePlane; 4] = [
    HazePlane {
        direction: Vec3::X,
        yaw: FRAC_PI_2,
    },
    HazePlane {
        direction: Vec3::NEG_X,
        yaw: -FRAC_PI_2,
    },
    HazePlane {
        direction: Vec3::Z,
        yaw: 0.0,
    },
    HazePlane {
        direction: Vec3::NEG_Z,
        yaw: PI,
    },
];
