use bevy::math::Vec3;

/// Number of rock instances scattered around the centre.
pub const ROCK_COUNT: usize = 23;

pub const ROCK_RADIUS_MIN: f32 = 4.0;
pub const ROCK_RADIUS_SPAN: f32 = 7.0;

pub const ROCK_SCALE_MIN: f32 = 0.5;
pub const ROCK_SCALE_SPAN: f32 = 3.0;

/// Full width of the X/Z tilt jitter; draws land in `[-w / 2, w / 2)`.
pub const ROCK_TILT_JITTER: f32 = 0.05;

pub const SCATTER_CENTER: Vec3 = Vec3::ZERO;
