use bevy::math::Vec3;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(4.0, 0.0, 4.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 3.5, 0.0);

/// Fraction of the pending orbit motion removed every frame.
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_MIN_RADIUS: f32 = 0.5;
pub const ORBIT_MAX_RADIUS: f32 = 80.0;

pub const FOG_COLOUR: [u8; 3] = [0xcb, 0xd6, 0x9b];
pub const FOG_DENSITY: f32 = 0.08;

pub const SUN_POSITION: Vec3 = Vec3::new(10.0, 8.0, 8.5);
pub const SUN_ILLUMINANCE: f32 = 8_000.0;

pub const FLOOR_SIZE: f32 = 30.0;
/// Tiling of the floor surface maps; the alpha mask is never tiled.
pub const FLOOR_TEXTURE_REPEAT: f32 = 4.0;

pub const SCENE_MODEL_OFFSET: Vec3 = Vec3::new(0.0, 1.6, 0.0);
pub const SCENE_MODEL_SCALE: f32 = 5.0;

/// Edge length of each cubemap face built from the equirectangular HDR.
pub const ENVIRONMENT_FACE_SIZE: u32 = 256;
pub const SKYBOX_BRIGHTNESS: f32 = 1_000.0;
pub const ENVIRONMENT_INTENSITY: f32 = 900.0;
