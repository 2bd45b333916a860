/// Particle field yaw gained per second of elapsed time (radians).
pub const PARTICLE_YAW_RATE: f32 = 0.02;

/// Angular frequency of the particle field bobbing (radians per second).
pub const PARTICLE_BOB_FREQUENCY: f32 = 0.3;

/// Peak vertical displacement of the particle field.
pub const PARTICLE_BOB_AMPLITUDE: f32 = 0.2;
