/// Number of particles in the ambient dust field.
pub const PARTICLE_COUNT: usize = 5000;

/// Side length of the cube the particles are scattered in, centred on the origin.
pub const PARTICLE_EXTENT: f32 = 40.0;

/// Edge length of a single particle quad.
pub const PARTICLE_SIZE: f32 = 0.02;

/// Sandy particle colour (sRGB bytes).
pub const PARTICLE_COLOUR: [u8; 3] = [0xd4, 0xa5, 0x74];

pub const PARTICLE_OPACITY: f32 = 0.5;
