//! Scene content: everything spawned into the world besides the camera.
//!
//! Rocks and the environment depend on streamed assets and are spawned by the
//! loading pipeline; the floor, particles and haze planes are spawned on
//! entering the running state.

/// Random rock placement around the scene centre.
///
/// Pure placement generation plus the spawner that clones the rock template.
pub mod scatter;

/// Textured, alpha-masked ground plane.
pub mod floor;

/// Ambient dust particles drawn as a single mesh.
pub mod particles;

/// Additive shimmer planes on the four scene boundaries.
pub mod heat_haze;

/// Equirectangular HDR to cubemap conversion for skybox and image lighting.
pub mod environment;

/// Sun and distance fog.
pub mod lighting;
