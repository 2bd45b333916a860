//! Shared compile-time defaults for the desert scene.
//!
//! The runtime manifest overrides the asset paths and the scatter settings;
//! everything else is fixed here.

/// Per-frame animation rates for the particle field.
pub mod animation;

/// Heat haze plane layout and tint.
pub mod heat_haze;

/// Particle field density, extent and appearance.
pub mod particles;

/// Default asset locations relative to the asset root.
pub mod paths;

/// Camera, lighting, fog, floor and environment settings.
pub mod render_settings;

/// Rock scatter ranges.
pub mod scatter;
