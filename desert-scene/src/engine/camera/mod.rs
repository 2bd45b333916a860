//! Orbit camera for inspecting the scene.
//!
//! Rotates around a target with the left button, pans with the right button
//! and dollies with the wheel. Motion is damped so it eases out after input
//! stops.

/// Orbit camera component, its spawner and the input controller system.
pub mod orbit_camera;
