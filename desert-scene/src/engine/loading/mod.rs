//! Asset loading pipeline.
//!
//! The manifest is loaded first; once applied, every scene asset is requested
//! at once and polled each frame. Each load settles exactly once into ready or
//! failed, and the scene parts that depend on it are assembled from the
//! resulting `AssetSettled` events.

/// Scene manifest loading and fallback to built-in defaults.
///
/// Requests every scene asset once the manifest is known.
pub mod manifest_loader;

/// Per-asset load status and settle events.
pub mod progress;

/// Load state polling for GLTF scenes, the HDR and floor textures.
pub mod asset_tracker;

/// Sampler configuration for the floor maps once they arrive.
pub mod texture_config;

/// Event-driven spawning of the scene model, rocks and environment.
pub mod scene_creator;
