use bevy::render::render_resource::TextureFormat;

use crate::engine::loading::progress::SceneAsset;

/// Failures surfaced while assembling the scene.
///
/// None of these stop the frame loop; the affected part of the scene is simply
/// left out and the error is logged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("{asset} failed to load from '{path}': {reason}")]
    AssetFailed {
        asset: SceneAsset,
        path: String,
        reason: String,
    },
    #[error("scene manifest '{path}' failed to load: {reason}")]
    ManifestFailed { path: String, reason: String },
    #[error("environment map format {format:?} is not supported, expected Rgba32Float")]
    UnsupportedEnvironmentFormat { format: TextureFormat },
    #[error("environment map has no CPU-side pixel data")]
    MissingPixelData,
    #[error("environment map size {width}x{height} is not a usable equirectangular image")]
    InvalidEnvironmentSize { width: u32, height: u32 },
}
