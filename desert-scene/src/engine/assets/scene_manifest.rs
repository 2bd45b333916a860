use bevy::prelude::*;
use constants::{paths, particles, render_settings, scatter};
use serde::{Deserialize, Serialize};

use crate::engine::scene::scatter::ScatterSettings;

/// GLTF, HDR and texture locations, relative to the asset root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub scene_model: String,
    pub rock_model: String,
    pub environment_hdr: String,
    pub floor: FloorTexturePaths,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            scene_model: paths::SCENE_MODEL_PATH.to_string(),
            rock_model: paths::ROCK_MODEL_PATH.to_string(),
            environment_hdr: paths::ENVIRONMENT_HDR_PATH.to_string(),
            floor: FloorTexturePaths::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorTexturePaths {
    pub alpha: String,
    pub colour: String,
    pub displacement: String,
    pub normal: String,
    pub roughness: String,
}

impl Default for FloorTexturePaths {
    fn default() -> Self {
        Self {
            alpha: paths::FLOOR_ALPHA_PATH.to_string(),
            colour: paths::FLOOR_COLOUR_PATH.to_string(),
            displacement: paths::FLOOR_DISPLACEMENT_PATH.to_string(),
            normal: paths::FLOOR_NORMAL_PATH.to_string(),
            roughness: paths::FLOOR_ROUGHNESS_PATH.to_string(),
        }
    }
}

/// Rock scatter ranges. Radius and scale are `min + U[0, 1) * span`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RockScatterConfig {
    pub count: usize,
    pub center: [f32; 3],
    pub radius_min: f32,
    pub radius_span: f32,
    pub scale_min: f32,
    pub scale_span: f32,
    pub tilt_jitter: f32,
}

impl Default for RockScatterConfig {
    fn default() -> Self {
        Self {
            count: scatter::ROCK_COUNT,
            center: scatter::SCATTER_CENTER.to_array(),
            radius_min: scatter::ROCK_RADIUS_MIN,
            radius_span: scatter::ROCK_RADIUS_SPAN,
            scale_min: scatter::ROCK_SCALE_MIN,
            scale_span: scatter::ROCK_SCALE_SPAN,
            tilt_jitter: scatter::ROCK_TILT_JITTER,
        }
    }
}

impl RockScatterConfig {
    pub fn settings(&self) -> ScatterSettings {
        ScatterSettings {
            count: self.count,
            center: Vec3::from_array(self.center),
            radius_min: self.radius_min,
            radius_span: self.radius_span.max(0.0),
            scale_min: self.scale_min,
            scale_span: self.scale_span.max(0.0),
            tilt_jitter: self.tilt_jitter.abs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub extent: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: particles::PARTICLE_COUNT,
            extent: particles::PARTICLE_EXTENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Edge length of each generated cubemap face.
    pub face_size: u32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            face_size: render_settings::ENVIRONMENT_FACE_SIZE,
        }
    }
}

/// Complete scene manifest as a Bevy asset. Mirrors the JSON structure; any
/// missing field falls back to the compiled-in defaults.
#[derive(Asset, Resource, TypePath, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneManifest {
    pub assets: AssetPaths,
    pub rocks: RockScatterConfig,
    pub particles: ParticleConfig,
    pub environment: EnvironmentConfig,
    /// Seed for every random draw in the scene. Absent means a fresh layout
    /// on each run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manifest_uses_defaults() {
        let manifest: SceneManifest = serde_json::from_str("{}").unwrap();
        assert_eq!(manifest, SceneManifest::default());
        assert_eq!(manifest.rocks.count, 23);
        assert_eq!(manifest.particles.count, 5000);
        assert_eq!(manifest.seed, None);
        assert_eq!(manifest.assets.rock_model, paths::ROCK_MODEL_PATH);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let json = r#"{
            "seed": 7,
            "rocks": { "count": 5, "radius_min": 2.0 },
            "assets": { "floor": { "alpha": "custom/alpha.png" } }
        }"#;
        let manifest: SceneManifest = serde_json::from_str(json).unwrap();

        assert_eq!(manifest.seed, Some(7));
        assert_eq!(manifest.rocks.count, 5);
        assert_eq!(manifest.rocks.radius_min, 2.0);
        assert_eq!(manifest.rocks.radius_span, scatter::ROCK_RADIUS_SPAN);
        assert_eq!(manifest.assets.floor.alpha, "custom/alpha.png");
        assert_eq!(manifest.assets.floor.colour, paths::FLOOR_COLOUR_PATH);
    }

    #[test]
    fn scatter_settings_sanitise_negative_spans() {
        let config = RockScatterConfig {
            radius_span: -1.0,
            scale_span: -2.0,
            tilt_jitter: -0.05,
            ..default()
        };
        let settings = config.settings();
        assert_eq!(settings.radius_span, 0.0);
        assert_eq!(settings.scale_span, 0.0);
        assert_eq!(settings.tilt_jitter, 0.05);
    }

    #[test]
    fn shipped_manifest_parses() {
        let json = include_str!("../../../assets/scene_manifest.json");
        let manifest: SceneManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.rocks.count, 23);
        assert_eq!(manifest.assets.scene_model, "models/scene.gltf");
    }
}
