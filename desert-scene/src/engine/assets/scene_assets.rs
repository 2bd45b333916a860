use bevy::asset::UntypedAssetId;
use bevy::image::ImageLoaderSettings;
use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::SceneAsset;

/// Floor surface maps. Everything but the alpha mask tiles across the floor.
#[derive(Debug, Clone, Default)]
pub struct FloorTextures {
    pub alpha: Handle<Image>,
    pub colour: Handle<Image>,
    pub displacement: Handle<Image>,
    pub normal: Handle<Image>,
    pub roughness: Handle<Image>,
}

/// Handles for every file requested at startup. Default handles point at
/// nothing until the manifest has been applied.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneAssets {
    pub environment: Handle<Image>,
    pub scene_model: Handle<Scene>,
    pub rock_model: Handle<Scene>,
    pub floor: FloorTextures,
}

impl SceneAssets {
    /// Request every asset named in the manifest.
    pub fn load(asset_server: &AssetServer, manifest: &SceneManifest) -> Self {
        let paths = &manifest.assets;

        info!("Loading scene assets:");
        info!("  Scene model: {}", paths.scene_model);
        info!("  Rock model: {}", paths.rock_model);
        info!("  Environment: {}", paths.environment_hdr);
        info!("  Floor textures: {:?}", paths.floor);

        Self {
            environment: asset_server.load(&paths.environment_hdr),
            scene_model: asset_server
                .load(GltfAssetLabel::Scene(0).from_asset(paths.scene_model.clone())),
            rock_model: asset_server
                .load(GltfAssetLabel::Scene(0).from_asset(paths.rock_model.clone())),
            floor: FloorTextures {
                alpha: load_linear(asset_server, &paths.floor.alpha),
                colour: asset_server.load(&paths.floor.colour),
                displacement: load_linear(asset_server, &paths.floor.displacement),
                normal: asset_server.load(&paths.floor.normal),
                roughness: asset_server.load(&paths.floor.roughness),
            },
        }
    }

    /// Asset ids paired with the scene part they feed.
    pub fn tracked(&self) -> [(SceneAsset, UntypedAssetId); 8] {
        [
            (SceneAsset::Environment, self.environment.id().untyped()),
            (SceneAsset::SceneModel, self.scene_model.id().untyped()),
            (SceneAsset::RockModel, self.rock_model.id().untyped()),
            (SceneAsset::FloorAlpha, self.floor.alpha.id().untyped()),
            (SceneAsset::FloorColour, self.floor.colour.id().untyped()),
            (
                SceneAsset::FloorDisplacement,
                self.floor.displacement.id().untyped(),
            ),
            (SceneAsset::FloorNormal, self.floor.normal.id().untyped()),
            (SceneAsset::FloorRoughness, self.floor.roughness.id().untyped()),
        ]
    }

    pub fn image_for(&self, asset: SceneAsset) -> Option<&Handle<Image>> {
        match asset {
            SceneAsset::Environment => Some(&self.environment),
            SceneAsset::FloorAlpha => Some(&self.floor.alpha),
            SceneAsset::FloorColour => Some(&self.floor.colour),
            SceneAsset::FloorDisplacement => Some(&self.floor.displacement),
            SceneAsset::FloorNormal => Some(&self.floor.normal),
            SceneAsset::FloorRoughness => Some(&self.floor.roughness),
            SceneAsset::SceneModel | SceneAsset::RockModel => None,
        }
    }
}

/// Data textures (masks, height) must not go through sRGB decoding.
fn load_linear(asset_server: &AssetServer, path: &str) -> Handle<Image> {
    asset_server.load_with_settings(path.to_string(), |settings: &mut ImageLoaderSettings| {
        settings.is_srgb = false;
    })
}
