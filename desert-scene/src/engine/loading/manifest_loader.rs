use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::paths::SCENE_MANIFEST_PATH;

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::error::SceneError;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::scatter::SceneRng;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene manifest from {}", SCENE_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(SCENE_MANIFEST_PATH));
}

// Apply the manifest, or the defaults if it cannot be read, then request every scene asset
pub fn load_manifest_system(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
) {
    if loading_progress.manifest_applied {
        return;
    }
    let Some(handle) = manifest_loader.handle.as_ref() else {
        return;
    };

    let manifest = match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => {
            let Some(manifest) = manifests.get(handle) else {
                return;
            };
            info!("✓ Scene manifest loaded");
            manifest.clone()
        }
        Some(LoadState::Failed(err)) => {
            let err = SceneError::ManifestFailed {
                path: SCENE_MANIFEST_PATH.to_string(),
                reason: err.to_string(),
            };
            error!("{err}; falling back to built-in defaults");
            SceneManifest::default()
        }
        _ => return,
    };

    apply_manifest(&mut commands, &asset_server, manifest);
    loading_progress.manifest_applied = true;
}

pub fn apply_manifest(commands: &mut Commands, asset_server: &AssetServer, manifest: SceneManifest) {
    match manifest.seed {
        Some(seed) => info!("Scene seed: {seed}"),
        None => info!("Scene seed: none, layout varies per run"),
    }
    commands.insert_resource(SceneRng::from_seed(manifest.seed));
    commands.insert_resource(SceneAssets::load(asset_server, &manifest));
    commands.insert_resource(manifest);
}
