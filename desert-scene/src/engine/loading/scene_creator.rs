use bevy::prelude::*;
use constants::render_settings::{SCENE_MODEL_OFFSET, SCENE_MODEL_SCALE};

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::loading::progress::{AssetSettled, SceneAsset};
use crate::engine::scene::environment::{environment_components, equirect_to_cubemap};
use crate::engine::scene::scatter::{SceneRng, scatter_placements, spawn_scattered_rocks};

#[derive(Component)]
pub struct SceneModel;

/// Spawned assets react to settle events; a failed load just leaves its part
/// of the scene out.
fn became_ready(settled: &mut EventReader<AssetSettled>, asset: SceneAsset) -> bool {
    settled
        .read()
        .fold(false, |ready, event| {
            ready || (event.asset == asset && event.outcome.is_ok())
        })
}

pub fn spawn_scene_model_when_ready(
    mut commands: Commands,
    mut settled: EventReader<AssetSettled>,
    assets: Res<SceneAssets>,
) {
    if !became_ready(&mut settled, SceneAsset::SceneModel) {
        return;
    }

    commands.spawn((
        Name::new("Scene model"),
        SceneRoot(assets.scene_model.clone()),
        Transform::from_translation(SCENE_MODEL_OFFSET).with_scale(Vec3::splat(SCENE_MODEL_SCALE)),
        SceneModel,
    ));
    info!("Scene model placed");
}

pub fn scatter_rocks_when_ready(
    mut commands: Commands,
    mut settled: EventReader<AssetSettled>,
    assets: Res<SceneAssets>,
    manifest: Res<SceneManifest>,
    mut rng: ResMut<SceneRng>,
) {
    if !became_ready(&mut settled, SceneAsset::RockModel) {
        return;
    }

    let settings = manifest.rocks.settings();
    let placements = scatter_placements(&mut rng.0, &settings);
    spawn_scattered_rocks(&mut commands, &assets.rock_model, &placements);
    info!(
        "Scattered {} rocks around {}",
        placements.len(),
        settings.center
    );
}

pub fn apply_environment_when_ready(
    mut commands: Commands,
    mut settled: EventReader<AssetSettled>,
    assets: Res<SceneAssets>,
    manifest: Res<SceneManifest>,
    mut images: ResMut<Assets<Image>>,
    cameras: Query<Entity, With<OrbitCamera>>,
) {
    if !became_ready(&mut settled, SceneAsset::Environment) {
        return;
    }
    let Some(source) = images.get(&assets.environment) else {
        warn!("Environment reported ready but its image is gone");
        return;
    };

    let face_size = manifest.environment.face_size;
    match equirect_to_cubemap(source, face_size) {
        Ok(cubemap) => {
            let cubemap = images.add(cubemap);
            for camera in &cameras {
                commands
                    .entity(camera)
                    .insert(environment_components(cubemap.clone()));
            }
            info!("Environment cubemap built ({face_size}px faces)");
        }
        Err(err) => error!("Environment unavailable: {err}"),
    }
}
