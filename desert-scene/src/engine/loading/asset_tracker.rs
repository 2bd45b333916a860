use bevy::asset::RecursiveDependencyLoadState;
use bevy::prelude::*;

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::error::SceneError;
use crate::engine::loading::progress::{AssetSettled, AssetStatus, LoadingProgress, SceneAsset};

/// Map the asset server's view of a load (including its dependencies, so a
/// GLTF scene only counts once its meshes and textures are in) to a status.
pub fn status_from_load_state(
    asset: SceneAsset,
    path: &str,
    state: &RecursiveDependencyLoadState,
) -> AssetStatus {
    match state {
        RecursiveDependencyLoadState::Loaded => AssetStatus::Ready,
        RecursiveDependencyLoadState::Failed(err) => AssetStatus::Failed(SceneError::AssetFailed {
            asset,
            path: path.to_string(),
            reason: err.to_string(),
        }),
        RecursiveDependencyLoadState::NotLoaded | RecursiveDependencyLoadState::Loading => {
            AssetStatus::Pending
        }
    }
}

// Check every outstanding scene asset and announce the ones that finished
pub fn poll_scene_assets(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<SceneAssets>,
    asset_server: Res<AssetServer>,
    mut settled: EventWriter<AssetSettled>,
) {
    for (asset, id) in assets.tracked() {
        if loading_progress.status(asset).is_settled() {
            continue;
        }
        let Some(state) = asset_server.get_recursive_dependency_load_state(id) else {
            continue;
        };

        let path = asset_server
            .get_path(id)
            .map(|path| path.to_string())
            .unwrap_or_else(|| String::from("<unknown>"));
        let status = status_from_load_state(asset, &path, &state);
        if !loading_progress.settle(asset, status.clone()) {
            continue;
        }

        match status.into_outcome() {
            Some(Ok(())) => {
                info!("✓ {asset} loaded ({path})");
                settled.write(AssetSettled {
                    asset,
                    outcome: Ok(()),
                });
            }
            Some(Err(err)) => {
                error!("{err}");
                settled.write(AssetSettled {
                    asset,
                    outcome: Err(err),
                });
            }
            None => {}
        }
    }
}

pub fn report_loading_summary(mut loading_progress: ResMut<LoadingProgress>) {
    if loading_progress.summary_reported || !loading_progress.is_settled() {
        return;
    }
    loading_progress.summary_reported = true;

    let failed = loading_progress.failures().count();
    if failed == 0 {
        info!("Scene assembled: all {} assets ready", loading_progress.ready_count());
    } else {
        warn!(
            "Scene assembled with gaps: {} ready, {} failed",
            loading_progress.ready_count(),
            failed
        );
        for (asset, err) in loading_progress.failures() {
            warn!("  missing {asset}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_dependencies_mean_ready() {
        let status = status_from_load_state(
            SceneAsset::RockModel,
            "rocks/rock.gltf#Scene0",
            &RecursiveDependencyLoadState::Loaded,
        );
        assert_eq!(status, AssetStatus::Ready);
    }

    #[test]
    fn in_flight_loads_stay_pending() {
        for state in [
            RecursiveDependencyLoadState::NotLoaded,
            RecursiveDependencyLoadState::Loading,
        ] {
            let status = status_from_load_state(SceneAsset::Environment, "sky.hdr", &state);
            assert_eq!(status, AssetStatus::Pending);
        }
    }
}
