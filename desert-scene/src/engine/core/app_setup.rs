// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::orbit_camera::{orbit_camera_controller, spawn_camera};
use crate::engine::scene::floor::spawn_floor;
use crate::engine::scene::heat_haze::spawn_heat_haze_planes;
use crate::engine::scene::lighting::spawn_sun;
use crate::engine::scene::particles::spawn_particle_field;
use crate::engine::shaders::{FloorMaterial, HeatHazeMaterial};

// Loading pipeline
use crate::engine::loading::asset_tracker::{poll_scene_assets, report_loading_summary};
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::progress::{AssetSettled, LoadingProgress};
use crate::engine::loading::scene_creator::{
    apply_environment_when_ready, scatter_rocks_when_ready, spawn_scene_model_when_ready,
};
use crate::engine::loading::texture_config::configure_floor_textures;

// Runtime systems
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::systems::frame_update::advance_frame;
use crate::engine::systems::render_loop::{RenderLoop, start_render_loop, tick_render_loop};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::render_loop::toggle_render_loop;

const LOG_FILTER: &str = "info,wgpu=error,naga=warn,bevy_render=warn";

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MaterialPlugin::<HeatHazeMaterial>::default())
        .add_plugins(MaterialPlugin::<FloorMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<SceneAssets>()
        .init_resource::<RenderLoop>()
        .add_event::<AssetSettled>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (load_manifest_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            OnEnter(AppState::Running),
            (
                start_render_loop,
                spawn_floor,
                spawn_particle_field,
                spawn_heat_haze_planes,
            ),
        );

    // Streamed assets land while the scene is already running.
    app.add_systems(
        Update,
        (
            poll_scene_assets,
            (
                spawn_scene_model_when_ready,
                scatter_rocks_when_ready,
                apply_environment_when_ready,
                configure_floor_textures,
            ),
            report_loading_summary,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    let frame_systems = (tick_render_loop, advance_frame, orbit_camera_controller).chain();

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            (toggle_render_loop, frame_systems)
                .chain()
                .run_if(in_state(AppState::Running)),
        );
        app.add_systems(Update, fps_text_update_system);
    }

    #[cfg(target_arch = "wasm32")]
    {
        app.add_systems(Update, frame_systems.run_if(in_state(AppState::Running)));
    }

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_sun(&mut commands);
    spawn_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        spawn_fps_overlay(&mut commands);
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
